//! Delta moment-independent analysis over every model parameter

use crate::bootstrap::DeltaBootstrap;
use crate::config::AnalysisConfig;
use crate::partition::{evaluation_grid, Partition, GRID_POINTS};
use crate::sobol::sobol_first;
use crate::types::{ProblemDescriptor, SensitivityIndices};
use nalgebra::DMatrix;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sensitivity_core::{utils, BootstrapIndices, Error, ExecutionStrategy, Result};
use tracing::{debug, info, instrument};

/// Indices for a single parameter column
#[derive(Debug, Clone, Copy)]
struct ParameterResult {
    delta: f64,
    delta_conf: f64,
    s1: f64,
    s1_conf: f64,
}

/// Compute delta, its confidence half-width, S1 and its half-width for
/// every parameter
///
/// `x` is the `N × D` sample matrix, one column per parameter in the order
/// of `problem.names`; `y` holds the `N` model outputs. With
/// `config.seed == None` the bootstrap is seeded from the OS.
///
/// # Errors
///
/// Inputs are checked before any computation, in this order:
///
/// 1. [`Error::InvalidConfidenceLevel`] / [`Error::InvalidParameter`] for a bad config
/// 2. [`Error::ShapeMismatch`] / [`Error::InsufficientData`] for inconsistent dimensions
/// 3. [`Error::NonFinite`] for NaN or infinite inputs
/// 4. [`Error::DegenerateOutput`] for a constant output vector
///
/// A bin whose outputs cannot support a density estimate fails the run
/// with [`Error::DegeneratePartition`].
///
/// # Examples
///
/// ```rust
/// use nalgebra::DMatrix;
/// use sensitivity_delta::{analyze, AnalysisConfig, ProblemDescriptor};
///
/// let n = 200;
/// let x = DMatrix::from_fn(n, 2, |i, j| ((i * 37 + j * 101) % n) as f64 / n as f64);
/// let y: Vec<f64> = (0..n).map(|i| x[(i, 0)] * 2.0 + x[(i, 1)].sin()).collect();
///
/// let problem = ProblemDescriptor::new(["a", "b"]);
/// let config = AnalysisConfig::default().with_seed(1);
/// let indices = analyze(&problem, &x, &y, &config).unwrap();
/// assert_eq!(indices.delta().len(), 2);
/// ```
pub fn analyze(
    problem: &ProblemDescriptor,
    x: &DMatrix<f64>,
    y: &[f64],
    config: &AnalysisConfig,
) -> Result<SensitivityIndices> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    analyze_with_rng(problem, x, y, config, &mut rng)
}

/// [`analyze`] with a caller-supplied random source
///
/// One base seed per parameter is drawn from `rng` up front, so the result
/// depends only on the state of `rng` and not on `config.strategy`.
/// `config.seed` is ignored.
#[instrument(skip_all, fields(n = y.len(), d = problem.num_vars(), strategy = ?config.strategy))]
pub fn analyze_with_rng<R: Rng + ?Sized>(
    problem: &ProblemDescriptor,
    x: &DMatrix<f64>,
    y: &[f64],
    config: &AnalysisConfig,
    rng: &mut R,
) -> Result<SensitivityIndices> {
    config.validate()?;
    validate_inputs(problem, x, y)?;

    let n = y.len();
    let d = problem.num_vars();
    let partition = Partition::new(n)?;
    let grid = evaluation_grid(y, GRID_POINTS)?;
    debug!(bins = partition.bin_count(), grid_points = grid.len(), "partition ready");

    let seeds: Vec<u64> = (0..d).map(|_| rng.gen()).collect();
    // parameters share the pool, resamples within one parameter stay on its thread
    let bootstrap = DeltaBootstrap::new(config.num_resamples, config.conf_level)
        .with_strategy(ExecutionStrategy::Sequential);

    let rows = config.strategy.try_execute_batch(d, |i| {
        let name = &problem.names[i];
        let column: Vec<f64> = x.column(i).iter().copied().collect();
        let mut param_rng = ChaCha8Rng::seed_from_u64(seeds[i]);
        let delta_indices = BootstrapIndices::from_rng(&mut param_rng, n);
        let sobol_indices = BootstrapIndices::from_rng(&mut param_rng, n);

        analyze_parameter(&bootstrap, y, &grid, &column, &partition, &delta_indices, &sobol_indices)
            .map_err(|e| e.for_parameter(name))
    })?;

    let mut indices = SensitivityIndices::zeros(problem.names.clone());
    for (i, row) in rows.into_iter().enumerate() {
        indices.delta[i] = row.delta;
        indices.delta_conf[i] = row.delta_conf;
        indices.s1[i] = row.s1;
        indices.s1_conf[i] = row.s1_conf;
    }
    info!(parameters = d, samples = n, "delta analysis complete");

    if config.print_to_console {
        println!("{indices}");
    }
    Ok(indices)
}

fn analyze_parameter(
    bootstrap: &DeltaBootstrap,
    y: &[f64],
    grid: &[f64],
    column: &[f64],
    partition: &Partition,
    delta_indices: &BootstrapIndices,
    sobol_indices: &BootstrapIndices,
) -> Result<ParameterResult> {
    let delta = bootstrap.bias_reduced_delta(y, grid, column, partition, delta_indices)?;
    let s1 = sobol_first(y, column, partition)?;
    let s1_conf = bootstrap.sobol_first_conf(y, column, partition, sobol_indices)?;
    Ok(ParameterResult {
        delta: delta.estimate,
        delta_conf: delta.half_width,
        s1,
        s1_conf,
    })
}

fn validate_inputs(problem: &ProblemDescriptor, x: &DMatrix<f64>, y: &[f64]) -> Result<()> {
    problem.validate()?;
    let d = problem.num_vars();
    if x.ncols() != d {
        return Err(Error::size_mismatch(d, x.ncols(), "sample matrix columns"));
    }
    if x.nrows() != y.len() {
        return Err(Error::size_mismatch(x.nrows(), y.len(), "output vector length"));
    }
    if y.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: y.len(),
        });
    }
    if !x.iter().all(|v| v.is_finite()) {
        return Err(Error::non_finite("sample matrix"));
    }
    if !utils::all_finite(y) {
        return Err(Error::non_finite("output vector"));
    }
    if !utils::has_spread(y) {
        return Err(Error::DegenerateOutput);
    }
    Ok(())
}
