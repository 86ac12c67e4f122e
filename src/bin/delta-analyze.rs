//! Delta moment-independent analysis of model input/output files

use anyhow::{ensure, Context, Result};
use clap::Parser;
use sensitivity_stats::sensitivity_io::{load_matrix, load_vector, read_param_file, Delimiter};
use sensitivity_stats::{analyze, AnalysisConfig, ExecutionStrategy};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "delta-analyze")]
#[command(author, version, about = "Delta moment-independent sensitivity analysis")]
struct Cli {
    /// Parameter file: one `name lower upper` line per parameter
    #[arg(short = 'p', long)]
    paramfile: PathBuf,

    /// Model input sample, one row per model run
    #[arg(short = 'X', long)]
    model_input_file: PathBuf,

    /// Model outputs, one row per model run
    #[arg(short = 'Y', long)]
    model_output_file: PathBuf,

    /// Field delimiter of the data files (a single character, or "whitespace")
    #[arg(long, default_value = "whitespace")]
    delimiter: Delimiter,

    /// Zero-based column of the output file to analyze
    #[arg(long, default_value_t = 0)]
    column: usize,

    /// Bootstrap resamples per parameter
    #[arg(short = 'r', long, default_value_t = 10)]
    resamples: usize,

    /// Confidence level of the reported half-widths
    #[arg(long, default_value_t = 0.95)]
    conf_level: f64,

    /// Seed for reproducible bootstrap draws
    #[arg(long)]
    seed: Option<u64>,

    /// Analyze parameters on all cores (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Print the indices as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "sensitivity=debug,delta_analyze=debug"
    } else {
        "sensitivity=info,delta_analyze=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let problem = read_param_file(&cli.paramfile)
        .with_context(|| format!("reading parameter file {}", cli.paramfile.display()))?;
    let x = load_matrix(&cli.model_input_file, cli.delimiter, None)
        .with_context(|| format!("reading model inputs {}", cli.model_input_file.display()))?;
    let y = load_vector(&cli.model_output_file, cli.delimiter, cli.column)
        .with_context(|| format!("reading model outputs {}", cli.model_output_file.display()))?;
    ensure!(
        x.ncols() == problem.num_vars(),
        "model input file has {} columns but the parameter file names {} parameters",
        x.ncols(),
        problem.num_vars()
    );
    info!(parameters = problem.num_vars(), samples = y.len(), "inputs loaded");

    let strategy = if cli.parallel {
        ExecutionStrategy::Parallel
    } else {
        ExecutionStrategy::Sequential
    };
    let mut config = AnalysisConfig::new()
        .with_resamples(cli.resamples)
        .with_confidence_level(cli.conf_level)
        .with_strategy(strategy)
        .print_to_console(!cli.json);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let indices = analyze(&problem, &x, &y, &config).context("delta analysis failed")?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&indices)?);
    }
    Ok(())
}
