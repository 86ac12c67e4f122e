//! Descriptive statistics and ranking helpers over data slices

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use sensitivity_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Population variance (divides by `n`)
///
/// Returns 0.0 for empty slices.
pub fn population_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64
}

/// Calculate the sample standard deviation (divides by `n - 1`)
///
/// Returns 0.0 for slices with less than 2 elements.
///
/// # Examples
///
/// ```rust
/// use sensitivity_core::utils::std_dev;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let sd = std_dev(&data);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m = mean(data);
    let variance: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / (data.len() - 1) as f64;
    variance.sqrt()
}

/// Whether the slice holds at least two distinct values
pub fn has_spread(data: &[f64]) -> bool {
    match data.first() {
        Some(&first) => data.iter().any(|&x| x != first),
        None => false,
    }
}

/// Minimum and maximum of a slice, `None` when empty
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    let first = *data.first()?;
    Some(
        data.iter()
            .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))),
    )
}

/// `count` equally spaced values from `start` to `end` inclusive
///
/// The last value is exactly `end`. A single point yields `[start]`.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut points: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            points[count - 1] = end;
            points
        }
    }
}

/// Ordinal ranks `1..=n`
///
/// Ties are broken by original position, so every element gets a
/// distinct integer rank.
///
/// # Examples
///
/// ```rust
/// use sensitivity_core::utils::ordinal_ranks;
///
/// assert_eq!(ordinal_ranks(&[0.3, 0.1, 0.3, 0.2]), vec![3, 1, 4, 2]);
/// ```
pub fn ordinal_ranks(data: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..data.len()).collect();
    // sort_by is stable, equal values keep their input order
    order.sort_by(|&a, &b| data[a].total_cmp(&data[b]));

    let mut ranks = vec![0; data.len()];
    for (position, &index) in order.iter().enumerate() {
        ranks[index] = position + 1;
    }
    ranks
}

/// Whether every value is finite
pub fn all_finite(data: &[f64]) -> bool {
    data.iter().all(|x| x.is_finite())
}
