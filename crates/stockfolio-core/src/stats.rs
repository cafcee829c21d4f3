//! Descriptive statistics and bootstrap resampling over return series.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::{StockSeries, MIN_OBSERVATIONS};
use crate::ValidationError;

/// Summary statistics of a stock's periodic returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub quantiles: Quantiles,
}

/// Fixed quantile grid reported for every series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantiles {
    pub p05: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
}

/// Histogram arrays for an external plotting collaborator.
///
/// `edges` has one more entry than `counts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub counts: Vec<u64>,
    pub edges: Vec<f64>,
}

/// Compute descriptive statistics over a series' returns.
///
/// Fails with [`ValidationError::InsufficientData`] when the series has
/// fewer than two observations (no returns to describe).
pub fn compute_stats(series: &StockSeries) -> Result<SeriesStats, ValidationError> {
    series.require_observations(MIN_OBSERVATIONS)?;

    let returns = series.returns();
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    // Sample variance; a lone return has no spread to estimate.
    let variance = if returns.len() > 1 {
        returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0)
    } else {
        0.0
    };

    let mut sorted = returns.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Ok(SeriesStats {
        mean,
        std: variance.sqrt(),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        quantiles: Quantiles {
            p05: quantile_sorted(&sorted, 0.05),
            p25: quantile_sorted(&sorted, 0.25),
            p50: quantile_sorted(&sorted, 0.50),
            p75: quantile_sorted(&sorted, 0.75),
            p95: quantile_sorted(&sorted, 0.95),
        },
    })
}

/// Nearest-rank quantile of an ascending-sorted, non-empty slice.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let idx = (q.clamp(0.0, 1.0) * (sorted.len() as f64 - 1.0)).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

/// Draw `n` bootstrap samples (with replacement) from historical returns.
pub fn bootstrap_resample(returns: &[f64], n: usize, rng: &mut impl Rng) -> Vec<f64> {
    (0..n).map(|_| returns[rng.gen_range(0..returns.len())]).collect()
}

/// Bucket `values` into `bins` equal-width bins spanning their range.
pub fn histogram(values: &[f64], bins: usize) -> Result<Histogram, ValidationError> {
    if bins == 0 {
        return Err(ValidationError::InvalidParameter {
            name: "bins",
            reason: String::from("must be greater than zero"),
        });
    }
    if values.is_empty() {
        return Err(ValidationError::InvalidParameter {
            name: "values",
            reason: String::from("cannot build a histogram of an empty series"),
        });
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Degenerate (constant) series still gets a non-zero bin width.
    let width = ((max - min) / bins as f64).max(f64::EPSILON);

    let edges: Vec<f64> = (0..=bins).map(|i| min + width * i as f64).collect();
    let mut counts = vec![0u64; bins];
    for value in values {
        let idx = (((value - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Ok(Histogram { counts, edges })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::domain::{Observation, ObservationDate, Ticker};

    fn series_from_prices(prices: &[f64]) -> StockSeries {
        let observations = prices
            .iter()
            .enumerate()
            .map(|(i, &price)| {
                let date = ObservationDate::parse(&format!("2024-01-{:02}", i + 1))
                    .expect("valid date");
                Observation::new(date, price).expect("valid observation")
            })
            .collect();
        StockSeries::new(Ticker::parse("NVO").expect("valid"), observations)
            .expect("series should build")
    }

    #[test]
    fn constant_prices_have_zero_std() {
        let series = series_from_prices(&[50.0, 50.0, 50.0, 50.0]);
        let stats = compute_stats(&series).expect("stats should compute");
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.quantiles.p50, 0.0);
    }

    #[test]
    fn std_uses_the_sample_divisor() {
        // Returns are +10% then -10%; mean 0, sample variance 0.02/1.
        let series = series_from_prices(&[100.0, 110.0, 99.0]);
        let stats = compute_stats(&series).expect("stats should compute");
        assert!(stats.mean.abs() < 1e-12);
        assert!((stats.std - 0.02f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn single_return_has_zero_std() {
        let series = series_from_prices(&[100.0, 105.0]);
        let stats = compute_stats(&series).expect("stats should compute");
        assert!((stats.mean - 0.05).abs() < 1e-12);
        assert_eq!(stats.std, 0.0);
    }

    #[test]
    fn single_observation_is_insufficient() {
        let series = series_from_prices(&[50.0]);
        let err = compute_stats(&series).expect_err("must fail");
        assert!(matches!(err, ValidationError::InsufficientData { .. }));
    }

    #[test]
    fn quantiles_bracket_the_median() {
        let series = series_from_prices(&[100.0, 101.0, 99.0, 103.0, 102.0, 104.0]);
        let stats = compute_stats(&series).expect("stats should compute");
        assert!(stats.quantiles.p05 <= stats.quantiles.p50);
        assert!(stats.quantiles.p50 <= stats.quantiles.p95);
        assert!(stats.min <= stats.quantiles.p05);
        assert!(stats.quantiles.p95 <= stats.max);
    }

    #[test]
    fn resample_is_deterministic_with_seed() {
        let returns = [0.01, -0.02, 0.005, 0.03];
        let a = bootstrap_resample(&returns, 16, &mut StdRng::seed_from_u64(7));
        let b = bootstrap_resample(&returns, 16, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.iter().all(|r| returns.contains(r)));
    }

    #[test]
    fn histogram_counts_cover_all_values() {
        let values = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5];
        let hist = histogram(&values, 5).expect("histogram should build");
        assert_eq!(hist.counts.len(), 5);
        assert_eq!(hist.edges.len(), 6);
        assert_eq!(hist.counts.iter().sum::<u64>(), values.len() as u64);
    }

    #[test]
    fn histogram_handles_constant_values() {
        let hist = histogram(&[0.25; 10], 4).expect("histogram should build");
        assert_eq!(hist.counts.iter().sum::<u64>(), 10);
    }

    #[test]
    fn histogram_rejects_zero_bins() {
        let err = histogram(&[1.0], 0).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidParameter { name: "bins", .. }));
    }
}
