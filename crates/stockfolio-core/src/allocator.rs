//! Confidence-based Monte Carlo portfolio allocation.
//!
//! Each round draws a candidate weight vector uniformly over the
//! simplex, scores it against a bootstrap of the joint historical
//! returns, and keeps the running best. The score is a lower-percentile
//! simulated portfolio return, so consistent candidates beat volatile
//! ones with the same mean.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp1};
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{Ticker, MIN_OBSERVATIONS};
use crate::portfolio::Portfolio;
use crate::stats::quantile_sorted;
use crate::ValidationError;

/// Tunable parameters for [`ConfidenceAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AllocatorConfig {
    /// Number of candidate weight vectors to evaluate.
    pub iterations: usize,
    /// RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Percentile of simulated outcomes used as the score, in (0, 0.5].
    pub confidence: f64,
    /// Bootstrap samples drawn per candidate.
    pub samples_per_round: usize,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            seed: None,
            confidence: 0.05,
            samples_per_round: 256,
        }
    }
}

/// Result of a successful allocation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationOutcome {
    pub weights: BTreeMap<Ticker, f64>,
    /// Confidence-adjusted score of the winning candidate.
    pub score: f64,
    /// Zero-based round in which the winner was first seen.
    pub best_round: usize,
    pub iterations: usize,
    pub seed: Option<u64>,
}

/// Monte Carlo allocator that mutates a [`Portfolio`]'s weights in place
/// on success and leaves them untouched on any failure.
#[derive(Debug, Clone)]
pub struct ConfidenceAllocator {
    config: AllocatorConfig,
}

impl ConfidenceAllocator {
    pub fn new(config: AllocatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    pub fn allocate(&self, portfolio: &mut Portfolio) -> Result<AllocationOutcome, ValidationError> {
        self.validate_config()?;

        if portfolio.is_empty() {
            return Err(ValidationError::EmptyPortfolio);
        }
        for series in portfolio.all_series() {
            series.require_observations(MIN_OBSERVATIONS)?;
        }

        // Alphabetical ticker order; candidate vectors index into this.
        let tickers: Vec<Ticker> = portfolio.tickers().cloned().collect();
        let returns: Vec<&[f64]> = tickers
            .iter()
            .map(|ticker| {
                portfolio
                    .series(ticker)
                    .map(|series| series.returns())
                    .expect("tickers came from this portfolio")
            })
            .collect();

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut best: Option<Candidate> = None;
        let mut outcomes = vec![0.0; self.config.samples_per_round];

        for round in 0..self.config.iterations {
            let weights = draw_simplex_weights(tickers.len(), &mut rng);

            for outcome in outcomes.iter_mut() {
                // Joint bootstrap draw: one historical return per stock.
                *outcome = weights
                    .iter()
                    .zip(returns.iter())
                    .map(|(w, r)| w * r[rng.gen_range(0..r.len())])
                    .sum();
            }
            outcomes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

            let score = quantile_sorted(&outcomes, self.config.confidence);

            // Strict improvement only, so the earliest round wins ties
            // and a parallel max-reduction would pick the same winner.
            if best.as_ref().map_or(true, |current| score > current.score) {
                debug!(round, score, "new best candidate");
                best = Some(Candidate {
                    weights,
                    score,
                    round,
                });
            }
        }

        let winner = best.expect("iterations >= 1 guarantees a candidate");
        let weight_map: BTreeMap<Ticker, f64> = tickers
            .iter()
            .cloned()
            .zip(winner.weights.iter().copied())
            .collect();

        portfolio.set_weights(weight_map.clone())?;

        info!(
            iterations = self.config.iterations,
            score = winner.score,
            best_round = winner.round,
            "allocation complete"
        );

        Ok(AllocationOutcome {
            weights: weight_map,
            score: winner.score,
            best_round: winner.round,
            iterations: self.config.iterations,
            seed: self.config.seed,
        })
    }

    fn validate_config(&self) -> Result<(), ValidationError> {
        if self.config.iterations == 0 {
            return Err(ValidationError::InvalidParameter {
                name: "iterations",
                reason: String::from("must be greater than zero"),
            });
        }
        if self.config.samples_per_round == 0 {
            return Err(ValidationError::InvalidParameter {
                name: "samples_per_round",
                reason: String::from("must be greater than zero"),
            });
        }
        if !self.config.confidence.is_finite()
            || self.config.confidence <= 0.0
            || self.config.confidence > 0.5
        {
            return Err(ValidationError::InvalidParameter {
                name: "confidence",
                reason: format!(
                    "must be in (0, 0.5], got {}",
                    self.config.confidence
                ),
            });
        }

        Ok(())
    }
}

struct Candidate {
    weights: Vec<f64>,
    score: f64,
    round: usize,
}

/// Uniform draw over the k-simplex: normalized Exp(1) variates, which is
/// Dirichlet(1, .., 1).
fn draw_simplex_weights(k: usize, rng: &mut impl Rng) -> Vec<f64> {
    let raw: Vec<f64> = (0..k).map(|_| Exp1.sample(rng)).collect();
    let sum: f64 = raw.iter().sum();
    raw.iter().map(|v| v / sum).collect()
}
