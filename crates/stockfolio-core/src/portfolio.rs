//! Portfolio of stock series plus allocation weights.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{StockSeries, Ticker};
use crate::ValidationError;

/// Tolerance on the sum-to-one weight constraint.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Named collection of [`StockSeries`] and their allocation weights.
///
/// Weights are empty until an allocator succeeds; any failure leaves
/// them exactly as they were. Weight keys are always a subset of the
/// series keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Portfolio {
    series: BTreeMap<Ticker, StockSeries>,
    weights: BTreeMap<Ticker, f64>,
}

impl Portfolio {
    pub fn new(stocks: Vec<StockSeries>) -> Result<Self, ValidationError> {
        let mut series = BTreeMap::new();
        for stock in stocks {
            let ticker = stock.ticker().clone();
            if series.insert(ticker.clone(), stock).is_some() {
                return Err(ValidationError::DuplicateTicker {
                    ticker: ticker.to_string(),
                });
            }
        }

        Ok(Self {
            series,
            weights: BTreeMap::new(),
        })
    }

    pub fn from_map(series: BTreeMap<Ticker, StockSeries>) -> Self {
        Self {
            series,
            weights: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Tickers in deterministic (alphabetical) order.
    pub fn tickers(&self) -> impl Iterator<Item = &Ticker> {
        self.series.keys()
    }

    pub fn series(&self, ticker: &Ticker) -> Option<&StockSeries> {
        self.series.get(ticker)
    }

    pub fn all_series(&self) -> impl Iterator<Item = &StockSeries> {
        self.series.values()
    }

    pub fn weights(&self) -> &BTreeMap<Ticker, f64> {
        &self.weights
    }

    pub fn weight(&self, ticker: &Ticker) -> Option<f64> {
        self.weights.get(ticker).copied()
    }

    pub fn is_allocated(&self) -> bool {
        !self.weights.is_empty()
    }

    /// Replace the allocation in one step after validating the full map.
    ///
    /// Every series must receive a weight in [0, 1] and the weights must
    /// sum to 1 within [`WEIGHT_SUM_TOLERANCE`]. The previous allocation
    /// survives any rejection.
    pub fn set_weights(&mut self, weights: BTreeMap<Ticker, f64>) -> Result<(), ValidationError> {
        for (ticker, &weight) in &weights {
            if !self.series.contains_key(ticker) {
                return Err(ValidationError::UnknownWeightTicker {
                    ticker: ticker.to_string(),
                });
            }
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(ValidationError::WeightOutOfRange {
                    ticker: ticker.to_string(),
                    value: weight,
                });
            }
        }

        if weights.len() != self.series.len() {
            let missing = self
                .series
                .keys()
                .find(|ticker| !weights.contains_key(ticker))
                .map(|ticker| ticker.to_string())
                .unwrap_or_default();
            return Err(ValidationError::InvalidParameter {
                name: "weights",
                reason: format!("no weight assigned to '{missing}'"),
            });
        }

        let sum: f64 = weights.values().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::WeightSumMismatch { sum });
        }

        self.weights = weights;
        Ok(())
    }
}
