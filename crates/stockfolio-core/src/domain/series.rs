use serde::{Deserialize, Serialize};

use crate::domain::{ObservationDate, Ticker};
use crate::ValidationError;

/// Minimum observations required before returns and statistics exist.
pub const MIN_OBSERVATIONS: usize = 2;

/// A single dated price point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: ObservationDate,
    pub price: f64,
}

impl Observation {
    pub fn new(date: ObservationDate, price: f64) -> Result<Self, ValidationError> {
        if !price.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "price" });
        }
        if price <= 0.0 {
            return Err(ValidationError::NonPositiveValue { field: "price" });
        }

        Ok(Self { date, price })
    }
}

/// One stock's historical observations plus derived periodic returns.
///
/// Immutable after construction. Dates are strictly increasing and
/// `returns().len() == observations().len() - 1` always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockSeries {
    ticker: Ticker,
    observations: Vec<Observation>,
    returns: Vec<f64>,
}

impl StockSeries {
    pub fn new(ticker: Ticker, observations: Vec<Observation>) -> Result<Self, ValidationError> {
        for pair in observations.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(ValidationError::DatesNotIncreasing {
                    ticker: ticker.to_string(),
                });
            }
        }

        let returns = observations
            .windows(2)
            .map(|pair| pair[1].price / pair[0].price - 1.0)
            .collect();

        Ok(Self {
            ticker,
            observations,
            returns,
        })
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Relative price changes between consecutive observations.
    pub fn returns(&self) -> &[f64] {
        &self.returns
    }

    /// Price column as a plain array for plotting collaborators.
    pub fn prices(&self) -> Vec<f64> {
        self.observations.iter().map(|obs| obs.price).collect()
    }

    pub fn first_date(&self) -> Option<ObservationDate> {
        self.observations.first().map(|obs| obs.date)
    }

    pub fn last_date(&self) -> Option<ObservationDate> {
        self.observations.last().map(|obs| obs.date)
    }

    /// Fails unless the series carries enough observations for statistics.
    pub fn require_observations(&self, required: usize) -> Result<(), ValidationError> {
        if self.observations.len() < required {
            return Err(ValidationError::InsufficientData {
                ticker: self.ticker.to_string(),
                observations: self.observations.len(),
                required,
            });
        }

        Ok(())
    }
}
