//! Canonical domain models and validation.

mod date;
mod series;
mod ticker;

pub use date::ObservationDate;
pub use series::{Observation, StockSeries, MIN_OBSERVATIONS};
pub use ticker::Ticker;
