//! Core library for stockfolio.
//!
//! This crate contains:
//! - Canonical domain models and validation (tickers, dated price series)
//! - Descriptive statistics and bootstrap resampling
//! - The confidence-based Monte Carlo allocator
//! - CSV import, report rendering, and the response envelope

pub mod allocator;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod import;
pub mod portfolio;
pub mod report;
pub mod stats;

pub use allocator::{AllocationOutcome, AllocatorConfig, ConfidenceAllocator};
pub use domain::{Observation, ObservationDate, StockSeries, Ticker, MIN_OBSERVATIONS};
pub use envelope::{Envelope, EnvelopeMeta};
pub use error::{CoreError, ValidationError};
pub use import::{import_csv, read_series};
pub use portfolio::{Portfolio, WEIGHT_SUM_TOLERANCE};
pub use report::render_report;
pub use stats::{bootstrap_resample, compute_stats, histogram, Histogram, Quantiles, SeriesStats};
