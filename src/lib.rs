//! Vault Forecast - compound-yield projections for BTC-denominated yield vaults
//!
//! This library provides:
//! - Discrete compounding at daily, weekly, monthly or yearly frequency
//! - Chartable balance series capped for rendering
//! - Forecast summaries (total, daily, monthly and yearly gains)
//! - Vault vs HODL comparison
//! - Batch scenario runs and CSV/JSON export
//!
//! Forecasts never fail: inputs that cannot be projected produce a
//! degenerate zero result flagged by `ForecastResult::degenerate`.

pub mod error;
pub mod forecast;
pub mod request;
pub mod scenario;
pub mod export;

// Re-export commonly used types
pub use error::{ForecastError, Result};
pub use forecast::{
    calculate_compound_interest, calculate_vault_forecast, compare_vault_vs_hodl,
    generate_time_series, CompoundingFrequency, ForecastInput, ForecastResult, ForecastSummary,
    HodlForecast, SeriesPoint, VaultComparison,
};
pub use request::ForecastRequest;
pub use scenario::ScenarioRunner;
