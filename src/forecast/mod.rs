//! Compound-yield forecasting for vault positions

mod compounding;
mod series;
mod engine;
mod comparison;

pub use compounding::{
    calculate_compound_interest, effective_annual_rate, CompoundingFrequency, DAYS_PER_YEAR,
};
pub use series::{generate_time_series, SeriesPoint, MAX_SERIES_POINTS};
pub use engine::{
    calculate_vault_forecast, ForecastInput, ForecastResult, ForecastSummary,
    DAILY_HORIZON_DAYS, MONTHLY_HORIZON_DAYS, YEARLY_HORIZON_DAYS,
};
pub(crate) use engine::forecast_with_resolution;
pub use comparison::{compare_vault_vs_hodl, HodlForecast, VaultComparison};
