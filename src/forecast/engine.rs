//! Vault forecast: final balance, chart series and summary figures

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::compounding::{calculate_compound_interest, CompoundingFrequency};
use super::series::{generate_time_series, SeriesPoint};

/// Horizons used for the summary gain figures
pub const DAILY_HORIZON_DAYS: i64 = 1;
pub const MONTHLY_HORIZON_DAYS: i64 = 30;
pub const YEARLY_HORIZON_DAYS: i64 = 365;

/// Parameters for a single forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastInput {
    /// Principal in the vault's base asset unit
    pub initial_amount: f64,

    /// Horizon length in days
    pub days: i64,

    /// Annual yield as a decimal fraction (0.078 = 7.8%)
    pub apy: f64,

    #[serde(default)]
    pub compounding_frequency: CompoundingFrequency,
}

impl ForecastInput {
    /// Daily-compounded input
    pub fn new(initial_amount: f64, days: i64, apy: f64) -> Self {
        Self::with_frequency(initial_amount, days, apy, CompoundingFrequency::Daily)
    }

    pub fn with_frequency(
        initial_amount: f64,
        days: i64,
        apy: f64,
        compounding_frequency: CompoundingFrequency,
    ) -> Self {
        Self {
            initial_amount,
            days,
            apy,
            compounding_frequency,
        }
    }

    /// Whether the input can be projected. NaN principal or APY is never valid.
    pub fn is_projectable(&self) -> bool {
        self.initial_amount > 0.0 && self.days > 0 && self.apy >= 0.0
    }
}

/// Summary figures derived from a forecast
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub total_gain: f64,
    pub total_gain_percentage: f64,
    /// Gain over exactly 1 day, independent of the forecast horizon
    pub daily_gain: f64,
    /// Gain over exactly 30 days, independent of the forecast horizon
    pub monthly_gain: f64,
    /// Gain over exactly 365 days, independent of the forecast horizon
    pub yearly_gain: f64,
}

/// Complete forecast result
///
/// Invalid inputs never produce an error. They produce a degenerate result
/// (`degenerate == true`) with the principal as final balance, zero gains and
/// an empty series, which a chart renders as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    pub initial_amount: f64,
    pub final_balance: f64,
    pub total_gain: f64,
    pub time_series: Vec<SeriesPoint>,
    pub summary: ForecastSummary,
    pub degenerate: bool,
}

impl ForecastResult {
    /// Zero result returned for inputs that cannot be projected
    pub fn degenerate(initial_amount: f64) -> Self {
        Self {
            initial_amount,
            final_balance: initial_amount,
            total_gain: 0.0,
            time_series: Vec::new(),
            summary: ForecastSummary::default(),
            degenerate: true,
        }
    }

    /// True when this result is a real projection rather than the zero result
    pub fn is_projection(&self) -> bool {
        !self.degenerate
    }
}

/// Gain from compounding `principal` for exactly `days` days
fn horizon_gain(principal: f64, apy: f64, days: i64, frequency: CompoundingFrequency) -> f64 {
    calculate_compound_interest(principal, apy, days, frequency) - principal
}

/// Forecast with the default one-point-per-day chart resolution
pub fn calculate_vault_forecast(input: &ForecastInput) -> ForecastResult {
    forecast_with_resolution(input, None)
}

/// Forecast with an optional chart resolution (`data_points`)
pub(crate) fn forecast_with_resolution(
    input: &ForecastInput,
    data_points: Option<u32>,
) -> ForecastResult {
    if !input.is_projectable() {
        debug!(
            "Degenerate forecast input: amount={}, days={}, apy={}",
            input.initial_amount, input.days, input.apy
        );
        return ForecastResult::degenerate(input.initial_amount);
    }

    let ForecastInput {
        initial_amount,
        days,
        apy,
        compounding_frequency: frequency,
    } = *input;

    let final_balance = calculate_compound_interest(initial_amount, apy, days, frequency);
    let total_gain = final_balance - initial_amount;
    let time_series = generate_time_series(initial_amount, apy, days, frequency, data_points);

    let summary = ForecastSummary {
        total_gain,
        total_gain_percentage: total_gain / initial_amount * 100.0,
        daily_gain: horizon_gain(initial_amount, apy, DAILY_HORIZON_DAYS, frequency),
        monthly_gain: horizon_gain(initial_amount, apy, MONTHLY_HORIZON_DAYS, frequency),
        yearly_gain: horizon_gain(initial_amount, apy, YEARLY_HORIZON_DAYS, frequency),
    };

    trace!(
        "Forecast {} days @ {} ({}): {} -> {} ({} points)",
        days,
        apy,
        frequency,
        initial_amount,
        final_balance,
        time_series.len()
    );

    ForecastResult {
        initial_amount,
        final_balance,
        total_gain,
        time_series,
        summary,
        degenerate: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::MAX_SERIES_POINTS;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn assert_zero_result(result: &ForecastResult, initial_amount: f64) {
        assert!(result.degenerate);
        assert!(!result.is_projection());
        assert_eq!(result.final_balance, initial_amount);
        assert_eq!(result.total_gain, 0.0);
        assert!(result.time_series.is_empty());
        assert_eq!(result.summary, ForecastSummary::default());
    }

    #[test]
    fn test_reference_scenario() {
        let input = ForecastInput::new(1.0, 365, 0.078);
        let result = calculate_vault_forecast(&input);

        let expected = (1.0_f64 + 0.078 / 365.0).powi(365);
        assert!(result.is_projection());
        assert_relative_eq!(result.final_balance, expected, epsilon = 1e-12);
        assert_abs_diff_eq!(result.final_balance, 1.081114, epsilon = 1e-6);
        assert_abs_diff_eq!(result.total_gain, 0.081114, epsilon = 1e-6);
        assert_abs_diff_eq!(result.summary.total_gain_percentage, 8.1114, epsilon = 1e-4);
        assert_eq!(result.summary.total_gain, result.total_gain);
    }

    #[test]
    fn test_series_bounds_match_horizon() {
        let result = calculate_vault_forecast(&ForecastInput::new(1.0, 365, 0.078));
        let first = result.time_series.first().unwrap();
        let last = result.time_series.last().unwrap();
        assert_eq!(first.day, 0);
        assert_eq!(last.day, 365);
        assert_eq!(last.balance, result.final_balance);
        assert!(result.time_series.len() <= MAX_SERIES_POINTS);
    }

    #[test]
    fn test_zero_amount_is_degenerate() {
        let result = calculate_vault_forecast(&ForecastInput::new(0.0, 10, 0.05));
        assert_zero_result(&result, 0.0);
    }

    #[test]
    fn test_negative_amount_is_degenerate() {
        let result = calculate_vault_forecast(&ForecastInput::new(-4.0, 10, 0.05));
        assert_zero_result(&result, -4.0);
    }

    #[test]
    fn test_non_positive_days_is_degenerate() {
        assert_zero_result(&calculate_vault_forecast(&ForecastInput::new(1.0, 0, 0.05)), 1.0);
        assert_zero_result(&calculate_vault_forecast(&ForecastInput::new(1.0, -3, 0.05)), 1.0);
    }

    #[test]
    fn test_negative_or_nan_apy_is_degenerate() {
        assert_zero_result(&calculate_vault_forecast(&ForecastInput::new(1.0, 10, -0.01)), 1.0);
        assert_zero_result(&calculate_vault_forecast(&ForecastInput::new(1.0, 10, f64::NAN)), 1.0);
    }

    #[test]
    fn test_zero_apy_is_flat_projection() {
        let result = calculate_vault_forecast(&ForecastInput::new(2.0, 60, 0.0));
        assert!(result.is_projection());
        assert_eq!(result.final_balance, 2.0);
        assert!(result.time_series.iter().all(|p| p.gain == 0.0));
    }

    #[test]
    fn test_summary_horizons_ignore_forecast_days() {
        let short = calculate_vault_forecast(&ForecastInput::new(1.0, 10, 0.078));
        let long = calculate_vault_forecast(&ForecastInput::new(1.0, 5000, 0.078));

        assert_eq!(short.summary.yearly_gain, long.summary.yearly_gain);
        assert_eq!(short.summary.monthly_gain, long.summary.monthly_gain);
        assert_eq!(short.summary.daily_gain, long.summary.daily_gain);

        let expected_yearly =
            calculate_compound_interest(1.0, 0.078, 365, CompoundingFrequency::Daily) - 1.0;
        assert_eq!(short.summary.yearly_gain, expected_yearly);
    }

    #[test]
    fn test_summary_uses_input_frequency() {
        let input = ForecastInput::with_frequency(10.0, 90, 0.06, CompoundingFrequency::Monthly);
        let result = calculate_vault_forecast(&input);
        let expected_monthly =
            calculate_compound_interest(10.0, 0.06, 30, CompoundingFrequency::Monthly) - 10.0;
        assert_eq!(result.summary.monthly_gain, expected_monthly);
        assert!(result.summary.daily_gain < result.summary.monthly_gain);
        assert!(result.summary.monthly_gain < result.summary.yearly_gain);
    }

    #[test]
    fn test_input_frequency_defaults_to_daily_in_json() {
        let input: ForecastInput =
            serde_json::from_str(r#"{"initialAmount": 1.0, "days": 30, "apy": 0.05}"#).unwrap();
        assert_eq!(input.compounding_frequency, CompoundingFrequency::Daily);
    }

    #[test]
    fn test_result_serializes_for_chart_consumer() {
        let result = calculate_vault_forecast(&ForecastInput::new(1.0, 3, 0.05));
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("finalBalance").is_some());
        assert!(json["summary"].get("totalGainPercentage").is_some());
        assert_eq!(json["timeSeries"].as_array().unwrap().len(), 4);
    }
}
