//! Scenario runner for batches of forecasts
//!
//! Holds the settings shared across a batch (compounding frequency and chart
//! resolution) and runs many forecasts against them.

use rayon::prelude::*;

use crate::forecast::{
    compare_vault_vs_hodl, forecast_with_resolution, CompoundingFrequency, ForecastInput,
    ForecastResult, VaultComparison,
};
use crate::request::ForecastRequest;

/// Batch forecast runner
///
/// # Example
/// ```
/// use vault_forecast::ScenarioRunner;
///
/// let runner = ScenarioRunner::new();
/// let results = runner.apy_sweep(1.0, 365, &[0.03, 0.05, 0.078]);
/// assert!(results[2].final_balance > results[0].final_balance);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    /// Frequency for sweeps built from bare numbers
    frequency: CompoundingFrequency,

    /// Chart resolution applied to every run
    data_points: Option<u32>,
}

impl ScenarioRunner {
    /// Daily compounding, one chart point per day
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frequency(mut self, frequency: CompoundingFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_data_points(mut self, data_points: Option<u32>) -> Self {
        self.data_points = data_points;
        self
    }

    pub fn frequency(&self) -> CompoundingFrequency {
        self.frequency
    }

    /// Run a single forecast
    pub fn run(&self, input: &ForecastInput) -> ForecastResult {
        forecast_with_resolution(input, self.data_points)
    }

    /// Run a request, honouring its own chart resolution when set
    pub fn run_request(&self, request: &ForecastRequest) -> ForecastResult {
        forecast_with_resolution(&request.to_input(), request.data_points.or(self.data_points))
    }

    /// Run many forecasts in parallel. Output order matches input order.
    pub fn run_batch(&self, inputs: &[ForecastInput]) -> Vec<ForecastResult> {
        inputs.par_iter().map(|input| self.run(input)).collect()
    }

    /// Run many requests in parallel. Output order matches input order.
    pub fn run_requests(&self, requests: &[ForecastRequest]) -> Vec<ForecastResult> {
        requests.par_iter().map(|r| self.run_request(r)).collect()
    }

    /// One forecast per APY, same principal and horizon
    pub fn apy_sweep(&self, initial_amount: f64, days: i64, apys: &[f64]) -> Vec<ForecastResult> {
        let inputs: Vec<ForecastInput> = apys
            .iter()
            .map(|&apy| ForecastInput::with_frequency(initial_amount, days, apy, self.frequency))
            .collect();
        self.run_batch(&inputs)
    }

    /// One forecast per compounding frequency, in [`CompoundingFrequency::ALL`] order
    pub fn frequency_comparison(
        &self,
        initial_amount: f64,
        days: i64,
        apy: f64,
    ) -> Vec<(CompoundingFrequency, ForecastResult)> {
        CompoundingFrequency::ALL
            .iter()
            .map(|&frequency| {
                let input = ForecastInput::with_frequency(initial_amount, days, apy, frequency);
                (frequency, self.run(&input))
            })
            .collect()
    }

    /// Vault against HODL (always daily compounding)
    pub fn compare(&self, initial_amount: f64, days: i64, apy: f64) -> VaultComparison {
        compare_vault_vs_hodl(initial_amount, days, apy)
    }
}
