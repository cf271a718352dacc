//! Vault forecast against holding the asset with no yield (HODL)

use log::debug;
use serde::{Deserialize, Serialize};

use super::compounding::CompoundingFrequency;
use super::engine::{calculate_vault_forecast, ForecastInput, ForecastResult};
use super::series::{SeriesPoint, MAX_SERIES_POINTS};

/// Zero-yield baseline: the balance never moves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HodlForecast {
    pub initial_amount: f64,
    pub final_balance: f64,
    pub total_gain: f64,
    pub time_series: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultComparison {
    pub vault: ForecastResult,
    pub hodl: HodlForecast,
    /// Vault gain over HODL gain
    pub advantage: f64,
    /// `advantage` as a percentage of the principal
    pub advantage_percentage: f64,
}

/// Days at which the HODL series is sampled.
///
/// `min(days + 1, 365)` points at `floor(i * days / (min(days, 365) - 1))`.
/// Below 365 days the divisor is `days - 1`, so the last sample lands past
/// the horizon; charts overlay it on the vault series as-is.
///
/// The rule divides by zero at `days == 1`. That horizon is sampled at days
/// 0 and 1 instead, and non-positive horizons yield no samples.
fn hodl_sample_days(days: i64) -> Vec<i64> {
    if days <= 0 {
        return Vec::new();
    }
    if days == 1 {
        debug!("HODL series for a 1-day horizon sampled at [0, 1]");
        return vec![0, 1];
    }

    let cap = MAX_SERIES_POINTS as i64;
    let count = days.saturating_add(1).min(cap);
    let divisor = i128::from(days.min(cap) - 1);
    // i * days exceeds i64 for horizons past i64::MAX / 364
    (0..count)
        .map(|i| (i128::from(i) * i128::from(days) / divisor) as i64)
        .collect()
}

impl HodlForecast {
    pub fn new(initial_amount: f64, days: i64) -> Self {
        let time_series = hodl_sample_days(days)
            .into_iter()
            .map(|day| SeriesPoint {
                day,
                balance: initial_amount,
                gain: 0.0,
            })
            .collect();

        Self {
            initial_amount,
            final_balance: initial_amount,
            total_gain: 0.0,
            time_series,
        }
    }
}

/// Compare a daily-compounded vault position with simply holding it
pub fn compare_vault_vs_hodl(initial_amount: f64, days: i64, vault_apy: f64) -> VaultComparison {
    let input =
        ForecastInput::with_frequency(initial_amount, days, vault_apy, CompoundingFrequency::Daily);
    let vault = calculate_vault_forecast(&input);
    let hodl = HodlForecast::new(initial_amount, days);

    let advantage = vault.total_gain - hodl.total_gain;
    let advantage_percentage = if initial_amount > 0.0 {
        advantage / initial_amount * 100.0
    } else {
        0.0
    };

    VaultComparison {
        vault,
        hodl,
        advantage,
        advantage_percentage,
    }
}
