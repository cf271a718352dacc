//! Chartable balance series for a forecast

use log::debug;
use serde::{Deserialize, Serialize};

use super::compounding::{calculate_compound_interest, CompoundingFrequency};

/// Upper bound on points in any generated series (chart rendering guard)
pub const MAX_SERIES_POINTS: usize = 365;

/// Balance and gain on a given day of the horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub day: i64,
    pub balance: f64,
    pub gain: f64,
}

impl SeriesPoint {
    /// Point whose gain is measured against `initial_amount`
    pub fn new(day: i64, balance: f64, initial_amount: f64) -> Self {
        Self {
            day,
            balance,
            gain: balance - initial_amount,
        }
    }
}

/// Day step between consecutive points.
///
/// Starts from one point per day, or `days / data_points` when a resolution
/// is requested, then widens to at least `ceil(days / 363)` once the horizon
/// reaches 365 days, so the series fits in [`MAX_SERIES_POINTS`] including
/// day 0 and the appended final day. A horizon of exactly 365 days is
/// therefore sampled every other day (184 points).
fn series_step(days: i64, data_points: Option<u32>) -> i64 {
    let requested = match data_points {
        Some(n) if n > 0 => (days / i64::from(n)).max(1),
        _ => 1,
    };

    let max_points = MAX_SERIES_POINTS as i64;
    if days < max_points {
        return requested;
    }

    // Leave room for day 0 and the appended final day
    let span = max_points - 2;
    // ceil(days / span) without overflowing near i64::MAX
    let min_step = (days - 1) / span + 1;
    if min_step > requested {
        debug!(
            "Downsampling {} day series: step {} -> {}",
            days, requested, min_step
        );
    }
    requested.max(min_step)
}

/// Generate the balance series for a forecast horizon.
///
/// Points run from day 0 in steps (see [`MAX_SERIES_POINTS`]) and always end
/// exactly on `days`. A negative horizon produces an empty series.
pub fn generate_time_series(
    initial_amount: f64,
    apy: f64,
    days: i64,
    frequency: CompoundingFrequency,
    data_points: Option<u32>,
) -> Vec<SeriesPoint> {
    if days < 0 {
        return Vec::new();
    }

    let step = series_step(days, data_points);
    let mut series: Vec<SeriesPoint> = (0..=days)
        .step_by(step as usize)
        .map(|day| {
            let balance = calculate_compound_interest(initial_amount, apy, day, frequency);
            SeriesPoint::new(day, balance, initial_amount)
        })
        .collect();

    if series.last().map(|p| p.day) != Some(days) {
        let balance = calculate_compound_interest(initial_amount, apy, days, frequency);
        series.push(SeriesPoint::new(days, balance, initial_amount));
    }

    series
}
