//! Discrete compounding primitive
//!
//! Uses a fixed 365-day year. No leap-year or calendar adjustment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ForecastError;

/// Days in a forecast year
pub const DAYS_PER_YEAR: f64 = 365.0;

/// How often accrued yield is added back to principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl CompoundingFrequency {
    /// All variants, in ascending period length
    pub const ALL: [CompoundingFrequency; 4] = [
        CompoundingFrequency::Daily,
        CompoundingFrequency::Weekly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Yearly,
    ];

    /// Compounding periods in one 365-day year
    pub fn periods_per_year(self) -> f64 {
        match self {
            CompoundingFrequency::Daily => 365.0,
            CompoundingFrequency::Weekly => 52.0,
            CompoundingFrequency::Monthly => 12.0,
            CompoundingFrequency::Yearly => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompoundingFrequency::Daily => "daily",
            CompoundingFrequency::Weekly => "weekly",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompoundingFrequency {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(CompoundingFrequency::Daily),
            "weekly" => Ok(CompoundingFrequency::Weekly),
            "monthly" => Ok(CompoundingFrequency::Monthly),
            "yearly" => Ok(CompoundingFrequency::Yearly),
            other => Err(ForecastError::InvalidFrequency(other.to_string())),
        }
    }
}

/// Balance after compounding `principal` at `apy` for `days` days.
///
/// `principal * (1 + apy/n)^(n * days/365)` where `n` is the number of
/// periods per year for `frequency`.
///
/// Inputs are not validated here; callers normalise them first
/// (see [`calculate_vault_forecast`](super::calculate_vault_forecast)).
pub fn calculate_compound_interest(
    principal: f64,
    apy: f64,
    days: i64,
    frequency: CompoundingFrequency,
) -> f64 {
    let years = days as f64 / DAYS_PER_YEAR;
    let n = frequency.periods_per_year();
    principal * (1.0 + apy / n).powf(n * years)
}

/// Realised one-year yield for a nominal `apy` compounded at `frequency`
pub fn effective_annual_rate(apy: f64, frequency: CompoundingFrequency) -> f64 {
    let n = frequency.periods_per_year();
    (1.0 + apy / n).powf(n) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_zero_days_returns_principal() {
        for freq in CompoundingFrequency::ALL {
            assert_eq!(calculate_compound_interest(2.5, 0.078, 0, freq), 2.5);
        }
    }

    #[test]
    fn test_zero_apy_returns_principal() {
        for freq in CompoundingFrequency::ALL {
            for days in [0, 1, 30, 365, 5000] {
                assert_eq!(calculate_compound_interest(3.0, 0.0, days, freq), 3.0);
            }
        }
    }

    #[test]
    fn test_monotonic_in_days() {
        for freq in CompoundingFrequency::ALL {
            let mut prev = calculate_compound_interest(1.0, 0.05, 0, freq);
            for days in [1, 7, 30, 90, 365, 1000] {
                let next = calculate_compound_interest(1.0, 0.05, days, freq);
                assert!(next > prev, "{freq}: {next} <= {prev} at day {days}");
                prev = next;
            }
        }
    }

    #[test]
    fn test_daily_compounding_one_year() {
        let balance = calculate_compound_interest(1.0, 0.078, 365, CompoundingFrequency::Daily);
        let expected = (1.0_f64 + 0.078 / 365.0).powi(365);
        assert_relative_eq!(balance, expected, epsilon = 1e-12);
        assert_abs_diff_eq!(balance, 1.081114, epsilon = 1e-6);
    }

    #[test]
    fn test_yearly_compounding_is_simple_over_one_year() {
        let balance = calculate_compound_interest(100.0, 0.05, 365, CompoundingFrequency::Yearly);
        assert_relative_eq!(balance, 105.0, epsilon = 1e-9);
    }

    #[test]
    fn test_more_frequent_compounding_yields_more() {
        let rates: Vec<f64> = CompoundingFrequency::ALL
            .iter()
            .map(|&f| calculate_compound_interest(1.0, 0.10, 365, f))
            .collect();
        assert!(rates.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_effective_annual_rate() {
        assert_relative_eq!(
            effective_annual_rate(0.12, CompoundingFrequency::Monthly),
            1.01_f64.powi(12) - 1.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            effective_annual_rate(0.05, CompoundingFrequency::Yearly),
            0.05,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_frequency_parsing() {
        assert_eq!("Weekly".parse::<CompoundingFrequency>().unwrap(), CompoundingFrequency::Weekly);
        assert_eq!(" monthly ".parse::<CompoundingFrequency>().unwrap(), CompoundingFrequency::Monthly);
        assert!("hourly".parse::<CompoundingFrequency>().is_err());
        assert_eq!(CompoundingFrequency::default(), CompoundingFrequency::Daily);
    }

    #[test]
    fn test_frequency_serde_lowercase() {
        let json = serde_json::to_string(&CompoundingFrequency::Yearly).unwrap();
        assert_eq!(json, "\"yearly\"");
        let parsed: CompoundingFrequency = serde_json::from_str("\"daily\"").unwrap();
        assert_eq!(parsed, CompoundingFrequency::Daily);
    }
}
