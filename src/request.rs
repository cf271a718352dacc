//! JSON forecast requests
//!
//! Accepts the same camelCase shape the dashboard sends. Missing fields take
//! defaults, so `{}` is a valid (flat, zero-APY) one-year request.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::forecast::{CompoundingFrequency, ForecastInput};

/// Input configuration for a forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRequest {
    /// Principal in base asset units (default: 1.0)
    #[serde(default = "default_initial_amount")]
    pub initial_amount: f64,

    /// Horizon in days (default: 365)
    #[serde(default = "default_days")]
    pub days: i64,

    /// Annual yield as a decimal (default: 0)
    #[serde(default)]
    pub apy: f64,

    #[serde(default)]
    pub compounding_frequency: CompoundingFrequency,

    /// Chart resolution; one point per day when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_points: Option<u32>,

    /// Also produce the HODL comparison
    #[serde(default)]
    pub compare_hodl: bool,
}

fn default_initial_amount() -> f64 { 1.0 }
fn default_days() -> i64 { 365 }

impl Default for ForecastRequest {
    fn default() -> Self {
        Self {
            initial_amount: default_initial_amount(),
            days: default_days(),
            apy: 0.0,
            compounding_frequency: CompoundingFrequency::Daily,
            data_points: None,
            compare_hodl: false,
        }
    }
}

impl ForecastRequest {
    pub fn to_input(&self) -> ForecastInput {
        ForecastInput::with_frequency(
            self.initial_amount,
            self.days,
            self.apy,
            self.compounding_frequency,
        )
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }
}

/// Load a batch file: a JSON array of requests, or a single request object
pub fn load_requests(path: &Path) -> Result<Vec<ForecastRequest>> {
    let contents = fs::read_to_string(path)?;
    let requests: Vec<ForecastRequest> = if contents.trim_start().starts_with('[') {
        serde_json::from_str(&contents)?
    } else {
        vec![ForecastRequest::from_json_str(&contents)?]
    };
    log::info!("Loaded {} forecast request(s) from {}", requests.len(), path.display());
    Ok(requests)
}
