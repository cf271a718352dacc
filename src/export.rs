//! CSV and JSON output for forecast results

use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::io::Write;

use crate::error::{ForecastError, Result};
use crate::forecast::SeriesPoint;

/// Parse a `YYYY-MM-DD` start date for calendar-labelled exports
pub fn parse_start_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| ForecastError::InvalidDate(s.to_string(), e))
}

/// Calendar date of a series day counted from `start`
fn date_for_day(start: NaiveDate, day: i64) -> Option<NaiveDate> {
    let offset = Days::new(day.unsigned_abs());
    if day >= 0 {
        start.checked_add_days(offset)
    } else {
        start.checked_sub_days(offset)
    }
}

/// Write a series as CSV.
///
/// Columns are `day,balance,gain`, with a `date` column after `day` when a
/// start date is supplied.
pub fn write_series_csv<W: Write>(
    writer: W,
    series: &[SeriesPoint],
    start_date: Option<NaiveDate>,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    match start_date {
        Some(start) => {
            wtr.write_record(["day", "date", "balance", "gain"])?;
            for point in series {
                let date = date_for_day(start, point.day)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default();
                wtr.write_record([
                    point.day.to_string(),
                    date,
                    format!("{:.10}", point.balance),
                    format!("{:.10}", point.gain),
                ])?;
            }
        }
        None => {
            wtr.write_record(["day", "balance", "gain"])?;
            for point in series {
                wtr.write_record([
                    point.day.to_string(),
                    format!("{:.10}", point.balance),
                    format!("{:.10}", point.gain),
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Pretty-printed JSON
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
