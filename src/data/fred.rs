//! FRED API integration for constant-maturity Treasury yield series.
//!
//! Each DGS series carries one tenor of the curve. A snapshot is the latest
//! date on which *all* series have an observation; mixing dates would stitch
//! together curves from different market sessions.

use std::collections::{HashMap, HashSet};

use chrono::{Duration, NaiveDate};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::{Observation, ObservationSet};
use crate::error::CurveError;
use crate::time::DAYS_PER_YEAR;

const BASE_URL: &str = "https://api.stlouisfed.org/fred/series/observations";
const OBS_LIMIT: usize = 30;

/// (series_id, tenor in years). FRED quotes these in percent.
const SERIES: [(&str, f64); 10] = [
    ("DGS3MO", 0.25),
    ("DGS6MO", 0.5),
    ("DGS1", 1.0),
    ("DGS2", 2.0),
    ("DGS3", 3.0),
    ("DGS5", 5.0),
    ("DGS7", 7.0),
    ("DGS10", 10.0),
    ("DGS20", 20.0),
    ("DGS30", 30.0),
];

pub struct FredClient {
    client: Client,
    api_key: String,
}

impl FredClient {
    pub fn from_env() -> Result<Self, CurveError> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("FRED_API_KEY")
            .map_err(|_| CurveError::invalid_input("Missing FRED_API_KEY in environment (.env)."))?;
        Ok(Self {
            client: Client::new(),
            api_key,
        })
    }

    /// Fetch the latest complete term-structure snapshot.
    pub fn fetch_snapshot(&self) -> Result<ObservationSet, CurveError> {
        let mut maps: HashMap<&str, HashMap<NaiveDate, f64>> = HashMap::new();

        for (series_id, _) in SERIES {
            let obs = self.fetch_series(series_id)?;
            if obs.is_empty() {
                return Err(CurveError::source(format!(
                    "No observations returned for series {series_id}."
                )));
            }
            maps.insert(series_id, obs.into_iter().collect());
        }

        let asof = latest_common_date(&maps)
            .ok_or_else(|| CurveError::source("No common observation date across series."))?;

        let mut observations = Vec::with_capacity(SERIES.len());
        for (series_id, tenor_years) in SERIES {
            let value = *maps
                .get(series_id)
                .and_then(|m| m.get(&asof))
                .ok_or_else(|| {
                    CurveError::source(format!("Missing {series_id} value for {asof}."))
                })?;
            observations.push(Observation {
                maturity: maturity_from_tenor(asof, tenor_years),
                value,
            });
        }

        Ok(ObservationSet { asof, observations })
    }

    fn fetch_series(&self, series_id: &str) -> Result<Vec<(NaiveDate, f64)>, CurveError> {
        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("series_id", series_id),
                ("api_key", &self.api_key),
                ("file_type", "json"),
                ("sort_order", "desc"),
                ("limit", &OBS_LIMIT.to_string()),
            ])
            .send()
            .map_err(|e| CurveError::source(format!("FRED request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(CurveError::source(format!(
                "FRED request failed with status {}.",
                resp.status()
            )));
        }

        let body: ObservationsResponse = resp
            .json()
            .map_err(|e| CurveError::source(format!("Failed to parse FRED response: {e}")))?;

        let mut out = Vec::new();
        for obs in body.observations {
            let value = match parse_value(&obs.value) {
                Some(v) => v,
                None => continue,
            };
            let date = NaiveDate::parse_from_str(&obs.date, "%Y-%m-%d")
                .map_err(|e| CurveError::source(format!("Invalid FRED date '{}': {e}", obs.date)))?;
            // DGS series are in percent; convert to decimal rates.
            out.push((date, value / 100.0));
        }

        Ok(out)
    }
}

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    observations: Vec<RawObservation>,
}

#[derive(Debug, Deserialize)]
struct RawObservation {
    date: String,
    value: String,
}

/// FRED reports missing values as ".".
fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed == "." || trimmed.is_empty() {
        return None;
    }
    let v = trimmed.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

fn latest_common_date(maps: &HashMap<&str, HashMap<NaiveDate, f64>>) -> Option<NaiveDate> {
    let mut common: Option<HashSet<NaiveDate>> = None;
    for map in maps.values() {
        let dates: HashSet<NaiveDate> = map.keys().cloned().collect();
        common = Some(match common {
            None => dates,
            Some(mut set) => {
                set.retain(|d| dates.contains(d));
                set
            }
        });
    }
    common.and_then(|set| set.into_iter().max())
}

/// Synthesize the maturity date a tenor refers to, at the same 365.25-day
/// convention the normalizer uses.
fn maturity_from_tenor(asof: NaiveDate, tenor_years: f64) -> NaiveDate {
    asof.checked_add_signed(Duration::days((tenor_years * DAYS_PER_YEAR).round() as i64))
        .unwrap_or(asof)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_filters_missing_markers() {
        assert_eq!(parse_value("4.25"), Some(4.25));
        assert_eq!(parse_value(" 4.25 "), Some(4.25));
        assert_eq!(parse_value("."), None);
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("nan"), None);
    }

    #[test]
    fn latest_common_date_intersects_series() {
        let d1 = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        let d3 = NaiveDate::from_ymd_opt(2025, 6, 4).unwrap();

        let mut maps: HashMap<&str, HashMap<NaiveDate, f64>> = HashMap::new();
        maps.insert("A", [(d1, 1.0), (d2, 1.1), (d3, 1.2)].into_iter().collect());
        maps.insert("B", [(d1, 2.0), (d2, 2.1)].into_iter().collect());

        // d3 is missing from B, so the latest common date is d2.
        assert_eq!(latest_common_date(&maps), Some(d2));
    }

    #[test]
    fn maturity_round_trips_through_year_fractions() {
        let asof = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        for (_, tenor) in SERIES {
            let maturity = maturity_from_tenor(asof, tenor);
            let days = (maturity - asof).num_days() as f64;
            let recovered = days / DAYS_PER_YEAR;
            assert!(
                (recovered - tenor).abs() < 0.5 / DAYS_PER_YEAR * 2.0,
                "tenor {tenor}: recovered {recovered}"
            );
        }
    }
}
