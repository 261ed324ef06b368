//! Climate overlay: static lookup tables keyed by calendar year.
//!
//! Historical values are annual means (CO₂ at Mauna Loa, global surface
//! temperature anomaly against the 1951–1980 baseline, global mean sea
//! level rise since 1900). Projections follow a middle-of-the-road
//! emissions pathway. Lookups pick the nearest tabulated year.

use serde::{Deserialize, Serialize};

use crate::format::year_from_long_date;
use crate::milestone::Milestone;

/// One row of a climate table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateRecord {
    pub year: i32,
    pub co2_ppm: f64,
    pub temperature_anomaly_c: f64,
    pub sea_level_rise_mm: f64,
}

const fn rec(
    year: i32,
    co2_ppm: f64,
    temperature_anomaly_c: f64,
    sea_level_rise_mm: f64,
) -> ClimateRecord {
    ClimateRecord {
        year,
        co2_ppm,
        temperature_anomaly_c,
        sea_level_rise_mm,
    }
}

/// Observed values, ascending by year.
pub static HISTORICAL: [ClimateRecord; 10] = [
    rec(1960, 316.9, -0.03, 100.0),
    rec(1970, 325.7, 0.03, 115.0),
    rec(1980, 338.8, 0.26, 130.0),
    rec(1990, 354.4, 0.45, 150.0),
    rec(2000, 369.7, 0.39, 175.0),
    rec(2005, 379.9, 0.67, 190.0),
    rec(2010, 389.9, 0.72, 205.0),
    rec(2015, 401.0, 0.90, 225.0),
    rec(2020, 414.2, 1.01, 240.0),
    rec(2023, 421.1, 1.17, 250.0),
];

/// Projected values, ascending by year.
pub static PROJECTIONS: [ClimateRecord; 6] = [
    rec(2030, 440.0, 1.35, 280.0),
    rec(2040, 465.0, 1.55, 310.0),
    rec(2050, 490.0, 1.75, 350.0),
    rec(2060, 510.0, 1.95, 390.0),
    rec(2075, 535.0, 2.20, 450.0),
    rec(2100, 600.0, 2.70, 560.0),
];

/// Where an overlay value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateSource {
    Historical,
    Projected,
}

/// A climate record matched to a requested year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateOverlay {
    pub requested_year: i32,
    pub source: ClimateSource,
    pub record: ClimateRecord,
}

/// Change between two overlays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateDelta {
    pub from: ClimateOverlay,
    pub to: ClimateOverlay,
    pub co2_ppm: f64,
    pub temperature_anomaly_c: f64,
    pub sea_level_rise_mm: f64,
}

/// Nearest row to `year`; ties go to the earlier row.
fn nearest(table: &[ClimateRecord], year: i32) -> &ClimateRecord {
    // Tables are non-empty constants
    table
        .iter()
        .min_by_key(|r| ((i64::from(r.year) - i64::from(year)).abs(), r.year))
        .unwrap_or(&table[0])
}

/// Nearest observed record.
pub fn climate_for_year(year: i32) -> &'static ClimateRecord {
    nearest(&HISTORICAL, year)
}

/// Nearest projected record.
pub fn future_projection(year: i32) -> &'static ClimateRecord {
    nearest(&PROJECTIONS, year)
}

/// Observed data up to the last observed year, projections after it.
pub fn climate_overlay(year: i32) -> ClimateOverlay {
    let last_observed = HISTORICAL[HISTORICAL.len() - 1].year;
    if year <= last_observed {
        ClimateOverlay {
            requested_year: year,
            source: ClimateSource::Historical,
            record: *climate_for_year(year),
        }
    } else {
        ClimateOverlay {
            requested_year: year,
            source: ClimateSource::Projected,
            record: *future_projection(year),
        }
    }
}

/// Overlay for a milestone, keyed by the year in its formatted date.
pub fn climate_for_milestone(milestone: &Milestone) -> Option<ClimateOverlay> {
    year_from_long_date(&milestone.date).map(climate_overlay)
}

/// How much the climate moved between two years.
pub fn climate_change_since(from_year: i32, to_year: i32) -> ClimateDelta {
    let from = climate_overlay(from_year);
    let to = climate_overlay(to_year);
    ClimateDelta {
        from,
        to,
        co2_ppm: to.record.co2_ppm - from.record.co2_ppm,
        temperature_anomaly_c: to.record.temperature_anomaly_c
            - from.record.temperature_anomaly_c,
        sea_level_rise_mm: to.record.sea_level_rise_mm - from.record.sea_level_rise_mm,
    }
}
