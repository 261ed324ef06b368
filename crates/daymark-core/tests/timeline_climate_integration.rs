//! Integration tests for the consumers of engine output.

use chrono::{Datelike, NaiveDate};
use daymark_core::{
    climate_for_milestone, climate_overlay, compute_milestones_on, ClimateSource, Timeline,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn timeline_from_moments_supports_detail_views() {
    let data = compute_milestones_on(ymd(1992, 4, 4), ymd(2024, 4, 4));
    let timeline = Timeline::from_moments(&data);

    assert_eq!(timeline.len(), 8);
    for (index, m) in timeline.milestones().iter().enumerate() {
        assert_eq!(timeline.detail(index).unwrap(), m);
    }
    assert!(timeline.detail(8).is_err());

    let (_, next) = timeline.next_upcoming().unwrap();
    assert_eq!(next.days, 15_000);
    assert_eq!(timeline.reached(), 4);
}

#[test]
fn climate_overlay_uses_year_from_formatted_dates() {
    let birth = ymd(1970, 1, 1);
    let data = compute_milestones_on(birth, ymd(2024, 1, 1));

    for m in data.iter() {
        let overlay = climate_for_milestone(m).unwrap();
        let year = m.calendar_date().unwrap().year();
        assert_eq!(overlay.requested_year, year);
        let expected = if year <= 2023 {
            ClimateSource::Historical
        } else {
            ClimateSource::Projected
        };
        assert_eq!(overlay.source, expected, "{}", m.date);
    }

    let at_birth = climate_overlay(birth.year());
    assert_eq!(at_birth.record.year, 1970);
}
