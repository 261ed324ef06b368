//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with a throwaway config directory.

mod common;

use common::{assert_contains, parse_json, run_cli_failure, run_cli_success};

#[test]
fn test_milestones_json() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        dir.path(),
        &["milestones", "1990-06-15", "--today", "1993-03-11", "--json"],
    );
    let json = parse_json(&out);
    assert_eq!(json["currentDays"], 1000);
    assert_eq!(json["echoesOfTime"].as_array().unwrap().len(), 40);
    assert_eq!(json["rhythmsOfUniverse"].as_array().unwrap().len(), 9);
    assert_eq!(json["momentsOfSignificance"].as_array().unwrap().len(), 8);
    assert_eq!(json["echoesOfTime"][0]["isPast"], true);
    assert!(json["echoesOfTime"][0].get("daysUntil").is_none());
}

#[test]
fn test_milestones_category_upcoming() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        dir.path(),
        &[
            "milestones",
            "2000-01-01",
            "--today",
            "2010-01-01",
            "--category",
            "rhythms",
            "--upcoming",
            "--json",
        ],
    );
    let list = parse_json(&out);
    let list = list.as_array().unwrap();
    assert!(list.iter().all(|m| m["isPast"] == false));
    assert_eq!(list.last().unwrap()["days"], 9999);
}

#[test]
fn test_milestones_text() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(dir.path(), &["milestones", "2000-01-01", "--today", "2000-01-01"]);
    assert_contains(&out, "Day 0 of your life");
    assert_contains(&out, "Echoes of Time");
    assert_contains(&out, "Cute Little Kid");
    assert_contains(&out, "in 1000 days");
    assert_contains(&out, "Next up: echo-1 on September 27, 2002");
}

#[test]
fn test_milestones_rejects_future_birth_date() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) =
        run_cli_failure(dir.path(), &["milestones", "2030-01-02", "--today", "2030-01-01"]);
    assert_eq!(code, 1);
    assert_contains(&stderr, "in the future");
}

#[test]
fn test_milestones_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, _) = run_cli_failure(dir.path(), &["milestones", "not-a-date"]);
    assert_contains(&stderr, "Invalid date");
}

#[test]
fn test_milestones_rejects_year_zero() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli_failure(dir.path(), &["milestones", "0000-06-01"]);
    assert_eq!(code, 1);
    assert_contains(&stderr, "Invalid value for 'birth_date'");
}

#[test]
fn test_special_detects_easter_egg() {
    let dir = tempfile::tempdir().unwrap();
    // 2024-08-08 minus 12345 days
    let out = run_cli_success(
        dir.path(),
        &["special", "1990-10-21", "--today", "2024-08-08", "--json"],
    );
    let json = parse_json(&out);
    assert_eq!(json["currentDays"], 12345);
    assert_eq!(json["hasSpecialMilestone"], true);
    assert!(json.get("celebration").is_some());
}

#[test]
fn test_special_ordinary_day() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(dir.path(), &["special", "1990-10-22", "--today", "2024-08-08"]);
    assert_contains(&out, "Day 12344 is not a special day count.");
}

#[test]
fn test_timeline_detail_with_climate() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        dir.path(),
        &["timeline", "1990-06-15", "--today", "2024-01-01", "--detail", "1", "--json"],
    );
    let json = parse_json(&out);
    assert_eq!(json["milestone"]["days"], 2000);
    assert_eq!(json["milestone"]["description"], "Cute Little Kid");
    assert_eq!(json["climate"]["source"], "historical");
}

#[test]
fn test_timeline_detail_out_of_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, _) = run_cli_failure(
        dir.path(),
        &["timeline", "1990-06-15", "--today", "2024-01-01", "--detail", "8"],
    );
    assert_contains(&stderr, "out of bounds");
}

#[test]
fn test_timeline_with_rhythms() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        dir.path(),
        &["timeline", "1990-06-15", "--today", "2024-01-01", "--with-rhythms", "--json"],
    );
    let entries = parse_json(&out);
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 17);
    let days: Vec<u64> = entries
        .iter()
        .map(|e| e["milestone"]["days"].as_u64().unwrap())
        .collect();
    assert!(days.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_climate_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(dir.path(), &["climate", "2061", "--json"]);
    let json = parse_json(&out);
    assert_eq!(json["source"], "projected");
    assert_eq!(json["record"]["year"], 2060);
}

#[test]
fn test_climate_since() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(dir.path(), &["climate", "2020", "--since", "1990"]);
    assert_contains(&out, "1990 -> 2020");
}

#[test]
fn test_config_get_set_reset() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(dir.path(), &["config", "get", "timeline.variant_count"]);
    assert_eq!(out.trim(), "4");

    run_cli_success(dir.path(), &["config", "set", "timeline.variant_count", "6"]);
    let out = run_cli_success(dir.path(), &["config", "get", "timeline.variant_count"]);
    assert_eq!(out.trim(), "6");

    run_cli_success(dir.path(), &["config", "reset"]);
    let out = run_cli_success(dir.path(), &["config", "list"]);
    assert_contains(&out, "timeline.variant_count = 4");
}

#[test]
fn test_config_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, _) = run_cli_failure(dir.path(), &["config", "get", "display.nope"]);
    assert_contains(&stderr, "unknown key");
}

#[test]
fn test_json_by_default_config() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["config", "set", "display.json_by_default", "true"]);
    let out = run_cli_success(dir.path(), &["climate", "1990"]);
    let json = parse_json(&out);
    assert_eq!(json["record"]["co2_ppm"], 354.4);
}
