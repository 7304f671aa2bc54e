//! Behavioural tests for the projector's public contract.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use version_events::arithmetic::{add_days, days_between, parse_date};
use version_events::offsets::{is_skipped, offset_for, pinned_date, SKIPPED_VERSIONS};
use version_events::{
    generate_version_events, project, version_launches, EventItem, ProjectionConfig,
    SkippedCycle, Version, EVENT_OFFSETS, INITIAL_START_DATE, INITIAL_START_VERSION,
};

fn date(s: &str) -> NaiveDate {
    parse_date(s).unwrap()
}

fn launch_of(events: &[EventItem], version: &str) -> NaiveDate {
    events
        .iter()
        .find(|e| e.event == format!("{} 版本开启", version))
        .unwrap_or_else(|| panic!("no launch event for {}", version))
        .date
}

// ─────────────────────────────────────────────────────────────
// Single-version projections
// ─────────────────────────────────────────────────────────────

#[test]
fn zero_versions_yields_exactly_one_table() {
    for (v, d) in [("1.0", "2023-04-26"), ("2.3", "2024-06-19"), ("3.8", "2025-12-17")] {
        let events = generate_version_events(v, d, 0).unwrap();
        assert_eq!(events.len(), EVENT_OFFSETS.len());
        for e in &events {
            assert_eq!(e.version.to_string(), v);
            let offset = offset_for(e.event_name()).unwrap();
            assert_eq!(e.date, add_days(date(d), offset).unwrap(), "{}", e.event);
        }
    }
}

#[test]
fn initial_launch_example() {
    let events =
        generate_version_events(INITIAL_START_VERSION, INITIAL_START_DATE, 1).unwrap();

    let want = |d: &str, label: &str, v: &str| EventItem {
        date: date(d),
        event: label.to_string(),
        version: v.parse().unwrap(),
    };
    assert!(events.contains(&want("2023-04-26", "1.0 版本开启", "1.0")));
    assert!(events.contains(&want("2023-05-17", "1.0 下半开启", "1.0")));
    assert_eq!(launch_of(&events, "1.1"), date("2023-06-07"));
    assert_eq!(events.iter().filter(|e| e.version.to_string() == "1.1").count(), 10);
}

// ─────────────────────────────────────────────────────────────
// Multi-version invariants
// ─────────────────────────────────────────────────────────────

#[test]
fn events_sit_at_launch_plus_offset() {
    let config = ProjectionConfig::initial_launch(30).unwrap();
    let launches: BTreeMap<Version, NaiveDate> = version_launches(&config)
        .unwrap()
        .into_iter()
        .filter(|l| !l.skipped)
        .map(|l| (l.version, l.launch_date))
        .collect();

    let events = project(&config).unwrap();
    for e in &events {
        if pinned_date(e.version, e.event_name()).is_some() {
            continue;
        }
        let offset = offset_for(e.event_name()).unwrap();
        assert_eq!(e.date, add_days(launches[&e.version], offset).unwrap(), "{}", e.event);
    }
}

#[test]
fn output_is_sorted() {
    let events = generate_version_events("1.0", "2023-04-26", 40).unwrap();
    assert!(events.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn version_numbering_rolls_over_after_eight() {
    let config = ProjectionConfig::new("1.0", "2023-04-26", 30).unwrap();
    let launches = version_launches(&config).unwrap();
    for pair in launches.windows(2) {
        let (a, b) = (pair[0].version, pair[1].version);
        assert!(b.minor <= 8);
        if a.minor == 8 {
            assert_eq!((b.major, b.minor), (a.major + 1, 0));
        } else {
            assert_eq!((b.major, b.minor), (a.major, a.minor + 1));
        }
    }
    assert_eq!(launches.len(), 31);
}

#[test]
fn skipped_versions_never_emit() {
    let events = generate_version_events("1.0", "2023-04-26", 30).unwrap();
    for skipped in SKIPPED_VERSIONS {
        assert!(events.iter().all(|e| e.version != *skipped), "{} emitted", skipped);
    }
    assert!(events.iter().all(|e| !is_skipped(e.version)));
}

#[test]
fn one_skipped_version_costs_one_cycle() {
    let events = generate_version_events("2.6", "2024-10-02", 3).unwrap();
    assert_eq!(days_between(launch_of(&events, "2.7"), launch_of(&events, "3.0")), 84);
}

#[test]
fn two_skipped_versions_cost_two_cycles() {
    let events = generate_version_events("1.6", "2024-01-03", 3).unwrap();
    assert_eq!(days_between(launch_of(&events, "1.6"), launch_of(&events, "2.0")), 126);
}

#[test]
fn collapse_policy_keeps_released_cadence() {
    let config = ProjectionConfig::initial_launch(25)
        .unwrap()
        .with_skipped_cycle(SkippedCycle::Collapse);
    let events = project(&config).unwrap();
    assert_eq!(launch_of(&events, "2.0"), date("2024-02-14"));
    assert_eq!(launch_of(&events, "3.7"), date("2025-11-05"));
}

// ─────────────────────────────────────────────────────────────
// Historical exception
// ─────────────────────────────────────────────────────────────

#[test]
fn predownload_for_3_7_is_pinned() {
    let events = generate_version_events("3.3", "2025-05-21", 4).unwrap();
    let expected = EventItem {
        date: date("2025-11-04"),
        event: "3.7 预下载".to_string(),
        version: "3.7".parse().unwrap(),
    };
    assert!(events.contains(&expected));
}

#[test]
fn predownload_for_3_7_is_pinned_whatever_the_anchor() {
    let events = generate_version_events("1.0", "2023-04-26", 25).unwrap();
    let pre = events.iter().find(|e| e.event == "3.7 预下载").unwrap();
    assert_eq!(pre.date, date("2025-11-04"));
    assert_eq!(launch_of(&events, "3.7"), date("2026-03-11"));
}

// ─────────────────────────────────────────────────────────────
// Inputs
// ─────────────────────────────────────────────────────────────

#[test]
fn negative_horizon_projects_start_only() {
    let events = generate_version_events("1.0", "2023-04-26", i64::MIN).unwrap();
    assert_eq!(events.len(), EVENT_OFFSETS.len());
}

#[test]
fn malformed_inputs_fail_with_no_output() {
    assert!(generate_version_events("1.0", "", 3).is_err());
    assert!(generate_version_events("1.0", "2023-4-26", 3).is_err());
    assert!(generate_version_events("1", "2023-04-26", 3).is_err());
    assert!(generate_version_events("1.0.0", "2023-04-26", 3).is_err());
}
