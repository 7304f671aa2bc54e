/// Version Events v1 — Projector
///
/// Top-level entry points. Walks the version cycle, expands each
/// released version through the offset table, sorts, then validates
/// the schedule before handing it back.
///
/// Pure: same inputs, same output. No wall clock, no shared state.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::arithmetic::{add_days, format_date};
use crate::domain::{EventItem, ProjectionConfig, SkippedCycle, Version, VersionLaunch};
use crate::error::ProjectionError;
use crate::invariants::try_validate_schedule;
use crate::offsets::{is_skipped, pinned_date, EVENT_OFFSETS, FULL_CYCLE_DAYS};

/// Project the event schedule from wire-form inputs.
///
/// `start_date` is `YYYY-MM-DD`. A negative `num_versions` projects the
/// start version only.
pub fn generate_version_events(
    start_version: &str,
    start_date: &str,
    num_versions: i64,
) -> Result<Vec<EventItem>, ProjectionError> {
    let config = ProjectionConfig::new(start_version, start_date, num_versions)?;
    project(&config)
}

/// Project the event schedule for a parsed configuration.
///
///   1. Walk the cycle (`version_launches`)
///   2. Expand every released version through `EVENT_OFFSETS`
///   3. Stable sort by date (same-day events keep emission order)
///   4. Validate the schedule
pub fn project(config: &ProjectionConfig) -> Result<Vec<EventItem>, ProjectionError> {
    let launches = version_launches(config)?;

    let released = launches.iter().filter(|l| !l.skipped).count();
    let mut events = Vec::with_capacity(released * EVENT_OFFSETS.len());
    for launch in launches.iter().filter(|l| !l.skipped) {
        emit_version(launch.version, launch.launch_date, &mut events)?;
    }

    events.sort_by_key(|e| e.date);
    try_validate_schedule(&events)?;

    info!(
        start_version = %config.start_version,
        start_date = %format_date(config.start_date),
        versions = released,
        events = events.len(),
        "projected version events"
    );
    Ok(events)
}

/// Launch anchors for the start version and each of the following
/// `num_versions` versions, skipped ones included and flagged.
pub fn version_launches(config: &ProjectionConfig) -> Result<Vec<VersionLaunch>, ProjectionError> {
    if is_skipped(config.start_version) {
        return Err(ProjectionError::InvalidVersion {
            input: config.start_version.to_string(),
            reason: "start version is a skipped version",
        });
    }

    let mut launches = vec![VersionLaunch {
        version: config.start_version,
        launch_date: config.start_date,
        skipped: false,
    }];

    let mut version = config.start_version;
    let mut current = config.start_date;
    for _ in 0..config.iterations() {
        version = version.next().ok_or_else(|| ProjectionError::InvalidVersion {
            input: version.to_string(),
            reason: "major version overflow",
        })?;
        let next_start = add_days(current, FULL_CYCLE_DAYS)?;

        if is_skipped(version) {
            debug!(version = %version, slot = %format_date(next_start), "skipping version");
            launches.push(VersionLaunch {
                version,
                launch_date: next_start,
                skipped: true,
            });
            if config.skipped_cycle == SkippedCycle::Advance {
                current = next_start;
            }
            continue;
        }

        launches.push(VersionLaunch {
            version,
            launch_date: next_start,
            skipped: false,
        });
        current = next_start;
    }

    Ok(launches)
}

/// Append one version's events in table order.
fn emit_version(
    version: Version,
    launch: NaiveDate,
    events: &mut Vec<EventItem>,
) -> Result<(), ProjectionError> {
    debug!(version = %version, launch = %format_date(launch), "emitting version");
    for (name, offset) in EVENT_OFFSETS {
        let date = match pinned_date(version, name) {
            Some(pinned) => pinned,
            None => add_days(launch, *offset)?,
        };
        events.push(EventItem::new(date, version, name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::parse_date;

    fn find<'a>(events: &'a [EventItem], label: &str) -> &'a EventItem {
        events
            .iter()
            .find(|e| e.event == label)
            .unwrap_or_else(|| panic!("missing event {:?}", label))
    }

    #[test]
    fn test_zero_versions_emits_one_table() {
        let events = generate_version_events("1.0", "2023-04-26", 0).unwrap();
        assert_eq!(events.len(), EVENT_OFFSETS.len());
        let launch = parse_date("2023-04-26").unwrap();
        for e in &events {
            let offset = crate::offsets::offset_for(e.event_name()).unwrap();
            assert_eq!(e.date, add_days(launch, offset).unwrap());
        }
    }

    #[test]
    fn test_negative_versions_is_zero() {
        let a = generate_version_events("1.0", "2023-04-26", -3).unwrap();
        let b = generate_version_events("1.0", "2023-04-26", 0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_first_cycle_dates() {
        let events = generate_version_events("1.0", "2023-04-26", 1).unwrap();
        assert_eq!(events.len(), 20);
        assert_eq!(find(&events, "1.0 版本开启").date, parse_date("2023-04-26").unwrap());
        assert_eq!(find(&events, "1.0 下半开启").date, parse_date("2023-05-17").unwrap());
        assert_eq!(find(&events, "1.1 版本开启").date, parse_date("2023-06-07").unwrap());
        assert_eq!(find(&events, "1.0 天外卫星通信").date, parse_date("2023-02-28").unwrap());
    }

    #[test]
    fn test_same_day_events_keep_emission_order() {
        // 1.0 走进星穹 (-1) and 1.1 测试服 (-43 from 06-07) both land on 04-25.
        let events = generate_version_events("1.0", "2023-04-26", 1).unwrap();
        let same_day: Vec<&str> = events
            .iter()
            .filter(|e| e.date == parse_date("2023-04-25").unwrap())
            .map(|e| e.event.as_str())
            .collect();
        assert_eq!(same_day, vec!["1.0 走进星穹", "1.1 测试服"]);
    }

    #[test]
    fn test_skipped_version_advances_clock() {
        // 2.7 -> 2.8 (skipped) -> 3.0
        let events = generate_version_events("2.7", "2024-11-13", 2).unwrap();
        assert!(events.iter().all(|e| e.version.to_string() != "2.8"));
        assert_eq!(find(&events, "3.0 版本开启").date, parse_date("2025-02-05").unwrap());
    }

    #[test]
    fn test_skipped_version_collapse_holds_clock() {
        let config = ProjectionConfig::new("2.7", "2024-11-13", 2)
            .unwrap()
            .with_skipped_cycle(SkippedCycle::Collapse);
        let events = project(&config).unwrap();
        assert_eq!(find(&events, "3.0 版本开启").date, parse_date("2024-12-25").unwrap());
    }

    #[test]
    fn test_launches_flag_skipped() {
        let config = ProjectionConfig::new("1.6", "2024-01-03", 3).unwrap();
        let launches = version_launches(&config).unwrap();
        let flags: Vec<(String, bool)> = launches
            .iter()
            .map(|l| (l.version.to_string(), l.skipped))
            .collect();
        assert_eq!(
            flags,
            vec![
                ("1.6".to_string(), false),
                ("1.7".to_string(), true),
                ("1.8".to_string(), true),
                ("2.0".to_string(), false),
            ]
        );
        assert_eq!(launches[3].launch_date, parse_date("2024-05-08").unwrap());
    }

    #[test]
    fn test_pinned_predownload_for_3_7() {
        let events = generate_version_events("3.3", "2025-05-21", 4).unwrap();
        let pre = find(&events, "3.7 预下载");
        assert_eq!(pre.date, parse_date("2025-11-04").unwrap());
        assert_eq!(pre.version.to_string(), "3.7");
        assert_eq!(find(&events, "3.7 版本开启").date, parse_date("2025-11-05").unwrap());
    }

    #[test]
    fn test_skipped_start_version_rejected() {
        let err = generate_version_events("1.7", "2024-02-14", 1).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidVersion { .. }));
    }

    #[test]
    fn test_malformed_inputs_fail_fast() {
        assert!(matches!(
            generate_version_events("1.0", "2023-02-30", 1),
            Err(ProjectionError::InvalidDate { .. })
        ));
        assert!(matches!(
            generate_version_events("one.zero", "2023-04-26", 1),
            Err(ProjectionError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn test_overflow_near_calendar_end_is_error() {
        let config = ProjectionConfig {
            start_version: Version::new(1, 0).unwrap(),
            start_date: NaiveDate::MAX,
            num_versions: 1,
            skipped_cycle: SkippedCycle::Advance,
        };
        assert!(matches!(
            project(&config),
            Err(ProjectionError::DateOverflow { .. })
        ));
    }
}
