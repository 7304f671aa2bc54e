/// Version Events v1 — Schedule Invariants
///
/// Post-conditions of every projected schedule. The projector runs the
/// non-panicking form before returning; tests and the harness use the
/// panicking form.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::arithmetic::{add_days, days_between, format_date};
use crate::domain::{EventItem, Version};
use crate::error::ProjectionError;
use crate::offsets::{is_skipped, offset_for, pinned_date, MAX_MINOR};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run all schedule checks. Panics on the first failure.
pub fn validate_schedule(events: &[EventItem]) {
    if let Err(e) = try_validate_schedule(events) {
        panic!("{}", e);
    }
}

/// Non-panicking variant of `validate_schedule`.
pub fn try_validate_schedule(events: &[EventItem]) -> Result<(), ProjectionError> {
    check_sorted(events)?;
    check_version_numbering(events)?;
    check_no_skipped_versions(events)?;
    check_labels(events)?;
    check_offsets_consistent(events)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Individual checks
// ---------------------------------------------------------------------------

fn violation(rule: &'static str, detail: String) -> ProjectionError {
    ProjectionError::InvariantViolation { rule, detail }
}

/// Dates are non-decreasing.
fn check_sorted(events: &[EventItem]) -> Result<(), ProjectionError> {
    for pair in events.windows(2) {
        if pair[1].date < pair[0].date {
            return Err(violation(
                "sorted",
                format!(
                    "{:?} ({}) follows {:?} ({})",
                    pair[1].event,
                    format_date(pair[1].date),
                    pair[0].event,
                    format_date(pair[0].date)
                ),
            ));
        }
    }
    Ok(())
}

/// Minor never exceeds 8.
fn check_version_numbering(events: &[EventItem]) -> Result<(), ProjectionError> {
    match events.iter().find(|e| e.version.minor > MAX_MINOR) {
        Some(e) => Err(violation(
            "version_numbering",
            format!("version {} has minor above {}", e.version, MAX_MINOR),
        )),
        None => Ok(()),
    }
}

fn check_no_skipped_versions(events: &[EventItem]) -> Result<(), ProjectionError> {
    match events.iter().find(|e| is_skipped(e.version)) {
        Some(e) => Err(violation(
            "skipped_version",
            format!("event {:?} belongs to skipped version {}", e.event, e.version),
        )),
        None => Ok(()),
    }
}

/// Every label is `"<version> <known event name>"`.
fn check_labels(events: &[EventItem]) -> Result<(), ProjectionError> {
    for e in events {
        let prefix = format!("{} ", e.version);
        let known = e
            .event
            .strip_prefix(prefix.as_str())
            .map(|name| offset_for(name).is_some())
            .unwrap_or(false);
        if !known {
            return Err(violation(
                "event_label",
                format!("{:?} is not \"{}<event name>\"", e.event, prefix),
            ));
        }
    }
    Ok(())
}

/// Within a version, every non-pinned event sits at `launch + offset`
/// for one shared launch date.
fn check_offsets_consistent(events: &[EventItem]) -> Result<(), ProjectionError> {
    let mut launches: BTreeMap<Version, NaiveDate> = BTreeMap::new();

    for e in events {
        let name = e.event_name();
        if pinned_date(e.version, name).is_some() {
            continue;
        }
        // Labels were checked first.
        let offset = offset_for(name).unwrap_or(0);
        let implied = add_days(e.date, -offset)?;

        match launches.get(&e.version) {
            Some(launch) if *launch != implied => {
                return Err(violation(
                    "offset",
                    format!(
                        "{:?} on {} implies launch {}, expected {} (off by {} days)",
                        e.event,
                        format_date(e.date),
                        format_date(implied),
                        format_date(*launch),
                        days_between(*launch, implied)
                    ),
                ));
            }
            Some(_) => {}
            None => {
                launches.insert(e.version, implied);
            }
        }
    }
    Ok(())
}
