//! Drift detection — structured comparison of two schedules.
//!
//! Events are matched by label (`"<version> <event name>"`), which is
//! unique within a schedule. Typical use: compare the forecast from an
//! older anchor against one re-anchored on an announced launch date.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use version_events::arithmetic::days_between;
use version_events::EventItem;

/// An event present in both schedules on different dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovedEvent {
    pub event: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    /// `to - from` in days; positive means later.
    pub delta_days: i64,
}

/// Structured drift report. All lists are sorted by label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriftReport {
    pub event_count_a: usize,
    pub event_count_b: usize,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub moved: Vec<MovedEvent>,
}

impl DriftReport {
    /// True when both schedules hold the same events on the same dates.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.moved.is_empty()
    }
}

fn by_label(events: &[EventItem]) -> BTreeMap<String, NaiveDate> {
    events.iter().map(|e| (e.event.clone(), e.date)).collect()
}

pub fn compare_forecasts(a: &[EventItem], b: &[EventItem]) -> DriftReport {
    let map_a = by_label(a);
    let map_b = by_label(b);

    let added: Vec<String> = map_b
        .keys()
        .filter(|k| !map_a.contains_key(*k))
        .cloned()
        .collect();
    let removed: Vec<String> = map_a
        .keys()
        .filter(|k| !map_b.contains_key(*k))
        .cloned()
        .collect();

    let moved: Vec<MovedEvent> = map_a
        .iter()
        .filter_map(|(label, from)| {
            let to = map_b.get(label)?;
            (to != from).then(|| MovedEvent {
                event: label.clone(),
                from: *from,
                to: *to,
                delta_days: days_between(*from, *to),
            })
        })
        .collect();

    DriftReport {
        event_count_a: a.len(),
        event_count_b: b.len(),
        added,
        removed,
        moved,
    }
}
