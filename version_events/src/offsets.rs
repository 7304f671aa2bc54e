/// Version Events v1 — Offset Table
///
/// Immutable calendar constants. Any change here changes every
/// projection and requires bumping `TABLE_VERSION`.

use chrono::NaiveDate;

use crate::domain::Version;

/// Event name → signed day offset from the version's launch date.
///
/// Order is significant: it is the emission order within a version, and
/// therefore the tie order for same-day events after the stable sort.
pub const EVENT_OFFSETS: &[(&str, i64)] = &[
    ("天外卫星通信", -57),
    ("测试服", -43),
    ("前瞻特别节目", -12),
    ("角色PV", -6),
    ("角色介绍", -5),
    ("活动速递", -4),
    ("预下载", -2),
    ("走进星穹", -1),
    ("版本开启", 0),
    ("下半开启", 21),
];

/// Length of a full version cycle, launch to launch.
pub const FULL_CYCLE_DAYS: i64 = 42;

/// Highest minor before rollover to the next major.
pub const MAX_MINOR: u32 = 8;

/// Versions that never shipped. They emit nothing.
pub const SKIPPED_VERSIONS: &[Version] = &[
    Version { major: 1, minor: 7 },
    Version { major: 1, minor: 8 },
    Version { major: 2, minor: 8 },
];

/// Historical exceptions: (version, event name, (year, month, day)).
/// The pinned date replaces `launch + offset` for that one event.
const PINNED_EVENTS: &[(Version, &str, (i32, u32, u32))] = &[(
    Version { major: 3, minor: 7 },
    "预下载",
    (2025, 11, 4),
)];

/// Service launch version.
pub const INITIAL_START_VERSION: &str = "1.0";

/// Service launch date.
pub const INITIAL_START_DATE: &str = "2023-04-26";

/// Offset of a named event, if the table knows it.
pub fn offset_for(event_name: &str) -> Option<i64> {
    EVENT_OFFSETS
        .iter()
        .find(|(name, _)| *name == event_name)
        .map(|(_, offset)| *offset)
}

pub fn is_skipped(version: Version) -> bool {
    SKIPPED_VERSIONS.contains(&version)
}

/// Pinned date for (version, event), overriding the offset formula.
pub fn pinned_date(version: Version, event_name: &str) -> Option<NaiveDate> {
    PINNED_EVENTS
        .iter()
        .find(|(v, name, _)| *v == version && *name == event_name)
        .and_then(|(_, _, (y, m, d))| NaiveDate::from_ymd_opt(*y, *m, *d))
}
