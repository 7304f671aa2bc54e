/// Version Events v1 — Core Domain Types
///
/// Pure data plus parsing. No projection logic lives here.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::arithmetic::parse_date;
use crate::error::ProjectionError;
use crate::offsets::{INITIAL_START_DATE, INITIAL_START_VERSION, MAX_MINOR};

// ── Version ────────────────────────────────────────────────────────

/// A `major.minor` release identifier.
///
/// Minor runs 0..=8, then rolls over into the next major:
/// `..., X.7, X.8, (X+1).0, ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    /// Build a version, rejecting a minor outside the numbering scheme.
    pub fn new(major: u32, minor: u32) -> Result<Self, ProjectionError> {
        if minor > MAX_MINOR {
            return Err(ProjectionError::InvalidVersion {
                input: format!("{}.{}", major, minor),
                reason: "minor must be in 0..=8",
            });
        }
        Ok(Self { major, minor })
    }

    /// The version that follows this one. `None` only if major overflows.
    pub fn next(self) -> Option<Self> {
        if self.minor >= MAX_MINOR {
            Some(Self {
                major: self.major.checked_add(1)?,
                minor: 0,
            })
        } else {
            Some(Self {
                major: self.major,
                minor: self.minor + 1,
            })
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = ProjectionError;

    /// Accepts exactly `digits "." digits`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &'static str| ProjectionError::InvalidVersion {
            input: s.to_string(),
            reason,
        };

        let (major, minor) = s
            .split_once('.')
            .ok_or_else(|| invalid("expected major.minor"))?;
        let major = parse_component(major).ok_or_else(|| invalid("major is not an unsigned integer"))?;
        let minor = parse_component(minor).ok_or_else(|| invalid("minor is not an unsigned integer"))?;
        if minor > MAX_MINOR {
            return Err(invalid("minor must be in 0..=8"));
        }
        Ok(Self { major, minor })
    }
}

fn parse_component(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl TryFrom<String> for Version {
    type Error = ProjectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.to_string()
    }
}

// ── Events ─────────────────────────────────────────────────────────

/// A single predicted event. Value type, no identity beyond its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventItem {
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// `"<version> <event name>"`, e.g. `"1.0 版本开启"`.
    pub event: String,
    pub version: Version,
}

impl EventItem {
    pub fn new(date: NaiveDate, version: Version, event_name: &str) -> Self {
        Self {
            date,
            event: format!("{} {}", version, event_name),
            version,
        }
    }

    /// The bare event name, without the version prefix.
    pub fn event_name(&self) -> &str {
        let prefix = format!("{} ", self.version);
        self.event.strip_prefix(prefix.as_str()).unwrap_or(&self.event)
    }
}

/// Launch anchor of one version in the cycle, whether or not it emits events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionLaunch {
    pub version: Version,
    pub launch_date: NaiveDate,
    pub skipped: bool,
}

// ── Configuration ──────────────────────────────────────────────────

/// What a skipped version does to the cycle clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkippedCycle {
    /// The skipped version still consumes a full cycle.
    #[default]
    Advance,
    /// The clock holds; the next numbered version takes the skipped slot.
    Collapse,
}

/// Explicit inputs of one projection. There are no hidden defaults: the
/// caller supplies the anchor, or asks for `initial_launch` by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionConfig {
    pub start_version: Version,
    pub start_date: NaiveDate,
    /// Versions to project past the start. Negative means none.
    pub num_versions: i64,
    pub skipped_cycle: SkippedCycle,
}

impl ProjectionConfig {
    /// Parse a configuration from its wire form.
    pub fn new(
        start_version: &str,
        start_date: &str,
        num_versions: i64,
    ) -> Result<Self, ProjectionError> {
        Ok(Self {
            start_version: start_version.parse()?,
            start_date: parse_date(start_date)?,
            num_versions,
            skipped_cycle: SkippedCycle::default(),
        })
    }

    /// Anchor at the service launch (`1.0`, `2023-04-26`).
    pub fn initial_launch(num_versions: i64) -> Result<Self, ProjectionError> {
        Self::new(INITIAL_START_VERSION, INITIAL_START_DATE, num_versions)
    }

    pub fn with_skipped_cycle(mut self, policy: SkippedCycle) -> Self {
        self.skipped_cycle = policy;
        self
    }

    /// Loop count with negatives clamped to zero.
    pub fn iterations(&self) -> u64 {
        u64::try_from(self.num_versions).unwrap_or(0)
    }
}
