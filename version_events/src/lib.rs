#![forbid(unsafe_code)]

//! Version Events v1
//!
//! Deterministic projection of recurring promotional and operational
//! events over a versioned release cadence.
//!
//! ```text
//! (start version, launch date, n) ──version_launches──▶ [VersionLaunch]
//!                                 ──EVENT_OFFSETS────▶ [EventItem] ──sort──▶ schedule
//! ```

/// Offset table v1 — Immutable. Changing the table, skips or pins
/// requires bumping this and regenerating golden fixtures.
pub const TABLE_VERSION: u32 = 1;

pub mod arithmetic;
pub mod domain;
pub mod error;
pub mod offsets;
pub mod projector;
pub mod invariants;
pub mod hashing;

pub use domain::{EventItem, ProjectionConfig, SkippedCycle, Version, VersionLaunch};
pub use error::ProjectionError;
pub use offsets::{EVENT_OFFSETS, INITIAL_START_DATE, INITIAL_START_VERSION};
pub use projector::{generate_version_events, project, version_launches};
