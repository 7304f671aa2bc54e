//! Forecast configuration — a JSON document, unknown fields rejected.
//!
//! ```json
//! {
//!   "start_version": "3.3",
//!   "start_date": "2025-05-21",
//!   "num_versions": 4,
//!   "skipped_cycle": "advance",
//!   "filter_past_events": true,
//!   "reference_date": "2025-10-01"
//! }
//! ```
//!
//! Every field is optional; the anchor defaults to the service launch.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use version_events::arithmetic::parse_date;
use version_events::{ProjectionConfig, SkippedCycle, INITIAL_START_DATE, INITIAL_START_VERSION};

use crate::error::ForecastError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastConfig {
    #[serde(default = "default_start_version")]
    pub start_version: String,

    /// `YYYY-MM-DD` launch date of `start_version`.
    #[serde(default = "default_start_date")]
    pub start_date: String,

    /// Versions to project past the start.
    #[serde(default)]
    pub num_versions: i64,

    #[serde(default)]
    pub skipped_cycle: SkippedCycle,

    /// Drop events dated before `reference_date`.
    #[serde(default)]
    pub filter_past_events: bool,

    /// `YYYY-MM-DD`; required when `filter_past_events` is set.
    #[serde(default)]
    pub reference_date: Option<String>,
}

fn default_start_version() -> String {
    INITIAL_START_VERSION.to_string()
}
fn default_start_date() -> String {
    INITIAL_START_DATE.to_string()
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            start_version: default_start_version(),
            start_date: default_start_date(),
            num_versions: 0,
            skipped_cycle: SkippedCycle::default(),
            filter_past_events: false,
            reference_date: None,
        }
    }
}

impl ForecastConfig {
    /// Parse a config document.
    pub fn from_json_str(data: &str) -> Result<Self, ForecastError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ForecastError> {
        let data = fs::read_to_string(path).map_err(|source| ForecastError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&data)
    }

    /// The kernel inputs described by this config.
    pub fn projection(&self) -> Result<ProjectionConfig, ForecastError> {
        Ok(
            ProjectionConfig::new(&self.start_version, &self.start_date, self.num_versions)?
                .with_skipped_cycle(self.skipped_cycle),
        )
    }

    /// The filter cut-off, or `None` when filtering is off.
    ///
    /// A `reference_date` given while filtering is off is still parsed,
    /// so a malformed value is reported either way.
    pub fn filter_cutoff(&self) -> Result<Option<NaiveDate>, ForecastError> {
        let reference = self.reference_date.as_deref().map(parse_date).transpose()?;
        if !self.filter_past_events {
            return Ok(None);
        }
        reference.map(Some).ok_or(ForecastError::MissingReferenceDate)
    }
}
