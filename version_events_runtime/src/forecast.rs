//! Forecast orchestrator — project, optionally filter, fingerprint.
//!
//! All date logic is delegated to the kernel. The only thing added here
//! is the opt-in past-event filter, driven by an explicit reference
//! date rather than the wall clock.

use chrono::NaiveDate;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::info;

use version_events::hashing::{canonical_hash, canonical_serialize};
use version_events::{project, EventItem};

use crate::config::ForecastConfig;
use crate::error::ForecastError;

/// A projected schedule together with its canonical fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Forecast {
    pub events: Vec<EventItem>,
    /// SHA-256 of the canonical JSON of `events`.
    pub hash: String,
    /// Whether past events were dropped.
    pub filtered: bool,
}

impl Forecast {
    /// Pretty JSON for display or export.
    pub fn to_json_pretty(&self) -> Result<String, ForecastError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Canonical JSON of the events (the bytes `hash` is taken over).
    pub fn canonical_json(&self) -> String {
        String::from_utf8_lossy(&canonical_serialize(&self.events)).into_owned()
    }
}

/// Run one forecast described by `config`.
///
/// 1. Build kernel inputs (fails fast on malformed version/date)
/// 2. Project the full sorted schedule
/// 3. If `filter_past_events`, keep events on or after `reference_date`
/// 4. Fingerprint what is returned
#[tracing::instrument(skip_all, fields(start_version = %config.start_version, num_versions = config.num_versions))]
pub fn run_forecast(config: &ForecastConfig) -> Result<Forecast, ForecastError> {
    let projection = config.projection()?;
    let cutoff = config.filter_cutoff()?;

    let mut events = project(&projection)?;
    let projected = events.len();
    if let Some(reference) = cutoff {
        events = filter_upcoming(events, reference);
    }

    let hash = canonical_hash(&events);
    info!(
        projected,
        returned = events.len(),
        filtered = cutoff.is_some(),
        hash = %hash,
        "forecast complete"
    );

    Ok(Forecast {
        events,
        hash,
        filtered: cutoff.is_some(),
    })
}

/// Keep events dated on or after `reference`. Order is preserved.
pub fn filter_upcoming(events: Vec<EventItem>, reference: NaiveDate) -> Vec<EventItem> {
    events.into_iter().filter(|e| e.date >= reference).collect()
}

/// First event on or after `reference` in a date-sorted schedule.
pub fn next_event(events: &[EventItem], reference: NaiveDate) -> Option<&EventItem> {
    let idx = events.partition_point(|e| e.date < reference);
    events.get(idx)
}

/// Verify determinism by running the same config twice and asserting
/// identical hashes. Panics on mismatch.
pub fn verify_determinism(config: &ForecastConfig) -> Result<(), ForecastError> {
    let first = run_forecast(config)?;
    let second = run_forecast(config)?;

    if first.hash != second.hash {
        panic!(
            "DETERMINISM FAILURE: two forecasts produced different hashes.\n\
             Run 1: {}\n\
             Run 2: {}",
            first.hash, second.hash
        );
    }
    Ok(())
}

/// Recompute the fingerprint from the events and compare.
pub fn verify_forecast_hash(forecast: &Forecast) -> bool {
    let digest = Sha256::digest(canonical_serialize(&forecast.events));
    let computed: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    computed == forecast.hash
}
