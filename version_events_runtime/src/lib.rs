#![forbid(unsafe_code)]

//! Version Events — Runtime
//!
//! Wraps the version_events kernel with configuration, logging,
//! opt-in past-event filtering, fingerprint verification and drift
//! comparison.
//!
//! No date logic lives here — projection is delegated to the kernel.

pub mod error;
pub mod config;
pub mod logging;
pub mod forecast;
pub mod drift;

pub use config::ForecastConfig;
pub use drift::{compare_forecasts, DriftReport, MovedEvent};
pub use error::ForecastError;
pub use forecast::{filter_upcoming, next_event, run_forecast, verify_forecast_hash, Forecast};
