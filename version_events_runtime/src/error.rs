//! Error types for the runtime layer.

use std::path::PathBuf;

use version_events::ProjectionError;

/// Error type for all fallible runtime operations.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    /// The config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config document is not valid JSON or has unknown fields.
    #[error("invalid forecast config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The kernel rejected the inputs.
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// Past-event filtering was requested without a reference date.
    #[error("filter_past_events is set but reference_date is missing")]
    MissingReferenceDate,
}
