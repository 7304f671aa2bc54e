use tracing_subscriber::EnvFilter;

/// Crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &["version_events", "version_events_runtime"];

/// Initialize tracing based on a verbosity level.
///
/// Mapping:
/// - 0      -> warn
/// - 1 (-v) -> info
/// - 2 (-vv)-> debug
/// - 3+     -> trace
///
/// `RUST_LOG` overrides the level if set. Calling this more than once
/// is harmless; only the first subscriber is installed.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
