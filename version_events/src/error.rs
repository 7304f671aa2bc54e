/// Version Events v1 — Error Types
///
/// Every fallible kernel operation returns `ProjectionError`.
/// A call either yields a complete schedule or one of these; never a
/// partial list.

/// Error type for all fallible operations in the version_events kernel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectionError {
    /// The input is not a calendar date in `YYYY-MM-DD` form.
    #[error("invalid date: {input:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The rejected input, verbatim.
        input: String,
    },

    /// The input is not a `major.minor` version in the numbering scheme.
    #[error("invalid version: {input:?} ({reason})")]
    InvalidVersion {
        /// The rejected input, verbatim.
        input: String,
        /// Which rule the input broke.
        reason: &'static str,
    },

    /// Adding `days` to `date` leaves the representable calendar.
    #[error("date overflow: {date} {days:+} days is out of range")]
    DateOverflow {
        /// The anchor date, formatted `YYYY-MM-DD`.
        date: String,
        /// The signed day delta that overflowed.
        days: i64,
    },

    /// A projected schedule broke one of its post-conditions.
    #[error("invariant violation: [{rule}] {detail}")]
    InvariantViolation {
        /// Short rule identifier, e.g. `sorted`.
        rule: &'static str,
        /// Human-readable description of the offending event(s).
        detail: String,
    },
}
