use uuid::Uuid;

/// Errors surfaced by the aggregation and classification core.
///
/// Zero denominators in the percent metrics are *not* errors; those cases
/// are defined to yield 0 (see [`crate::dashboard::compute_metrics`]). The
/// core never catches and suppresses; any row violating a documented
/// invariant propagates to the caller, which owns user-visible degradation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A monetary amount could not be parsed as a non-negative decimal.
    ///
    /// The backend serves numeric columns as decimal strings. A malformed
    /// string fails fast here instead of being silently coerced to 0.
    #[error("invalid amount {value:?} on row {id}: {reason}")]
    InvalidAmount {
        /// Id of the row carrying the bad amount.
        id: Uuid,
        /// The raw value as received.
        value: String,
        reason: String,
    },

    /// A risk row violates the probability/impact invariants: a factor
    /// outside [1,5], or a stored severity without both factors present.
    #[error("data integrity violation on risk {id}: {detail}")]
    DataIntegrity { id: Uuid, detail: String },
}

pub type Result<T> = std::result::Result<T, Error>;
