//! Error type shared by every stage of a π computation.

/// Error type for π computations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PiError {
    /// No arithmetic backend could be constructed.
    #[error("no arithmetic backend available: {0}")]
    BackendUnavailable(String),

    /// The request was rejected before any work started.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A worker crashed or did not report its partial sum.
    #[error("worker {owner_id} failed: {reason}")]
    WorkerFailure {
        /// Owner id of the failing chunk.
        owner_id: usize,
        /// Human-readable cause.
        reason: String,
    },

    /// An arithmetic operation had no defined result (e.g. division by zero).
    #[error("arithmetic error: {0}")]
    Arithmetic(String),
}
