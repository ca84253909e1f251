//! # picalc-core
//!
//! Core library for the PiCalc-rs π calculator: Chudnovsky series terms,
//! arbitrary-precision backends, and work partitioning.

pub mod backend;
#[cfg(feature = "gmp")]
pub mod backend_gmp;
pub mod constants;
pub mod decimal;
pub mod error;
pub(crate) mod factorial;
pub mod partition;
pub mod precision;
pub mod registry;
pub mod term;

// Re-exports
pub use backend::PrecisionBackend;
pub use constants::{exit_codes, DEFAULT_DIGITS, GUARD_DIGITS, MAX_DIGITS};
pub use decimal::DecimalBackend;
pub use error::PiError;
pub use partition::{partition, resolve_worker_count, WorkChunk};
pub use precision::{BackendKind, PrecisionConfig};
pub use registry::{resolve_backend, run_with_backend, BackendTask, Capabilities};
pub use term::{exact_term, num_terms, ExactTerm, TermEvaluator};
