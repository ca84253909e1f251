//! # picalc-orchestration
//!
//! Parallel series summation, π assembly, and the request/result contract.

pub mod assembler;
pub mod engine;
pub mod interfaces;
pub mod reducer;

pub use assembler::PiAssembler;
pub use engine::{compute_pi, compute_pi_with_backend};
pub use interfaces::{ComputationRequest, ComputationResult, ResultPresenter, WorkerTiming};
pub use reducer::{reduce_parallel, PartialResult, Reduction};
