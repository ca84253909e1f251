//! The `compute_pi` entry point.

use std::time::Instant;

use tracing::{debug, info};

use picalc_core::{
    num_terms, partition, resolve_backend, resolve_worker_count, run_with_backend, BackendKind,
    BackendTask, PiError, PrecisionBackend, PrecisionConfig, WorkChunk, MAX_DIGITS,
};

use crate::assembler::PiAssembler;
use crate::interfaces::{round_seconds, ComputationRequest, ComputationResult, WorkerTiming};
use crate::reducer::reduce_parallel;

/// Compute π for `request`, resolving its backend preference first.
pub fn compute_pi(request: &ComputationRequest) -> Result<ComputationResult, PiError> {
    validate(request)?;
    let kind = resolve_backend(request.use_fast_backend)?;
    compute_pi_with_backend(request, kind)
}

/// Compute π on an explicitly chosen backend.
pub fn compute_pi_with_backend(
    request: &ComputationRequest,
    kind: BackendKind,
) -> Result<ComputationResult, PiError> {
    validate(request)?;

    let config = PrecisionConfig::new(request.digits, kind);
    let terms = num_terms(request.digits);
    let workers = resolve_worker_count(request.processes);
    let chunks = partition(terms, workers)?;
    info!(
        digits = request.digits,
        terms,
        workers,
        backend = %kind,
        "starting computation"
    );

    let start = Instant::now();
    let (pi_digits, per_worker_timings) = run_with_backend(
        &config,
        ChudnovskyTask {
            digits: request.digits,
            chunks: &chunks,
        },
    )?;
    let elapsed = start.elapsed();
    info!(?elapsed, "computation finished");

    Ok(ComputationResult {
        pi_digits,
        digits: request.digits,
        elapsed_seconds: round_seconds(elapsed),
        worker_count: workers,
        backend_used: kind,
        fast_backend: kind.is_native(),
        per_worker_timings,
    })
}

/// Reject requests before any work starts.
pub fn validate(request: &ComputationRequest) -> Result<(), PiError> {
    if request.digits == 0 {
        return Err(PiError::InvalidRequest("digits must be at least 1".into()));
    }
    if request.digits > MAX_DIGITS {
        return Err(PiError::InvalidRequest(format!(
            "digits must be at most {MAX_DIGITS}"
        )));
    }
    Ok(())
}

struct ChudnovskyTask<'a> {
    digits: usize,
    chunks: &'a [WorkChunk],
}

impl BackendTask for ChudnovskyTask<'_> {
    type Output = (String, Vec<WorkerTiming>);

    fn run<B: PrecisionBackend>(self, config: &PrecisionConfig) -> Result<Self::Output, PiError> {
        let backend = B::configure(config)?;
        let reduction = reduce_parallel(&backend, self.chunks)?;
        debug!(partials = reduction.partials.len(), "partial sums combined");

        let pi = PiAssembler::new(&backend).assemble(&reduction.total, self.digits)?;
        let timings = reduction
            .partials
            .iter()
            .map(|p| WorkerTiming {
                owner_id: p.owner_id,
                seconds: round_seconds(p.elapsed),
            })
            .collect();
        Ok((pi, timings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PI_50: &str = "3.14159265358979323846264338327950288419716939937510";

    fn fallback(digits: usize, workers: usize) -> ComputationResult {
        let req = ComputationRequest::new(digits).with_processes(workers);
        compute_pi_with_backend(&req, BackendKind::Fallback).unwrap()
    }

    #[test]
    fn fifteen_digits() {
        let result = fallback(15, 2);
        assert!(result.pi_digits.starts_with("3.14159265358979"));
        assert_eq!(result.pi_digits.len(), 17);
    }

    #[test]
    fn fifty_digits() {
        assert_eq!(fallback(50, 3).pi_digits, PI_50);
    }

    #[test]
    fn result_metadata() {
        let result = fallback(30, 4);
        assert_eq!(result.digits, 30);
        assert_eq!(result.worker_count, 4);
        assert_eq!(result.backend_used, BackendKind::Fallback);
        assert!(!result.fast_backend);
        let ids: Vec<_> = result.per_worker_timings.iter().map(|t| t.owner_id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert!(result.elapsed_seconds >= 0.0);
    }

    #[test]
    fn more_workers_than_terms() {
        // 50 digits need 4 terms.
        let result = fallback(50, 9);
        assert_eq!(result.pi_digits, PI_50);
        assert_eq!(result.per_worker_timings.len(), 9);
    }

    #[test]
    fn zero_digits_rejected() {
        let req = ComputationRequest::new(0);
        assert!(matches!(compute_pi(&req), Err(PiError::InvalidRequest(_))));
    }

    #[test]
    fn too_many_digits_rejected() {
        let req = ComputationRequest::new(MAX_DIGITS + 1);
        assert!(matches!(compute_pi(&req), Err(PiError::InvalidRequest(_))));
    }

    #[test]
    fn default_workers_use_hardware() {
        let req = ComputationRequest::new(20);
        let result = compute_pi_with_backend(&req, BackendKind::Fallback).unwrap();
        assert_eq!(result.worker_count, picalc_core::partition::hardware_parallelism());
    }

    #[test]
    fn preference_resolves_to_available_backend() {
        let req = ComputationRequest::new(20).with_processes(2);
        let result = compute_pi(&req).unwrap();
        let native = picalc_core::registry::capabilities().native_fast;
        assert_eq!(result.fast_backend, native);

        let result = compute_pi(&req.clone().with_fast_backend(false)).unwrap();
        assert_eq!(result.backend_used, BackendKind::Fallback);
    }
}
