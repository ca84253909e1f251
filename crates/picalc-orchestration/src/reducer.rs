//! Parallel fan-out of series chunks and deterministic fan-in.
//!
//! Each chunk runs on its own scoped thread with its own backend instance,
//! configured from the same [`PrecisionConfig`] as the driver. Workers share
//! nothing but the result channel, which each writes exactly once. The driver
//! receives once per worker, joins every handle, then adds the partial sums
//! in owner-id order.

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::bounded;
use tracing::{debug, warn};

use picalc_core::{PiError, PrecisionBackend, PrecisionConfig, TermEvaluator, WorkChunk};

/// Partial sum reported by one worker.
#[derive(Debug, Clone)]
pub struct PartialResult<N> {
    /// Owner id of the chunk.
    pub owner_id: usize,
    /// Sum of the chunk's terms.
    pub partial_sum: N,
    /// Time spent summing.
    pub elapsed: Duration,
}

/// Combined sum plus the per-worker partials it was built from.
#[derive(Debug, Clone)]
pub struct Reduction<N> {
    /// Sum of every partial, added in owner-id order.
    pub total: N,
    /// Partials sorted by owner id.
    pub partials: Vec<PartialResult<N>>,
}

/// Sum every chunk on its own worker and combine the results.
///
/// Any worker that errors, panics or never reports fails the whole
/// reduction; no partial sums are returned in that case.
pub fn reduce_parallel<B: PrecisionBackend>(
    backend: &B,
    chunks: &[WorkChunk],
) -> Result<Reduction<B::Number>, PiError> {
    let config = backend.config();
    let (tx, rx) = bounded::<Result<PartialResult<B::Number>, PiError>>(chunks.len());

    let (mut partials, failure) = thread::scope(|s| {
        let mut failure: Option<PiError> = None;
        let mut handles = Vec::with_capacity(chunks.len());

        for &chunk in chunks {
            let tx = tx.clone();
            let spawned = thread::Builder::new()
                .name(format!("picalc-worker-{}", chunk.owner_id))
                .spawn_scoped(s, move || {
                    // The driver keeps the receiver alive until every worker is joined.
                    let _ = tx.send(run_worker::<B>(config, chunk));
                });
            match spawned {
                Ok(handle) => handles.push((chunk.owner_id, handle)),
                Err(e) => {
                    failure.get_or_insert(PiError::WorkerFailure {
                        owner_id: chunk.owner_id,
                        reason: format!("could not spawn worker thread: {e}"),
                    });
                }
            }
        }
        drop(tx);

        let mut partials = Vec::with_capacity(handles.len());
        for _ in 0..handles.len() {
            match rx.recv() {
                Ok(Ok(partial)) => partials.push(partial),
                Ok(Err(e)) => {
                    failure.get_or_insert(e);
                }
                // Every sender is gone: some worker died without reporting.
                Err(_) => break,
            }
        }

        for (owner_id, handle) in handles {
            if handle.join().is_err() {
                warn!(owner_id, "worker panicked");
                failure.get_or_insert(PiError::WorkerFailure {
                    owner_id,
                    reason: "worker panicked before reporting".into(),
                });
            }
        }
        (partials, failure)
    });

    if let Some(e) = failure {
        return Err(e);
    }
    if partials.len() != chunks.len() {
        let owner_id = chunks
            .iter()
            .map(|c| c.owner_id)
            .find(|id| !partials.iter().any(|p| p.owner_id == *id))
            .unwrap_or_default();
        return Err(PiError::WorkerFailure {
            owner_id,
            reason: "worker did not report a partial sum".into(),
        });
    }

    partials.sort_by_key(|p| p.owner_id);
    let total = partials
        .iter()
        .fold(backend.zero(), |acc, p| backend.add(&acc, &p.partial_sum));

    Ok(Reduction { total, partials })
}

/// Body of one worker: build a private backend and sum the chunk.
fn run_worker<B: PrecisionBackend>(
    config: &PrecisionConfig,
    chunk: WorkChunk,
) -> Result<PartialResult<B::Number>, PiError> {
    let as_worker_failure = |e: PiError| PiError::WorkerFailure {
        owner_id: chunk.owner_id,
        reason: e.to_string(),
    };

    let backend = B::configure(config).map_err(as_worker_failure)?;
    let start = Instant::now();
    let partial_sum = TermEvaluator::new(&backend)
        .sum(chunk.range())
        .map_err(as_worker_failure)?;
    let elapsed = start.elapsed();

    debug!(
        owner_id = chunk.owner_id,
        start = chunk.start_index,
        end = chunk.end_index,
        ?elapsed,
        "worker finished"
    );
    Ok(PartialResult {
        owner_id: chunk.owner_id,
        partial_sum,
        elapsed,
    })
}
