//! Splitting the term-index range across workers.

use std::num::NonZeroUsize;
use std::ops::Range;

use serde::Serialize;

use crate::error::PiError;

/// A contiguous range of term indices owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkChunk {
    /// Worker id, `0..worker_count`.
    pub owner_id: usize,
    /// First index of the chunk.
    pub start_index: usize,
    /// One past the last index of the chunk.
    pub end_index: usize,
}

impl WorkChunk {
    /// Term indices of this chunk.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    /// Number of terms in the chunk.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    /// Whether the chunk holds no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }
}

/// Split `[0, num_terms)` into `worker_count` contiguous chunks.
///
/// Each worker gets `num_terms / worker_count` terms and the last one also
/// takes the remainder. With more workers than terms, every chunk but the
/// last is empty.
pub fn partition(num_terms: usize, worker_count: usize) -> Result<Vec<WorkChunk>, PiError> {
    if worker_count == 0 {
        return Err(PiError::InvalidRequest(
            "worker count must be at least 1".into(),
        ));
    }

    let terms_per_worker = num_terms / worker_count;
    let chunks = (0..worker_count)
        .map(|owner_id| {
            let start_index = owner_id * terms_per_worker;
            let end_index = if owner_id == worker_count - 1 {
                num_terms
            } else {
                (owner_id + 1) * terms_per_worker
            };
            WorkChunk {
                owner_id,
                start_index,
                end_index,
            }
        })
        .collect();
    Ok(chunks)
}

/// Number of workers available on this machine.
#[must_use]
pub fn hardware_parallelism() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Resolve a requested worker count; `None` or zero means hardware parallelism.
#[must_use]
pub fn resolve_worker_count(requested: Option<usize>) -> usize {
    match requested {
        Some(n) if n > 0 => n,
        _ => hardware_parallelism(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_split() {
        let chunks = partition(8, 4).unwrap();
        let ranges: Vec<_> = chunks.iter().map(WorkChunk::range).collect();
        assert_eq!(ranges, vec![0..2, 2..4, 4..6, 6..8]);
    }

    #[test]
    fn last_chunk_takes_remainder() {
        let chunks = partition(10, 3).unwrap();
        let ranges: Vec<_> = chunks.iter().map(WorkChunk::range).collect();
        assert_eq!(ranges, vec![0..3, 3..6, 6..10]);
        assert_eq!(chunks[2].len(), 4);
    }

    #[test]
    fn more_workers_than_terms() {
        let chunks = partition(2, 5).unwrap();
        assert_eq!(chunks.len(), 5);
        assert!(chunks[..4].iter().all(WorkChunk::is_empty));
        assert_eq!(chunks[4].range(), 0..2);
    }

    #[test]
    fn owner_ids_are_sequential() {
        let chunks = partition(100, 7).unwrap();
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.owner_id, i);
        }
    }

    #[test]
    fn zero_workers_rejected() {
        assert!(matches!(partition(10, 0), Err(PiError::InvalidRequest(_))));
    }

    #[test]
    fn resolve_defaults_to_hardware() {
        assert_eq!(resolve_worker_count(Some(3)), 3);
        assert_eq!(resolve_worker_count(Some(0)), hardware_parallelism());
        assert_eq!(resolve_worker_count(None), hardware_parallelism());
        assert!(hardware_parallelism() >= 1);
    }
}
