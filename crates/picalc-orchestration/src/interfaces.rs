//! Request and result types, and the presentation seam.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use picalc_core::{BackendKind, DEFAULT_DIGITS};

/// One π computation as requested by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputationRequest {
    /// Decimal digits after the leading "3.".
    #[serde(default = "default_digits")]
    pub digits: usize,
    /// Worker count; `None` or zero means hardware parallelism.
    #[serde(default)]
    pub processes: Option<usize>,
    /// Prefer the native backend when it is usable.
    #[serde(default = "default_use_fast")]
    pub use_fast_backend: bool,
}

fn default_digits() -> usize {
    DEFAULT_DIGITS
}

fn default_use_fast() -> bool {
    true
}

impl Default for ComputationRequest {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            processes: None,
            use_fast_backend: true,
        }
    }
}

impl ComputationRequest {
    /// Request `digits` digits with default workers and backend preference.
    #[must_use]
    pub fn new(digits: usize) -> Self {
        Self {
            digits,
            ..Self::default()
        }
    }

    /// Use exactly `processes` workers.
    #[must_use]
    pub fn with_processes(mut self, processes: usize) -> Self {
        self.processes = Some(processes);
        self
    }

    /// Set the backend preference.
    #[must_use]
    pub fn with_fast_backend(mut self, use_fast_backend: bool) -> Self {
        self.use_fast_backend = use_fast_backend;
        self
    }
}

/// Time spent by one worker on its chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerTiming {
    /// Owner id of the chunk.
    #[serde(rename = "process")]
    pub owner_id: usize,
    /// Seconds, rounded to four decimals.
    pub seconds: f64,
}

/// Outcome of one π computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputationResult {
    /// "3." followed by the requested digits, truncated rather than rounded.
    #[serde(rename = "pi")]
    pub pi_digits: String,
    /// Echo of the requested digit count.
    pub digits: usize,
    /// Wall-clock seconds, rounded to four decimals.
    #[serde(rename = "time")]
    pub elapsed_seconds: f64,
    /// Number of workers actually used.
    #[serde(rename = "processes")]
    pub worker_count: usize,
    /// Backend that served the request.
    #[serde(rename = "backend")]
    pub backend_used: BackendKind,
    /// Whether the native backend served the request.
    pub fast_backend: bool,
    /// One entry per worker, sorted by owner id.
    #[serde(rename = "timings")]
    pub per_worker_timings: Vec<WorkerTiming>,
}

/// Round to four decimal places, as reported in results.
#[must_use]
pub fn round_seconds(d: Duration) -> f64 {
    (d.as_secs_f64() * 10_000.0).round() / 10_000.0
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a finished computation.
    fn present_result(&self, result: &ComputationResult, details: bool);

    /// Present an error.
    fn present_error(&self, error: &str);
}
