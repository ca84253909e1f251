//! Backend capability detection and dispatch.
//!
//! Detection runs once per process and is cached. A request then resolves
//! its preference against the detected capabilities into a [`BackendKind`],
//! and [`run_with_backend`] hands a [`BackendTask`] the concrete backend type
//! for that kind.

use std::sync::OnceLock;

use num_bigint::BigInt;
use tracing::{debug, info, warn};

use crate::backend::PrecisionBackend;
use crate::decimal::DecimalBackend;
use crate::error::PiError;
use crate::precision::{BackendKind, PrecisionConfig};

/// Which backends passed the startup sanity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    /// Native backend usable.
    pub native_fast: bool,
    /// Fallback backend usable.
    pub fallback: bool,
}

impl Capabilities {
    /// Probe every backend compiled into this build.
    #[must_use]
    pub fn detect() -> Self {
        let native_fast = match probe_native() {
            Ok(()) => true,
            Err(e) => {
                debug!(reason = %e, "native backend not usable");
                false
            }
        };
        let fallback = match sanity_check::<DecimalBackend>(BackendKind::Fallback) {
            Ok(()) => true,
            Err(e) => {
                warn!(reason = %e, "decimal backend failed its sanity check");
                false
            }
        };
        Self {
            native_fast,
            fallback,
        }
    }

    /// Resolve a backend preference against these capabilities.
    ///
    /// A preference for the native backend silently degrades to the
    /// fallback when the native backend is not usable.
    pub fn resolve(&self, prefer_fast: bool) -> Result<BackendKind, PiError> {
        if prefer_fast && self.native_fast {
            return Ok(BackendKind::NativeFast);
        }
        if self.fallback {
            return Ok(BackendKind::Fallback);
        }
        Err(PiError::BackendUnavailable(
            "neither the native nor the decimal backend could be constructed".into(),
        ))
    }
}

/// Process-wide capabilities, detected on first use.
pub fn capabilities() -> &'static Capabilities {
    static CAPS: OnceLock<Capabilities> = OnceLock::new();
    CAPS.get_or_init(|| {
        let caps = Capabilities::detect();
        debug!(?caps, "backend capabilities detected");
        caps
    })
}

/// Resolve a backend preference against the process-wide capabilities.
pub fn resolve_backend(prefer_fast: bool) -> Result<BackendKind, PiError> {
    let caps = capabilities();
    if prefer_fast && !caps.native_fast {
        info!("native backend not usable; using decimal fallback");
    }
    caps.resolve(prefer_fast)
}

/// Build a backend and push one test value through it: `314 / 100`
/// rendered to two places must read `3.14`.
fn sanity_check<B: PrecisionBackend>(kind: BackendKind) -> Result<(), PiError> {
    let backend = B::configure(&PrecisionConfig::new(4, kind))?;
    let value = backend.divide(
        &backend.from_integer(&BigInt::from(314)),
        &backend.from_integer(&BigInt::from(100)),
    )?;
    let rendered = backend.to_fixed_string(&value, 2);
    if rendered == "3.14" {
        Ok(())
    } else {
        Err(PiError::BackendUnavailable(format!(
            "sanity check rendered {rendered:?} instead of \"3.14\""
        )))
    }
}

#[cfg(feature = "gmp")]
fn probe_native() -> Result<(), PiError> {
    sanity_check::<crate::backend_gmp::MpfrBackend>(BackendKind::NativeFast)
}

#[cfg(not(feature = "gmp"))]
fn probe_native() -> Result<(), PiError> {
    Err(PiError::BackendUnavailable(
        "built without the `gmp` feature".into(),
    ))
}

/// Work that runs generically over the backend chosen for a request.
pub trait BackendTask {
    /// Value produced by the task.
    type Output;

    /// Run with backend type `B`, configured from `config`.
    fn run<B: PrecisionBackend>(
        self,
        config: &PrecisionConfig,
    ) -> Result<Self::Output, PiError>;
}

/// Run `task` with the backend type named by `config.backend_kind()`.
pub fn run_with_backend<T: BackendTask>(
    config: &PrecisionConfig,
    task: T,
) -> Result<T::Output, PiError> {
    match config.backend_kind() {
        BackendKind::Fallback => task.run::<DecimalBackend>(config),
        #[cfg(feature = "gmp")]
        BackendKind::NativeFast => task.run::<crate::backend_gmp::MpfrBackend>(config),
        #[cfg(not(feature = "gmp"))]
        BackendKind::NativeFast => Err(PiError::BackendUnavailable(
            "native backend requested but built without the `gmp` feature".into(),
        )),
    }
}
