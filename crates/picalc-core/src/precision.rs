//! Precision configuration and backend selection tag.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::GUARD_DIGITS;

/// Which arithmetic backend serves a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// MPFR binary floating point via `rug` (requires the `gmp` feature).
    NativeFast,
    /// Decimal fixed point over `num-bigint`, always available.
    Fallback,
}

impl BackendKind {
    /// Whether this is the native fast backend.
    #[must_use]
    pub fn is_native(self) -> bool {
        matches!(self, Self::NativeFast)
    }

    /// Short stable name, as used in JSON output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::NativeFast => "native-fast",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Precision settings for one computation.
///
/// Built once per request, before any arithmetic, and handed by reference to
/// every backend constructor. All numbers of a computation derive from one
/// value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionConfig {
    requested_digits: usize,
    guard_digits: usize,
    backend_kind: BackendKind,
}

impl PrecisionConfig {
    /// Create a configuration for `requested_digits` output digits.
    #[must_use]
    pub fn new(requested_digits: usize, backend_kind: BackendKind) -> Self {
        Self {
            requested_digits,
            guard_digits: GUARD_DIGITS,
            backend_kind,
        }
    }

    /// Digits the caller asked for.
    #[must_use]
    pub fn requested_digits(&self) -> usize {
        self.requested_digits
    }

    /// Extra digits carried to absorb rounding error.
    #[must_use]
    pub fn guard_digits(&self) -> usize {
        self.guard_digits
    }

    /// Backend this configuration was resolved for.
    #[must_use]
    pub fn backend_kind(&self) -> BackendKind {
        self.backend_kind
    }

    /// Decimal digits every number must carry: requested plus guard digits.
    #[must_use]
    pub fn working_digits(&self) -> usize {
        self.requested_digits + self.guard_digits
    }
}
