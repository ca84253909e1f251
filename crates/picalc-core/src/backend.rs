//! The arbitrary-precision arithmetic contract.
//!
//! `PrecisionBackend` is implemented by the decimal fallback
//! ([`crate::decimal::DecimalBackend`]) and, with the `gmp` feature, by the
//! MPFR backend (`backend_gmp::MpfrBackend`). A backend instance owns
//! the precision context: every number it hands out carries the working
//! precision of the [`PrecisionConfig`] it was configured with.

use std::fmt;

use num_bigint::BigInt;

use crate::error::PiError;
use crate::precision::{BackendKind, PrecisionConfig};

/// Arbitrary-precision real arithmetic at a fixed working precision.
pub trait PrecisionBackend: Sized + Send + Sync {
    /// The backend's number type.
    type Number: Clone + Send + fmt::Debug;

    /// Which backend kind this implementation reports.
    const KIND: BackendKind;

    /// Build a backend whose numbers carry `config.working_digits()` digits.
    fn configure(config: &PrecisionConfig) -> Result<Self, PiError>;

    /// The configuration this backend was built from.
    fn config(&self) -> &PrecisionConfig;

    /// The additive identity.
    fn zero(&self) -> Self::Number;

    /// Convert an exact integer.
    fn from_integer(&self, n: &BigInt) -> Self::Number;

    /// `a + b`.
    fn add(&self, a: &Self::Number, b: &Self::Number) -> Self::Number;

    /// `a · b`.
    fn mul(&self, a: &Self::Number, b: &Self::Number) -> Self::Number;

    /// `a / b` at working precision.
    fn divide(&self, a: &Self::Number, b: &Self::Number) -> Result<Self::Number, PiError>;

    /// Square root at working precision.
    fn constant_sqrt(&self, x: &Self::Number) -> Result<Self::Number, PiError>;

    /// Render `x` with exactly `places` digits after the decimal point,
    /// truncating any further digits.
    fn to_fixed_string(&self, x: &Self::Number, places: usize) -> String;
}

/// Lay out a fixed-point string from the magnitude digits of `|x| · 10^places`.
///
/// `magnitude` must be a plain run of ASCII digits without sign.
pub(crate) fn format_fixed(negative: bool, magnitude: &str, places: usize) -> String {
    let mut digits = String::with_capacity(places + 2);
    if magnitude.len() <= places {
        digits.extend(std::iter::repeat('0').take(places + 1 - magnitude.len()));
    }
    digits.push_str(magnitude);

    let split = digits.len() - places;
    let mut out = String::with_capacity(digits.len() + 2);
    // Avoid "-0.000" for values that truncate to zero.
    if negative && digits.bytes().any(|b| b != b'0') {
        out.push('-');
    }
    out.push_str(&digits[..split]);
    if places > 0 {
        out.push('.');
        out.push_str(&digits[split..]);
    }
    out
}
