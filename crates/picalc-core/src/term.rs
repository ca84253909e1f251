//! Chudnovsky series terms.
//!
//! ```text
//! term(k) = (6k)! · (545140134·k + 13591409)
//!           ----------------------------------------
//!           (3k)! · (k!)^3 · (-262537412640768000)^k
//! ```
//!
//! Numerator and denominator are exact integers; only the final quotient is
//! taken at the backend's working precision. The alternating sign lives in
//! the signed power.

use std::ops::Range;

use num_bigint::BigInt;

use crate::backend::PrecisionBackend;
use crate::constants::{DIGITS_PER_TERM, LINEAR_BASE, LINEAR_SLOPE, POWER_BASE};
use crate::error::PiError;
use crate::factorial::factorial;

/// Number of series terms needed for `digits` decimal digits.
#[must_use]
pub fn num_terms(digits: usize) -> usize {
    digits / DIGITS_PER_TERM + 1
}

/// A series term as an exact fraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactTerm {
    /// `(6k)! · (545140134·k + 13591409)`
    pub numerator: BigInt,
    /// `(3k)! · (k!)^3 · (-262537412640768000)^k`
    pub denominator: BigInt,
}

/// Compute term `k` as an exact fraction.
#[must_use]
pub fn exact_term(k: usize) -> ExactTerm {
    let linear = BigInt::from(LINEAR_SLOPE) * k + LINEAR_BASE;
    let numerator = BigInt::from(factorial(6 * k)) * linear;

    let k_fact = BigInt::from(factorial(k));
    let power: BigInt = num_traits::pow(BigInt::from(POWER_BASE), k);
    let denominator = BigInt::from(factorial(3 * k)) * num_traits::pow(k_fact, 3) * power;

    ExactTerm {
        numerator,
        denominator,
    }
}

/// Evaluates series terms on one backend.
pub struct TermEvaluator<'a, B: PrecisionBackend> {
    backend: &'a B,
}

impl<'a, B: PrecisionBackend> TermEvaluator<'a, B> {
    /// Create an evaluator bound to `backend`.
    #[must_use]
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Term `k` at working precision.
    pub fn term(&self, k: usize) -> Result<B::Number, PiError> {
        let exact = exact_term(k);
        let num = self.backend.from_integer(&exact.numerator);
        let den = self.backend.from_integer(&exact.denominator);
        self.backend.divide(&num, &den)
    }

    /// Sum of the terms in `range`, added in ascending index order.
    pub fn sum(&self, range: Range<usize>) -> Result<B::Number, PiError> {
        let mut total = self.backend.zero();
        for k in range {
            total = self.backend.add(&total, &self.term(k)?);
        }
        Ok(total)
    }
}
