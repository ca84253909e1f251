//! Final division and digit rendering.

use num_bigint::BigInt;

use picalc_core::constants::{C_MULTIPLIER, C_RADICAND};
use picalc_core::{PiError, PrecisionBackend};

/// Turns a reduced series sum into π and its digit string.
pub struct PiAssembler<'a, B: PrecisionBackend> {
    backend: &'a B,
}

impl<'a, B: PrecisionBackend> PiAssembler<'a, B> {
    /// Create an assembler bound to `backend`.
    #[must_use]
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// `C = 426880 · sqrt(10005)` at working precision.
    pub fn chudnovsky_constant(&self) -> Result<B::Number, PiError> {
        let radicand = self.backend.from_integer(&BigInt::from(C_RADICAND));
        let root = self.backend.constant_sqrt(&radicand)?;
        let multiplier = self.backend.from_integer(&BigInt::from(C_MULTIPLIER));
        Ok(self.backend.mul(&multiplier, &root))
    }

    /// `π = C / total`.
    pub fn pi(&self, total: &B::Number) -> Result<B::Number, PiError> {
        let c = self.chudnovsky_constant()?;
        self.backend.divide(&c, total)
    }

    /// Render `pi` as its first `digits + 2` characters.
    ///
    /// Digits past the last reported one are cut, not rounded, so the final
    /// digit may be one unit lower than a correctly rounded expansion.
    pub fn render(&self, pi: &B::Number, digits: usize) -> String {
        self.backend
            .to_fixed_string(pi, digits)
            .chars()
            .take(digits + 2)
            .collect()
    }

    /// Divide and render in one step.
    pub fn assemble(&self, total: &B::Number, digits: usize) -> Result<String, PiError> {
        let pi = self.pi(total)?;
        Ok(self.render(&pi, digits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picalc_core::{BackendKind, DecimalBackend, PrecisionConfig, TermEvaluator};

    fn decimal(digits: usize) -> DecimalBackend {
        DecimalBackend::configure(&PrecisionConfig::new(digits, BackendKind::Fallback)).unwrap()
    }

    #[test]
    fn chudnovsky_constant_value() {
        let b = decimal(20);
        let c = PiAssembler::new(&b).chudnovsky_constant().unwrap();
        // 426880 · sqrt(10005) = 42698670.666333395817712...
        assert_eq!(b.to_fixed_string(&c, 8), "42698670.66633339");
    }

    #[test]
    fn single_term_gives_thirteen_digits() {
        let b = decimal(30);
        let total = TermEvaluator::new(&b).sum(0..1).unwrap();
        let pi = PiAssembler::new(&b).assemble(&total, 13).unwrap();
        assert_eq!(pi, "3.1415926535897");
    }

    #[test]
    fn render_length_is_digits_plus_two() {
        let b = decimal(40);
        let total = TermEvaluator::new(&b).sum(0..3).unwrap();
        let asm = PiAssembler::new(&b);
        let pi = asm.pi(&total).unwrap();
        for digits in [1, 5, 20, 40] {
            assert_eq!(asm.render(&pi, digits).len(), digits + 2);
        }
        assert_eq!(asm.render(&pi, 1), "3.1");
    }

    #[test]
    fn zero_total_is_arithmetic_error() {
        let b = decimal(10);
        let asm = PiAssembler::new(&b);
        assert!(matches!(
            asm.assemble(&b.zero(), 5),
            Err(PiError::Arithmetic(_))
        ));
    }
}
