//! MPFR-backed native backend using the `rug` crate.
//!
//! Only available when the `gmp` feature is enabled.

use num_bigint::{BigInt, Sign};
use rug::integer::Order;
use rug::{Float, Integer};

use crate::backend::{format_fixed, PrecisionBackend};
use crate::error::PiError;
use crate::precision::{BackendKind, PrecisionConfig};

/// Binary floating point at `ceil(working_digits · log2 10) + 1` bits.
#[derive(Debug, Clone)]
pub struct MpfrBackend {
    config: PrecisionConfig,
    prec: u32,
}

impl MpfrBackend {
    /// MPFR precision in bits.
    #[must_use]
    pub fn prec(&self) -> u32 {
        self.prec
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn bits_for_digits(digits: usize) -> Result<u32, PiError> {
        let bits = (digits as f64 * std::f64::consts::LOG2_10).ceil() as u64 + 1;
        u32::try_from(bits)
            .ok()
            .filter(|&b| b >= rug::float::prec_min() && b <= rug::float::prec_max())
            .ok_or_else(|| {
                PiError::BackendUnavailable(format!("MPFR cannot carry {digits} digits"))
            })
    }

    fn to_rug(n: &BigInt) -> Integer {
        let (sign, words) = n.to_u32_digits();
        let magnitude = Integer::from_digits(&words, Order::Lsf);
        if sign == Sign::Minus {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl PrecisionBackend for MpfrBackend {
    type Number = Float;

    const KIND: BackendKind = BackendKind::NativeFast;

    fn configure(config: &PrecisionConfig) -> Result<Self, PiError> {
        Ok(Self {
            config: *config,
            prec: Self::bits_for_digits(config.working_digits())?,
        })
    }

    fn config(&self) -> &PrecisionConfig {
        &self.config
    }

    fn zero(&self) -> Float {
        Float::new(self.prec)
    }

    fn from_integer(&self, n: &BigInt) -> Float {
        Float::with_val(self.prec, Self::to_rug(n))
    }

    fn add(&self, a: &Float, b: &Float) -> Float {
        Float::with_val(self.prec, a + b)
    }

    fn mul(&self, a: &Float, b: &Float) -> Float {
        Float::with_val(self.prec, a * b)
    }

    fn divide(&self, a: &Float, b: &Float) -> Result<Float, PiError> {
        if b.is_zero() {
            return Err(PiError::Arithmetic("division by zero".into()));
        }
        Ok(Float::with_val(self.prec, a / b))
    }

    fn constant_sqrt(&self, x: &Float) -> Result<Float, PiError> {
        if x.is_sign_negative() && !x.is_zero() {
            return Err(PiError::Arithmetic("square root of a negative number".into()));
        }
        Ok(Float::with_val(self.prec, x.sqrt_ref()))
    }

    fn to_fixed_string(&self, x: &Float, places: usize) -> String {
        let exp = u32::try_from(places).unwrap_or(u32::MAX);
        let scale = Integer::from(Integer::u_pow_u(10, exp));
        // Enough bits to hold every integer digit of x · 10^places exactly.
        let int_bits = u32::try_from(x.get_exp().unwrap_or(0).max(0)).unwrap_or(0);
        let prec = self.prec.max(int_bits.saturating_add(scale.significant_bits()) + 64);
        let shifted = Float::with_val(prec, x * &scale).trunc();
        let value = shifted.to_integer().unwrap_or_default();
        let negative = value < 0;
        format_fixed(negative, &value.abs().to_string_radix(10), places)
    }
}
