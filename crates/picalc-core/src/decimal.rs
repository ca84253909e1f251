//! Decimal fixed-point fallback backend over `num-bigint`.
//!
//! A number is stored as an integer mantissa `m` standing for `m · 10^-s`,
//! where the scale `s` is the working precision of the configuration. All
//! quantities of the Chudnovsky evaluation that reach the output (the series
//! sum, `C` and π itself) have magnitude at least one, so `s` fractional
//! digits give at least `s` significant digits for them. Division and square
//! root truncate toward zero.

use num_bigint::{BigInt, Sign};
use num_traits::{Pow, Signed, Zero};

use crate::backend::{format_fixed, PrecisionBackend};
use crate::error::PiError;
use crate::precision::{BackendKind, PrecisionConfig};

/// A fixed-point decimal number owned by one [`DecimalBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalNumber {
    mantissa: BigInt,
}

impl DecimalNumber {
    /// Raw scaled mantissa.
    #[must_use]
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }
}

/// Fixed-point decimal arithmetic at `working_digits` fractional digits.
#[derive(Debug, Clone)]
pub struct DecimalBackend {
    config: PrecisionConfig,
    scale: usize,
    /// `10^scale`, the representation of one.
    unit: BigInt,
}

impl DecimalBackend {
    /// Number of fractional digits every value carries.
    #[must_use]
    pub fn scale(&self) -> usize {
        self.scale
    }

    fn pow10(exp: usize) -> BigInt {
        Pow::pow(BigInt::from(10u32), exp)
    }
}

impl PrecisionBackend for DecimalBackend {
    type Number = DecimalNumber;

    const KIND: BackendKind = BackendKind::Fallback;

    fn configure(config: &PrecisionConfig) -> Result<Self, PiError> {
        let scale = config.working_digits();
        Ok(Self {
            config: *config,
            scale,
            unit: Self::pow10(scale),
        })
    }

    fn config(&self) -> &PrecisionConfig {
        &self.config
    }

    fn zero(&self) -> DecimalNumber {
        DecimalNumber {
            mantissa: BigInt::zero(),
        }
    }

    fn from_integer(&self, n: &BigInt) -> DecimalNumber {
        DecimalNumber {
            mantissa: n * &self.unit,
        }
    }

    fn add(&self, a: &DecimalNumber, b: &DecimalNumber) -> DecimalNumber {
        DecimalNumber {
            mantissa: &a.mantissa + &b.mantissa,
        }
    }

    fn mul(&self, a: &DecimalNumber, b: &DecimalNumber) -> DecimalNumber {
        DecimalNumber {
            mantissa: (&a.mantissa * &b.mantissa) / &self.unit,
        }
    }

    fn divide(&self, a: &DecimalNumber, b: &DecimalNumber) -> Result<DecimalNumber, PiError> {
        if b.mantissa.is_zero() {
            return Err(PiError::Arithmetic("division by zero".into()));
        }
        Ok(DecimalNumber {
            mantissa: (&a.mantissa * &self.unit) / &b.mantissa,
        })
    }

    fn constant_sqrt(&self, x: &DecimalNumber) -> Result<DecimalNumber, PiError> {
        if x.mantissa.is_negative() {
            return Err(PiError::Arithmetic("square root of a negative number".into()));
        }
        // sqrt(m · 10^-s) · 10^s = sqrt(m · 10^s)
        Ok(DecimalNumber {
            mantissa: (&x.mantissa * &self.unit).sqrt(),
        })
    }

    fn to_fixed_string(&self, x: &DecimalNumber, places: usize) -> String {
        let shifted = if places <= self.scale {
            &x.mantissa / Self::pow10(self.scale - places)
        } else {
            &x.mantissa * Self::pow10(places - self.scale)
        };
        let negative = shifted.sign() == Sign::Minus;
        format_fixed(negative, &shifted.magnitude().to_str_radix(10), places)
    }
}
