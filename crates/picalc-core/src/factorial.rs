//! Exact factorials by binary splitting.

use num_bigint::BigUint;
use num_traits::One;

use crate::constants::{PARALLEL_PRODUCT_THRESHOLD, PRODUCT_LEAF_SIZE};

/// Compute `n!` exactly.
///
/// The factors are multiplied as a balanced product tree so operands stay
/// similar in size; large subtrees are split across rayon tasks.
#[must_use]
pub fn factorial(n: usize) -> BigUint {
    if n < 2 {
        return BigUint::one();
    }
    product_range(2, n)
}

/// Product of every integer in `lo..=hi`.
fn product_range(lo: usize, hi: usize) -> BigUint {
    if lo > hi {
        return BigUint::one();
    }
    let count = hi - lo + 1;
    if count <= PRODUCT_LEAF_SIZE {
        return (lo..=hi).fold(BigUint::one(), |acc, f| acc * f);
    }

    let mid = lo + count / 2;
    if count >= PARALLEL_PRODUCT_THRESHOLD {
        let (left, right) = rayon::join(|| product_range(lo, mid - 1), || product_range(mid, hi));
        left * right
    } else {
        product_range(lo, mid - 1) * product_range(mid, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_factorials() {
        assert_eq!(factorial(0), BigUint::from(1u32));
        assert_eq!(factorial(1), BigUint::from(1u32));
        assert_eq!(factorial(5), BigUint::from(120u32));
        assert_eq!(factorial(20), BigUint::from(2_432_902_008_176_640_000u64));
    }

    #[test]
    fn factorial_30() {
        assert_eq!(
            factorial(30).to_string(),
            "265252859812191058636308480000000"
        );
    }

    #[test]
    fn matches_naive_product_across_thresholds() {
        for n in [PRODUCT_LEAF_SIZE, PRODUCT_LEAF_SIZE + 1, 100, PARALLEL_PRODUCT_THRESHOLD + 3] {
            let naive = (2..=n).fold(BigUint::one(), |acc, f| acc * f);
            assert_eq!(factorial(n), naive, "{n}!");
        }
    }
}
