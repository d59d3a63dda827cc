//! Exact equality and hashing for `f64` components.
//!
//! Equality is exact (no tolerance). NaN equals NaN and `0.0` equals `-0.0`,
//! which makes the relation reflexive so the value types can implement `Eq`.
//! The hash feeds a canonical bit pattern so it agrees with that relation.
use std::hash::Hasher;

#[inline]
pub fn exact_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

#[inline]
pub fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

pub fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    state.write_u64(canonical_bits(value));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_eq_has_no_tolerance() {
        assert!(exact_eq(1.5, 1.5));
        assert!(!exact_eq(0.1 + 0.2, 0.3));
        assert!(!exact_eq(1.0, 1.0 + f64::EPSILON));
    }

    #[test]
    fn test_signed_zero_and_nan() {
        assert!(exact_eq(0.0, -0.0));
        assert!(exact_eq(f64::NAN, f64::NAN));
        assert!(!exact_eq(f64::NAN, 0.0));
        assert_eq!(canonical_bits(0.0), canonical_bits(-0.0));
        assert_eq!(canonical_bits(f64::NAN), canonical_bits(-f64::NAN));
        assert_ne!(canonical_bits(1.0), canonical_bits(-1.0));
    }
}
