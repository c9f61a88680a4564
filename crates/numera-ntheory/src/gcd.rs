//! Greatest common divisors and Bézout decompositions.

use num_traits::{One, Zero};
use numera_integers::Integer;

/// Computes the greatest common divisor of `a` and `b`.
///
/// The result is the unique non-negative integer dividing both operands
/// that every common divisor divides. Signs are ignored: `gcd(-a, b) =
/// gcd(a, b)`. The zero cases follow the usual convention, `gcd(0, b) =
/// |b|` and `gcd(0, 0) = 0`.
#[must_use]
pub fn gcd(a: &Integer, b: &Integer) -> Integer {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let r = a % &b;
        a = b;
        b = r;
    }
    a
}

/// Computes the least common multiple of `a` and `b`.
///
/// Returns 0 if either argument is 0, otherwise the non-negative lcm. The
/// quotient `|a| / gcd(a, b)` is taken before the product so the
/// intermediate never exceeds the result.
#[must_use]
pub fn lcm(a: &Integer, b: &Integer) -> Integer {
    if a.is_zero() || b.is_zero() {
        return Integer::zero();
    }
    let g = gcd(a, b);
    a.abs() / g * b.abs()
}

/// Computes the extended gcd of `a` and `b`.
///
/// Returns the Bézout triple `(g, s, t)` with `g = gcd(a, b) >= 0` and
/// `g = a*s + b*t` exactly. The coefficients for zero operands are fixed
/// deterministically: `(a, 0)` yields `(|a|, sign(a), 0)`, `(0, b)`
/// yields `(|b|, 0, sign(b))`, and `(0, 0)` yields `(0, 0, 0)`.
#[must_use]
pub fn gcd_ext(a: &Integer, b: &Integer) -> (Integer, Integer, Integer) {
    if b.is_zero() {
        if a.is_zero() {
            return (Integer::zero(), Integer::zero(), Integer::zero());
        }
        return (
            a.abs(),
            Integer::new(i64::from(a.signum())),
            Integer::zero(),
        );
    }
    if a.is_zero() {
        return (
            b.abs(),
            Integer::zero(),
            Integer::new(i64::from(b.signum())),
        );
    }

    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (Integer::one(), Integer::zero());
    let (mut old_t, mut t) = (Integer::zero(), Integer::one());

    while !r.is_zero() {
        let q = old_r.clone() / &r;

        let new_r = old_r - q.clone() * &r;
        old_r = r;
        r = new_r;

        let new_s = old_s - q.clone() * &s;
        old_s = s;
        s = new_s;

        let new_t = old_t - q * &t;
        old_t = t;
        t = new_t;
    }

    // The terminal remainder can be negative; fold the sign into the
    // coefficients so g is canonical.
    if old_r.is_negative() {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> Integer {
        Integer::new(v)
    }

    #[test]
    fn test_gcd_reference_values() {
        assert_eq!(gcd(&int(2), &int(4)), int(2));
        assert_eq!(gcd(&int(2), &int(3)), int(1));
        assert_eq!(gcd(&int(2), &int(6)), int(2));
        assert_eq!(gcd(&int(3), &int(6)), int(3));
        assert_eq!(gcd(&int(48), &int(18)), int(6));
    }

    #[test]
    fn test_gcd_signs_and_zeros() {
        assert_eq!(gcd(&int(-4), &int(6)), int(2));
        assert_eq!(gcd(&int(4), &int(-6)), int(2));
        assert_eq!(gcd(&int(-4), &int(-6)), int(2));
        assert_eq!(gcd(&int(0), &int(-7)), int(7));
        assert_eq!(gcd(&int(7), &int(0)), int(7));
        assert_eq!(gcd(&int(0), &int(0)), int(0));
    }

    #[test]
    fn test_lcm_reference_values() {
        assert_eq!(lcm(&int(2), &int(4)), int(4));
        assert_eq!(lcm(&int(2), &int(3)), int(6));
        assert_eq!(lcm(&int(2), &int(6)), int(6));
        assert_eq!(lcm(&int(3), &int(6)), int(6));
    }

    #[test]
    fn test_lcm_signs_and_zeros() {
        assert_eq!(lcm(&int(-2), &int(3)), int(6));
        assert_eq!(lcm(&int(2), &int(-3)), int(6));
        assert_eq!(lcm(&int(0), &int(5)), int(0));
        assert_eq!(lcm(&int(0), &int(0)), int(0));
    }

    fn check_bezout(a: i64, b: i64) -> Integer {
        let a = int(a);
        let b = int(b);
        let (g, s, t) = gcd_ext(&a, &b);
        assert_eq!(g, gcd(&a, &b));
        assert_eq!(a * s + b * t, g);
        g
    }

    #[test]
    fn test_gcd_ext_reference_values() {
        assert_eq!(check_bezout(2, 3), int(1));
        assert_eq!(check_bezout(3, 6), int(3));
    }

    #[test]
    fn test_gcd_ext_identity_holds_everywhere() {
        for a in [-48, -7, -1, 0, 1, 6, 48] {
            for b in [-18, -6, -1, 0, 1, 7, 18] {
                check_bezout(a, b);
            }
        }
    }

    #[test]
    fn test_gcd_ext_zero_operands_are_canonical() {
        assert_eq!(gcd_ext(&int(0), &int(0)), (int(0), int(0), int(0)));
        assert_eq!(gcd_ext(&int(5), &int(0)), (int(5), int(1), int(0)));
        assert_eq!(gcd_ext(&int(-5), &int(0)), (int(5), int(-1), int(0)));
        assert_eq!(gcd_ext(&int(0), &int(5)), (int(5), int(0), int(1)));
        assert_eq!(gcd_ext(&int(0), &int(-5)), (int(5), int(0), int(-1)));
    }

    #[test]
    fn test_gcd_large_operands() {
        let a = Integer::new(2).pow(200) * int(9);
        let b = Integer::new(2).pow(190) * int(6);
        let g = Integer::new(2).pow(191) * int(3);
        assert_eq!(gcd(&a, &b), g);

        let (ge, s, t) = gcd_ext(&a, &b);
        assert_eq!(ge, g);
        assert_eq!(a * s + b * t, g);
    }
}
