//! Modular inversion and exponentiation.
//!
//! "No inverse exists" is an expected outcome for inputs not coprime to
//! the modulus, so it is reported as `Ok(None)` rather than an error; only
//! a zero modulus is rejected outright.

use num_traits::{One, Zero};
use numera_integers::Integer;
use thiserror::Error;

use crate::gcd::gcd_ext;

/// Errors raised by modular arithmetic.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ModularError {
    /// The modulus was zero.
    #[error("modulus must be nonzero")]
    ZeroModulus,
}

/// Computes the multiplicative inverse of `a` modulo `m`.
///
/// The modulus sign is ignored and the inverse is the canonical
/// representative in `[0, |m|)`, so `a * b ≡ 1 (mod |m|)` for the
/// returned `b`. Returns `Ok(None)` when `gcd(a, m) != 1`, i.e. when no
/// inverse exists.
///
/// # Errors
///
/// Returns [`ModularError::ZeroModulus`] if `m` is zero.
pub fn mod_inverse(a: &Integer, m: &Integer) -> Result<Option<Integer>, ModularError> {
    if m.is_zero() {
        return Err(ModularError::ZeroModulus);
    }
    let modulus = m.abs();
    let (g, s, _) = gcd_ext(a, &modulus);
    if !g.is_one() {
        return Ok(None);
    }
    let mut inverse = s % &modulus;
    if inverse.is_negative() {
        inverse = inverse + modulus;
    }
    Ok(Some(inverse))
}

/// Computes `base^exp mod m`.
///
/// The modulus sign is ignored and the result lies in `[0, |m|)`. A
/// negative exponent is resolved through [`mod_inverse`], so `Ok(None)`
/// is returned when the base is not invertible modulo `m`.
///
/// # Errors
///
/// Returns [`ModularError::ZeroModulus`] if `m` is zero.
pub fn powermod(
    base: &Integer,
    exp: &Integer,
    m: &Integer,
) -> Result<Option<Integer>, ModularError> {
    if m.is_zero() {
        return Err(ModularError::ZeroModulus);
    }
    let modulus = m.abs();
    if exp.is_negative() {
        let inverted = mod_inverse(base, &modulus)?;
        return Ok(inverted.map(|b| powermod_unsigned(&b, &exp.abs(), &modulus)));
    }
    Ok(Some(powermod_unsigned(base, exp, &modulus)))
}

/// Square-and-multiply exponentiation. Assumes `modulus > 0` and
/// `exp >= 0`; the result lies in `[0, modulus)`.
pub(crate) fn powermod_unsigned(base: &Integer, exp: &Integer, modulus: &Integer) -> Integer {
    let mut result = Integer::one() % modulus;
    let mut base = base.clone() % modulus;
    if base.is_negative() {
        base = base + modulus;
    }
    let mut exp = exp.clone();
    let two = Integer::new(2);

    while !exp.is_zero() {
        if !exp.is_even() {
            result = result * base.clone() % modulus;
        }
        base = base.clone() * base % modulus;
        exp = exp / &two;
    }

    result
}
