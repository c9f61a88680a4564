//! # numera-ntheory
//!
//! Number-theoretic primitives over arbitrary precision integers:
//! greatest common divisors, Bézout decompositions, primality
//! classification, next-prime search, and modular inversion.
//!
//! Every higher layer of the engine (rational normalization, polynomial
//! arithmetic, simplification) relies on these operations for exactness,
//! so each one is defined for every input: zero, negative, and unit
//! values included.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod gcd;
pub mod modular;
pub mod primality;

#[cfg(test)]
mod proptests;

pub use gcd::{gcd, gcd_ext, lcm};
pub use modular::{mod_inverse, powermod, ModularError};
pub use primality::{nextprime, probab_prime_p, Primality};
