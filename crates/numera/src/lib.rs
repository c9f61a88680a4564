//! # Numera
//!
//! The exact number-theory kernel of a symbolic computation engine.
//!
//! Numera provides the arbitrary-precision integer primitives that every
//! higher layer (rational arithmetic, polynomial arithmetic,
//! simplification rules) depends on for correctness:
//!
//! - **Integer values**: immutable arbitrary-precision integers with
//!   value equality and no in-place mutation
//! - **GCD/LCM**: Euclidean reduction, defined for every sign and zero
//! - **Extended GCD**: Bézout decompositions with an exact identity
//! - **Primality**: tri-state classification and next-prime search
//! - **Modular arithmetic**: inversion and exponentiation with canonical
//!   representatives
//!
//! ## Quick Start
//!
//! ```rust
//! use numera::prelude::*;
//!
//! let a = Integer::new(48);
//! let b = Integer::new(18);
//! assert_eq!(gcd(&a, &b), Integer::new(6));
//!
//! let (g, s, t) = gcd_ext(&a, &b);
//! assert_eq!(a * s + b * t, g);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use numera_integers as integers;
pub use numera_ntheory as ntheory;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use numera_integers::{ArithmeticError, Integer};
    pub use numera_ntheory::{
        gcd, gcd_ext, lcm, mod_inverse, nextprime, powermod, probab_prime_p, ModularError,
        Primality,
    };
}
