//! Property-based tests for the number-theory engines.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use numera_integers::Integer;
    use proptest::prelude::*;

    use crate::{gcd, gcd_ext, lcm, mod_inverse, nextprime, probab_prime_p, Primality};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        // GCD laws

        #[test]
        fn gcd_divides_both(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = gcd(&a, &b);
            prop_assert!(!g.is_negative());
            if !g.is_zero() {
                prop_assert!((a % &g).is_zero());
                prop_assert!((b % &g).is_zero());
            }
        }

        #[test]
        fn gcd_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(gcd(&a, &b), gcd(&b, &a));
        }

        #[test]
        fn gcd_sign_invariant(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = gcd(&a, &b);
            prop_assert_eq!(gcd(&(-a.clone()), &b), g.clone());
            prop_assert_eq!(gcd(&a, &(-b)), g);
        }

        #[test]
        fn lcm_gcd_product(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let product = lcm(&a, &b) * gcd(&a, &b);
            prop_assert_eq!(product, (a * b).abs());
        }

        // Bézout identity

        #[test]
        fn bezout_identity(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let (g, s, t) = gcd_ext(&a, &b);
            prop_assert_eq!(g.clone(), gcd(&a, &b));
            prop_assert_eq!(a * s + b * t, g);
        }

        // Modular inverse

        #[test]
        fn mod_inverse_round_trip(a in small_int(), m in non_zero_int()) {
            let a = Integer::new(a);
            let m = Integer::new(m);
            let coprime = gcd(&a, &m).is_one();
            match mod_inverse(&a, &m).unwrap() {
                Some(b) => {
                    prop_assert!(coprime);
                    // b is the canonical representative and a*b = 1 (mod |m|).
                    let modulus = m.abs();
                    prop_assert!(!b.is_negative());
                    prop_assert!(b < modulus);
                    let mut residue = (a * b) % &modulus;
                    if residue.is_negative() {
                        residue = residue + &modulus;
                    }
                    prop_assert_eq!(residue, Integer::one() % &modulus);
                }
                None => prop_assert!(!coprime),
            }
        }

        // Prime search

        #[test]
        fn nextprime_exceeds_input(n in small_int()) {
            let n = Integer::new(n);
            let p = nextprime(&n);
            prop_assert!(p > n);
            prop_assert!(p >= Integer::new(2));
            prop_assert_ne!(probab_prime_p(&p), Primality::Composite);
        }

        #[test]
        fn no_prime_skipped_below_candidate(n in 0i64..500i64) {
            let n = Integer::new(n);
            let p = nextprime(&n);
            // Every value strictly between n and p is composite.
            let mut between = n + Integer::one();
            while between < p {
                prop_assert_eq!(probab_prime_p(&between), Primality::Composite);
                between = between + Integer::one();
            }
        }
    }
}
