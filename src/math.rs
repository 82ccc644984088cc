use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;

/// Calculates the Euler totient of a modulus from its prime factors,
/// however many there are.
pub(crate) fn euler_totient(primes: &[BigUint]) -> BigUint {
    let one = BigUint::one();

    let mut phi = BigUint::one();
    for prime in primes {
        phi *= prime - &one;
    }
    phi
}

/// Checks that `n` divides `a - b`.
pub(crate) fn congruent_mod(a: &BigUint, b: &BigUint, n: &BigUint) -> bool {
    a % n == b % n
}

/// Draws a uniformly random unit of `ℤ/φℤ`, i.e. an integer in `(1, φ)`
/// coprime to `φ`, that is also distinct from `forbidden`.
///
/// Rejection-samples from `[0, φ)`, so the draw is unbiased. The expected
/// number of rounds is small: the units make up a constant fraction of the
/// ring for RSA-sized `φ`.
pub(crate) fn sample_unit<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    phi: &BigUint,
    forbidden: &BigUint,
) -> BigUint {
    loop {
        let r = rng.gen_biguint_below(phi);

        if r.is_zero() || r.is_one() || &r == forbidden {
            continue;
        }

        if r.gcd(phi).is_one() {
            return r;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    fn big(n: u64) -> BigUint {
        BigUint::from_u64(n).unwrap()
    }

    #[test]
    fn totient_of_two_primes() {
        // phi(15) = (3 - 1)(5 - 1)
        assert_eq!(euler_totient(&[big(3), big(5)]), big(8));
    }

    #[test]
    fn totient_of_many_primes() {
        // phi(3 * 5 * 7 * 11) = 2 * 4 * 6 * 10
        let primes = [big(3), big(5), big(7), big(11)];
        assert_eq!(euler_totient(&primes), big(480));
    }

    #[test]
    fn congruences() {
        let cases = [
            (17u64, 5u64, 12u64, true),
            (17, 17, 12, true),
            (5, 17, 12, true),
            (17, 6, 12, false),
            (0, 24, 12, true),
        ];

        for (a, b, n, expected) in cases {
            assert_eq!(
                congruent_mod(&big(a), &big(b), &big(n)),
                expected,
                "{} ≡ {} (mod {})",
                a,
                b,
                n
            );
        }
    }

    #[test]
    fn sampled_units_are_valid() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        // phi = 2 * 3 * 5 * 7, small enough to exercise every rejection arm
        let phi = big(210);
        let forbidden = big(11);
        let one = BigUint::one();

        for _ in 0..500 {
            let r = sample_unit(&mut rng, &phi, &forbidden);
            assert!(r > one && r < phi);
            assert_ne!(r, forbidden);
            assert!(r.gcd(&phi).is_one());
        }
    }
}
