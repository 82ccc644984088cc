use alloc::vec::Vec;
use core::cmp::Ordering;
use num_bigint::{BigUint, IntoBigUint, ModInverse};
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use rsa::traits::PrivateKeyParts;
use rsa::RsaPrivateKey;
use zeroize::Zeroizing;

use crate::errors::{Error, Result};
use crate::key::{SplitBy, SplitPrivateKey};
use crate::math::{congruent_mod, euler_totient, sample_unit};

/// The most shards a key can be split into.
///
/// Splitting itself stays fast at much higher values; the bound keeps the
/// signing round count and shard distribution surface within reason.
pub const MAX_SHARDS: usize = 16;

/// Splits the private exponent of `priv_key` into `k` shards that together
/// compose it.
///
/// With [`SplitBy::Multiplication`] the shards satisfy
/// `d_1 · d_2 · … · d_k ≡ d (mod φ(N))`; with [`SplitBy::Addition`] they
/// satisfy `d_1 + d_2 + … + d_k ≡ d (mod φ(N))`. Whichever scheme is used
/// here must also be used when combining partial signatures with
/// [`sign_next`](crate::sign_next); every shard records it.
///
/// Multi-prime keys are supported: the totient is derived from however many
/// prime factors the key carries.
///
/// The caller keeps ownership of `priv_key` and is responsible for
/// destroying it once the shards are distributed.
pub fn split_d<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    priv_key: &RsaPrivateKey,
    k: usize,
    split_by: SplitBy,
) -> Result<Vec<SplitPrivateKey>> {
    if k < 2 {
        return Err(Error::TooFewShards);
    }
    if k > MAX_SHARDS {
        return Err(Error::TooManyShards);
    }

    let phi = Zeroizing::new(euler_totient(priv_key.primes()));

    let shards = match split_by {
        SplitBy::Multiplication => split_multiplicative(rng, priv_key.d(), &phi, k),
        SplitBy::Addition => split_additive(rng, priv_key.d(), &phi, k),
    };

    check_shards(&shards, priv_key.d(), &phi, split_by, k)?;

    let public_key = priv_key.to_public_key();
    Ok(shards
        .into_iter()
        .map(|d| SplitPrivateKey::new(public_key.clone(), d, split_by))
        .collect())
}

/// Finds shards for `d` by drawing random pairs of factors whose cumulative
/// product is congruent to `d` modulo `phi`.
fn split_multiplicative<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    d: &BigUint,
    phi: &BigUint,
    k: usize,
) -> Vec<BigUint> {
    let mut shards = Vec::with_capacity(k);

    // Each round produces a pair with a · b ≡ seed (mod phi). `a` becomes a
    // shard; `b` is either the final shard or the seed split in the next
    // round.
    let mut seed = Zeroizing::new(d.clone());
    while shards.len() < k {
        let (a, b) = split_seed(rng, &seed, phi);
        shards.push(a);

        // if only one more shard is needed, keep the cofactor as-is and stop
        if shards.len() == k - 1 {
            shards.push(b);
            break;
        }

        *seed = b;
    }

    shards
}

/// Generates a pair `(a, b)` such that `a · b ≡ seed (mod phi)`.
fn split_seed<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    seed: &BigUint,
    phi: &BigUint,
) -> (BigUint, BigUint) {
    loop {
        let a = sample_unit(rng, phi, seed);

        // `a` is a unit of ℤ/phiℤ, so the inverse exists; the redraw is a
        // guard all the same
        let a_inv = match (&a).mod_inverse(phi).and_then(|inv| inv.into_biguint()) {
            Some(inv) => inv,
            None => continue,
        };

        // b <- seed / a (mod phi)
        let b = (seed * a_inv) % phi;
        return (a, b);
    }
}

/// Finds shards for `d` by picking `k - 1` random numbers and a final
/// corrective shard so the sum is congruent to `d` modulo `phi`.
fn split_additive<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    d: &BigUint,
    phi: &BigUint,
    k: usize,
) -> Vec<BigUint> {
    let one = BigUint::one();

    // the outer loop is a restart mechanism in case of an undesirable
    // combination of shards
    'shard_search: loop {
        let mut shards: Vec<BigUint> = Vec::with_capacity(k);

        for i in 0..k {
            if i == k - 1 {
                // the final shard makes the whole sum congruent to d (mod phi)
                let sum = shards.iter().fold(BigUint::zero(), |acc, s| acc + s) % phi;
                let last = match sum.cmp(d) {
                    // [sum of shards] is less than d (less likely case)
                    Ordering::Less => d - &sum,
                    // [sum of shards] is greater than d (more likely case)
                    Ordering::Greater => phi - &sum + d,
                    // [sum of shards] is equal to d (astronomically
                    // unlikely); a zero shard is not allowed, restart
                    Ordering::Equal => continue 'shard_search,
                };

                // equal to an existing shard, or too small to be an
                // exponent (astronomically unlikely); restart
                if last <= one || shards.contains(&last) {
                    continue 'shard_search;
                }

                shards.push(last);
            } else {
                loop {
                    let candidate = sample_unit(rng, phi, d);

                    // make sure it's not a duplicate of an existing shard
                    if !shards.contains(&candidate) {
                        shards.push(candidate);
                        break;
                    }
                }
            }
        }

        return shards;
    }
}

/// Re-checks the shard set invariants before anything leaves this module.
fn check_shards(
    shards: &[BigUint],
    d: &BigUint,
    phi: &BigUint,
    split_by: SplitBy,
    k: usize,
) -> Result<()> {
    if shards.len() != k {
        return Err(Error::Internal);
    }

    let one = BigUint::one();
    for (i, shard) in shards.iter().enumerate() {
        if shard <= &one || shard >= phi {
            return Err(Error::Internal);
        }
        if shards[..i].contains(shard) {
            return Err(Error::Internal);
        }
    }

    let composed = match split_by {
        SplitBy::Multiplication => shards.iter().fold(BigUint::one(), |acc, s| (acc * s) % phi),
        SplitBy::Addition => shards.iter().fold(BigUint::zero(), |acc, s| acc + s),
    };
    if !congruent_mod(&composed, d, phi) {
        return Err(Error::Internal);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use hex_literal::hex;
    use num_integer::Integer;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
    use rsa::traits::PublicKeyParts;

    // the 512-bit key the rsa crate uses for its PKCS#1 v1.5 test vectors
    fn test_key() -> RsaPrivateKey {
        let n = BigUint::from_bytes_be(&hex!(
            "B2990F49C47DFA8CD400AE6A4D1B8A3B6A13642B23F28B003BFB97790ADE9A4C"
            "C82B8B2A81747DDEC08B6296E53A08C331687EF25C4BF4936BA1C0E6041E9D15"
        ));
        let d = BigUint::from_bytes_be(&hex!(
            "8ABD6A69F4D1A4B487F0AB8D7AAEFD38609405C999984E30F567E1E8AEEFF44E"
            "8B18BDB1EC78DFA31A55E32A48D7FB131F5AF1F44D7D6B2CED2A9DF5E5AE4535"
        ));
        let primes = vec![
            BigUint::from_bytes_be(&hex!(
                "DAB2F18048BAA68DE7DF04D2D35D5D80E60E2DFA42D50A9B04219032715E46B3"
            )),
            BigUint::from_bytes_be(&hex!(
                "D10F2E66B1D0C13F10EF9927BF5324A379CA218146CBF9CAFC795221F16A3117"
            )),
        ];

        RsaPrivateKey::from_components(n, BigUint::from(65537u64), d, primes).unwrap()
    }

    fn shard_sum(shards: &[SplitPrivateKey]) -> BigUint {
        shards
            .iter()
            .fold(BigUint::zero(), |acc, shard| acc + shard.d())
    }

    fn shard_product(shards: &[SplitPrivateKey]) -> BigUint {
        shards
            .iter()
            .fold(BigUint::one(), |acc, shard| acc * shard.d())
    }

    #[test]
    fn rejects_bad_shard_counts() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let key = test_key();

        for split_by in [SplitBy::Addition, SplitBy::Multiplication] {
            assert!(matches!(
                split_d(&mut rng, &key, 0, split_by),
                Err(Error::TooFewShards)
            ));
            assert!(matches!(
                split_d(&mut rng, &key, 1, split_by),
                Err(Error::TooFewShards)
            ));
            assert!(matches!(
                split_d(&mut rng, &key, MAX_SHARDS + 1, split_by),
                Err(Error::TooManyShards)
            ));
        }
    }

    #[test]
    fn additive_shards_sum_to_d() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let key = test_key();
        let phi = euler_totient(key.primes());

        for k in 2..=MAX_SHARDS {
            let shards = split_d(&mut rng, &key, k, SplitBy::Addition).unwrap();
            assert_eq!(shards.len(), k);
            assert!(congruent_mod(&shard_sum(&shards), key.d(), &phi));
        }
    }

    #[test]
    fn multiplicative_shards_multiply_to_d() {
        let mut rng = ChaCha8Rng::from_seed([43; 32]);
        let key = test_key();
        let phi = euler_totient(key.primes());

        for k in 2..=MAX_SHARDS {
            let shards = split_d(&mut rng, &key, k, SplitBy::Multiplication).unwrap();
            assert_eq!(shards.len(), k);
            assert!(congruent_mod(&shard_product(&shards), key.d(), &phi));
        }
    }

    #[test]
    fn shards_are_distinct_units_in_range() {
        let mut rng = ChaCha8Rng::from_seed([44; 32]);
        let key = test_key();
        let phi = euler_totient(key.primes());
        let one = BigUint::one();

        for split_by in [SplitBy::Addition, SplitBy::Multiplication] {
            let shards = split_d(&mut rng, &key, 5, split_by).unwrap();

            for (i, shard) in shards.iter().enumerate() {
                assert!(*shard.d() > one && shard.d() < &phi);
                assert!(!shards[..i].iter().any(|other| other.d() == shard.d()));
            }

            // every sampled shard is a unit mod phi; the additive scheme's
            // final corrective shard is the one exception
            let sampled = match split_by {
                SplitBy::Addition => &shards[..4],
                SplitBy::Multiplication => &shards[..],
            };
            for shard in sampled {
                assert!(shard.d().gcd(&phi).is_one());
            }
        }
    }

    #[test]
    fn shards_carry_public_key_and_scheme() {
        let mut rng = ChaCha8Rng::from_seed([45; 32]);
        let key = test_key();
        let public_key = key.to_public_key();

        let shards = split_d(&mut rng, &key, 3, SplitBy::Multiplication).unwrap();
        for shard in &shards {
            assert_eq!(shard.public_key(), &public_key);
            assert_eq!(shard.split_by(), SplitBy::Multiplication);
            assert_eq!(shard.size(), public_key.size());
        }
    }

    #[test]
    fn split_is_randomized() {
        let mut rng = ChaCha8Rng::from_seed([46; 32]);
        let key = test_key();

        let first = split_d(&mut rng, &key, 2, SplitBy::Addition).unwrap();
        let second = split_d(&mut rng, &key, 2, SplitBy::Addition).unwrap();
        assert_ne!(first[0].d(), second[0].d());
    }
}
