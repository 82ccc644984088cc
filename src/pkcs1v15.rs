//! The PKCS#1 v1.5 partial-signature flow, as described in [RFC 8017 § 8.2]
//! with the private-key operation replaced by a shard operation.
//!
//! [RFC 8017 § 8.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-8.2

use alloc::vec;
use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::One;
use rand_core::CryptoRngCore;
use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;

use crate::errors::{Error, Result};
use crate::hash::Hash;
use crate::internals::{left_pad, shard_exp};
use crate::key::{SplitBy, SplitPrivateKey};

/// Returns the digest length and DigestInfo prefix for `hash`, after
/// checking that the input actually is a digest of the declared function.
///
/// `None` indicates that the data is signed directly, without a prefix.
/// This isn't advisable except for interoperability.
fn hash_info<H: Hash>(hash: Option<&H>, digest_len: usize) -> Result<(usize, Vec<u8>)> {
    match hash {
        Some(hash) => {
            if digest_len != hash.size() {
                return Err(Error::InputNotHashed);
            }
            Ok((hash.size(), hash.asn1_prefix()))
        }
        None => Ok((digest_len, Vec::new())),
    }
}

/// Builds the PKCS#1 v1.5 encoded message block for signing.
pub(crate) fn pkcs1v15_sign_pad(prefix: &[u8], hashed: &[u8], k: usize) -> Result<Vec<u8>> {
    let hash_len = hashed.len();
    let t_len = prefix.len() + hashed.len();
    if k < t_len + 11 {
        return Err(Error::MessageTooLong);
    }

    // EM = 0x00 || 0x01 || PS || 0x00 || T
    let mut em = vec![0xff; k];
    em[0] = 0;
    em[1] = 1;
    em[k - t_len - 1] = 0;
    em[k - t_len..k - hash_len].copy_from_slice(prefix);
    em[k - hash_len..k].copy_from_slice(hashed);

    Ok(em)
}

/// Pads `hashed` into an encoded message and raises it to the shard
/// exponent. This is the shared core of both signing entry points.
fn sign_shard<H: Hash>(
    shard: &SplitPrivateKey,
    hash: Option<&H>,
    hashed: &[u8],
) -> Result<BigUint> {
    let (_, prefix) = hash_info(hash, hashed.len())?;
    let em = pkcs1v15_sign_pad(&prefix, hashed, shard.size())?;
    let m = BigUint::from_bytes_be(&em);

    shard_exp(shard, &m)
}

/// Uses the given key shard to produce the initial partial signature over a
/// hashed message.
///
/// `hashed` must be the result of hashing the input message using the given
/// hash function. If `hash` is `None`, `hashed` is signed directly.
///
/// The output is `m^{d_i} mod N`, left-padded to the modulus size. It is
/// not a valid signature under the shared public key; it becomes one only
/// after every other shard of the split has been folded in, either with
/// [`sign_next`] or (additive splits only) with
/// [`combine_partial_signatures`].
///
/// `rng` is accepted for interface parity and future scheme-level blinding;
/// shard exponentiation itself runs unblinded, see the crate-level notes on
/// timing.
pub fn sign_first<R: CryptoRngCore + ?Sized, H: Hash>(
    rng: Option<&mut R>,
    shard: &SplitPrivateKey,
    hash: Option<&H>,
    hashed: &[u8],
) -> Result<Vec<u8>> {
    let _ = rng;

    let s = sign_shard(shard, hash, hashed)?;
    left_pad(&s.to_bytes_be(), shard.size())
}

/// Uses the given key shard to sign a partially-signed message.
///
/// With [`SplitBy::Multiplication`], the next signature is
/// `partial^{d_i} (mod N)`, a chain of exponentiation.
///
/// With [`SplitBy::Addition`], the next signature is
/// `partial · m^{d_i} (mod N)`, a chain of multiplication.
///
/// `split_by` must match the scheme the key was split under; under a
/// mismatched scheme the result is well-formed but does not verify.
/// `hashed` must be the result of hashing the input message using the given
/// hash function, exactly as in [`sign_first`]. Once every shard of the
/// split has signed, the output verifies under the shared public key with
/// any conformant PKCS#1 v1.5 verifier.
pub fn sign_next<R: CryptoRngCore + ?Sized, H: Hash>(
    rng: Option<&mut R>,
    shard: &SplitPrivateKey,
    hash: Option<&H>,
    hashed: &[u8],
    split_by: SplitBy,
    partial_sig: &[u8],
) -> Result<Vec<u8>> {
    let _ = rng;

    let partial = BigUint::from_bytes_be(partial_sig);
    if &partial >= shard.n() {
        return Err(Error::PartialSignatureOutOfRange);
    }

    let next = match split_by {
        SplitBy::Multiplication => partial.modpow(shard.d(), shard.n()),
        SplitBy::Addition => {
            let s = sign_shard(shard, hash, hashed)?;
            (partial * s) % shard.n()
        }
    };

    left_pad(&next.to_bytes_be(), shard.size())
}

/// Folds independently produced partial signatures into the final
/// signature: `S = s_1 · s_2 · … · s_k (mod N)`.
///
/// This is the brokered flow for [`SplitBy::Addition`] splits. Each party
/// calls [`sign_first`] on the hashed message with its own shard and sends
/// the result to a coordinator, which holds no shard and simply multiplies
/// the partial signatures modulo `N`. Order does not matter.
///
/// There is no brokered flow for [`SplitBy::Multiplication`]: its chain of
/// exponentiations cannot pass through a shard-less coordinator.
///
/// The coordinator is not told how many shards the key was split into;
/// passing every partial signature exactly once is the caller's
/// responsibility.
pub fn combine_partial_signatures<S: AsRef<[u8]>>(
    public_key: &RsaPublicKey,
    partial_sigs: &[S],
) -> Result<Vec<u8>> {
    if partial_sigs.len() < 2 {
        return Err(Error::TooFewPartialSignatures);
    }

    let n = public_key.n();
    let mut combined = BigUint::one();
    for partial_sig in partial_sigs {
        let partial = BigUint::from_bytes_be(partial_sig.as_ref());
        if &partial >= n {
            return Err(Error::PartialSignatureOutOfRange);
        }
        combined = (combined * partial) % n;
    }

    left_pad(&combined.to_bytes_be(), public_key.size())
}
