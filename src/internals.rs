use alloc::vec;
use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::{Error, Result};
use crate::key::SplitPrivateKey;

/// Raw signing primitive for a key shard: a single modular exponentiation
/// of `m` by the shard exponent.
///
/// This is intentionally less than a stock RSA signing operation. A shard
/// carries no prime factors, so there is no CRT path, and `d_i` is not an
/// inverse of `e` modulo `φ(N)`, so neither the `d·e ≡ 1` consistency check
/// nor `r^e`-style blinding is applicable: blinding by `r^e` would unblind
/// to `m^{d_i}·r^{d_i·e}` rather than `m^{d_i}`.
pub(crate) fn shard_exp(shard: &SplitPrivateKey, m: &BigUint) -> Result<BigUint> {
    if shard.n().is_zero() {
        return Err(Error::InvalidModulus);
    }
    if m >= shard.n() {
        return Err(Error::MessageOutOfRange);
    }

    Ok(m.modpow(shard.d(), shard.n()))
}

/// Returns a new vector of the given length, with 0s left padded.
#[inline]
pub(crate) fn left_pad(input: &[u8], padded_len: usize) -> Result<Vec<u8>> {
    if input.len() > padded_len {
        return Err(Error::InvalidPadLen);
    }

    let mut out = vec![0u8; padded_len];
    out[padded_len - input.len()..].copy_from_slice(input);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_pad() {
        const INPUT_LEN: usize = 3;
        let input = vec![0u8; INPUT_LEN];

        // input len < padded len
        let padded = left_pad(&input, INPUT_LEN + 1).unwrap();
        assert_eq!(padded.len(), INPUT_LEN + 1);

        // input len == padded len
        let padded = left_pad(&input, INPUT_LEN).unwrap();
        assert_eq!(padded.len(), INPUT_LEN);

        // input len > padded len
        let padded = left_pad(&input, INPUT_LEN - 1);
        assert!(padded.is_err());
    }
}
