use num_bigint::BigUint;
use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;
use zeroize::Zeroize;

use crate::errors::Error;

/// The algorithm used to split a private exponent and to combine the
/// resulting partial signatures.
///
/// Either scheme is equally suitable from a security standpoint, but they
/// are not interoperable: whichever scheme a key was split under must also
/// be used when combining partial signatures with
/// [`sign_next`](crate::sign_next).
///
/// Differences that may lead to choosing one over the other:
///
/// * [`SplitBy::Addition`] supports a brokered flow in addition to the
///   sequential one. All parties sign the hashed message independently and
///   a coordinator holding no shard folds the results with
///   [`combine_partial_signatures`](crate::combine_partial_signatures).
/// * [`SplitBy::Multiplication`] is strictly sequential. Each party signs
///   the previous party's output, so the partial signatures cannot be
///   combined by a shard-less coordinator.
///
/// The discriminants are fixed by the shard wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SplitBy {
    /// Shards satisfy `d_1 · d_2 · … · d_k ≡ d (mod φ(N))`.
    Multiplication = 0,
    /// Shards satisfy `d_1 + d_2 + … + d_k ≡ d (mod φ(N))`.
    Addition = 1,
}

impl TryFrom<u8> for SplitBy {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Error> {
        match tag {
            0 => Ok(SplitBy::Multiplication),
            1 => Ok(SplitBy::Addition),
            _ => Err(Error::UnknownSplitBy),
        }
    }
}

/// One shard of a split RSA key.
///
/// A shard holds the public key of the whole original key, its own share
/// `d_i` of the private exponent, and the scheme it was split under. It is
/// not a valid RSA private key: it carries no prime factors, and signing
/// with it yields a partial signature that does not verify on its own.
///
/// The shard exponent is zeroized on drop.
#[derive(Debug, Clone)]
pub struct SplitPrivateKey {
    /// Public part, shared by every shard of the same split.
    public_key: RsaPublicKey,
    /// Split private exponent.
    d: BigUint,
    /// The algorithm used to split the original key.
    split_by: SplitBy,
}

impl SplitPrivateKey {
    /// Constructs a shard from its parts.
    ///
    /// Mostly useful for rebuilding a shard received out of band; shards
    /// are normally created by [`split_d`](crate::split_d) or decoded with
    /// [`SplitPrivateKey::decode_pem`].
    pub fn new(public_key: RsaPublicKey, d: BigUint, split_by: SplitBy) -> SplitPrivateKey {
        SplitPrivateKey {
            public_key,
            d,
            split_by,
        }
    }

    /// Returns the public key shared by all shards of the split.
    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }

    /// Returns the shard's share of the private exponent.
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// Returns the scheme the original key was split under.
    pub fn split_by(&self) -> SplitBy {
        self.split_by
    }

    /// Returns the modulus size in bytes. Partial and final signatures for
    /// this shard's key have the same size.
    pub fn size(&self) -> usize {
        self.public_key.size()
    }

    pub(crate) fn n(&self) -> &BigUint {
        self.public_key.n()
    }
}

impl PartialEq for SplitPrivateKey {
    #[inline]
    fn eq(&self, other: &SplitPrivateKey) -> bool {
        self.public_key == other.public_key && self.d == other.d && self.split_by == other.split_by
    }
}

impl Eq for SplitPrivateKey {}

impl Zeroize for SplitPrivateKey {
    fn zeroize(&mut self) {
        self.d.zeroize();
    }
}

impl Drop for SplitPrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}
