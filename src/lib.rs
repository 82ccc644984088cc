//! Multi-party RSA signatures under PKCS#1 v1.5.
//!
//! An ordinary RSA private key is split by a trusted dealer into `k`
//! shards, the shards are distributed to independent signers, and the
//! signers cooperatively produce a signature that verifies like any other
//! PKCS#1 v1.5 signature under the original public key. The shards are
//! never reassembled, and no single shard produces a verifying signature.
//!
//! Key generation stays with a standard RSA implementation: [`split_d`]
//! consumes an [`rsa::RsaPrivateKey`], including multi-prime keys.
//!
//! # Splitting and signing
//!
//! ```
//! use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
//! use rsa_keysplitting::{sign_first, sign_next, split_d, Hashes, SplitBy};
//! use sha2::{Digest, Sha512};
//!
//! let mut rng = ChaCha8Rng::from_seed([42; 32]);
//!
//! // The dealer generates an ordinary RSA key and splits it in two. It
//! // then distributes the shards over a secure channel, destroying each
//! // one as it is sent (or keeps one, if the dealer is itself a signer).
//! let key = rsa::RsaPrivateKey::new(&mut rng, 2048)?;
//! let shards = split_d(&mut rng, &key, 2, SplitBy::Addition)?;
//!
//! // At signing time each party signs with its own shard.
//! let hashed = Sha512::digest(b"TEST MESSAGE").to_vec();
//! let partial = sign_first(Some(&mut rng), &shards[0], Some(&Hashes::SHA2_512), &hashed)?;
//! let sig = sign_next(
//!     Some(&mut rng),
//!     &shards[1],
//!     Some(&Hashes::SHA2_512),
//!     &hashed,
//!     SplitBy::Addition,
//!     &partial,
//! )?;
//!
//! // The combined result is a plain PKCS#1 v1.5 signature.
//! let public_key = key.to_public_key();
//! public_key.verify(rsa::Pkcs1v15Sign::new::<Sha512>(), &hashed, &sig)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # The additive vs. multiplicative split schemes
//!
//! [`split_d`] offers two algorithms, selected by [`SplitBy`]. Under
//! [`SplitBy::Addition`] the shard exponents sum to the private exponent
//! modulo `φ(N)`; under [`SplitBy::Multiplication`] their product does.
//! Both are equally secure. They differ operationally:
//!
//! * The additive scheme commutes. Parties may chain [`sign_next`] in any
//!   order, or all sign at once with [`sign_first`] and hand the results to
//!   a broker holding no shard, which folds them with
//!   [`combine_partial_signatures`].
//! * The multiplicative scheme is strictly sequential. Each party raises
//!   the previous party's output to its own shard exponent, so there is no
//!   brokered flow.
//!
//! Shards remember their scheme, and [`SplitPrivateKey::encode_pem`]
//! persists it, so a shard cannot silently be combined under the wrong
//! scheme after a round trip through storage.
//!
//! # Timing
//!
//! Shard exponentiation runs unblinded. Standard RSA blinding multiplies
//! the input by `r^e` and relies on `d·e ≡ 1 (mod φ(N))` to strip the
//! factor afterwards, which no shard satisfies. Deployments that need
//! hardening against a local timing observer must arrange masking at the
//! protocol level.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod errors;
pub mod hash;

mod encoding;
mod internals;
mod key;
mod math;
mod pkcs1v15;
mod split;

pub use crate::errors::{Error, Result};
pub use crate::hash::{Hash, Hashes};
pub use crate::key::{SplitBy, SplitPrivateKey};
pub use crate::pkcs1v15::{combine_partial_signatures, sign_first, sign_next};
pub use crate::split::{split_d, MAX_SHARDS};

pub use num_bigint::BigUint;
pub use rand_core;
pub use rsa;
pub use rsa::{RsaPrivateKey, RsaPublicKey};
