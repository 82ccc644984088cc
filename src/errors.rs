use core::fmt;

/// Alias for [`core::result::Result`] with the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug)]
pub enum Error {
    InputNotHashed,
    MessageTooLong,
    MessageOutOfRange,
    PartialSignatureOutOfRange,
    InvalidModulus,
    InvalidExponent,
    InvalidPadLen,
    TooFewShards,
    TooManyShards,
    TooFewPartialSignatures,
    UnknownSplitBy,
    Internal,
    Asn1(der::Error),
    Rsa(rsa::errors::Error),
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputNotHashed => write!(f, "input must be hashed"),
            Error::MessageTooLong => write!(f, "message too long"),
            Error::MessageOutOfRange => write!(f, "encoded message out of range"),
            Error::PartialSignatureOutOfRange => write!(f, "partial signature out of range"),
            Error::InvalidModulus => write!(f, "invalid modulus"),
            Error::InvalidExponent => write!(f, "invalid public exponent"),
            Error::InvalidPadLen => write!(f, "invalid padding length"),
            Error::TooFewShards => write!(f, "cannot split a key into fewer than 2 shards"),
            Error::TooManyShards => write!(
                f,
                "cannot split a key into more than {} shards",
                crate::split::MAX_SHARDS
            ),
            Error::TooFewPartialSignatures => {
                write!(f, "need at least 2 partial signatures to combine")
            }
            Error::UnknownSplitBy => write!(f, "unrecognized split scheme tag"),
            Error::Internal => write!(f, "internal error"),
            Error::Asn1(err) => write!(f, "asn.1 error: {}", err),
            Error::Rsa(err) => write!(f, "rsa error: {}", err),
        }
    }
}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Self {
        Error::Asn1(err)
    }
}

impl From<rsa::errors::Error> for Error {
    fn from(err: rsa::errors::Error) -> Self {
        Error::Rsa(err)
    }
}

impl From<der::pem::Error> for Error {
    fn from(err: der::pem::Error) -> Self {
        Error::Asn1(der::Error::from(err))
    }
}
