//! Error type definitions for key derivation

use alloc::borrow::Cow;

/// Primary error type for key derivation operations
///
/// Every failure is deterministic: the same inputs always produce the same
/// error, so none of these are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested hash algorithm is not available from the provider
    UnsupportedAlgorithm {
        /// Name the caller asked for
        algorithm: Cow<'static, str>,
    },

    /// Malformed input, rejected before any hashing happens
    InvalidParameter {
        /// Which input was rejected
        context: &'static str,
        /// Why it was rejected
        message: Cow<'static, str>,
    },

    /// The requested output needs more hash repetitions than the
    /// 32-bit counter can address
    DerivationRange {
        /// What exceeded its range
        context: &'static str,
        /// The value that was requested
        requested: u64,
        /// The largest value that is supported
        max: u64,
    },

    /// A hash primitive returned by a digest provider failed
    Provider {
        /// Operation that failed
        context: &'static str,
        /// Details reported by the provider
        message: Cow<'static, str>,
    },
}

/// Result type for key derivation operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `UnsupportedAlgorithm` error
    pub fn unsupported<A: Into<Cow<'static, str>>>(algorithm: A) -> Self {
        Error::UnsupportedAlgorithm {
            algorithm: algorithm.into(),
        }
    }

    /// Shorthand to create an `InvalidParameter` error
    pub fn param<M: Into<Cow<'static, str>>>(context: &'static str, message: M) -> Self {
        Error::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a `Provider` error
    pub fn provider<M: Into<Cow<'static, str>>>(context: &'static str, message: M) -> Self {
        Error::Provider {
            context,
            message: message.into(),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedAlgorithm { algorithm } => {
                write!(f, "Unsupported hash algorithm: {}", algorithm)
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter '{}': {}", context, message)
            }
            Self::DerivationRange {
                context,
                requested,
                max,
            } => {
                write!(f, "{}: {} exceeds the maximum of {}", context, requested, max)
            }
            Self::Provider { context, message } => {
                write!(f, "Digest provider error in {}: {}", context, message)
            }
        }
    }
}
