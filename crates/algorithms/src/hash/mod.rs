//! Hash function bindings
//!
//! The key derivation function reaches hash functions only through the
//! [`DigestProvider`](josekdf_api::DigestProvider) seam. This module supplies
//! the default provider, backed by the RustCrypto `sha1` and `sha2` crates,
//! and the [`HashAlgorithm`] identifiers it understands.

use alloc::boxed::Box;
use core::fmt;
use core::str::FromStr;

use digest::DynDigest;

use crate::error::{Error, Result};

pub mod provider;

pub use provider::{DefaultDigestProvider, RustCryptoHash};

/// Hash algorithms available from the [`DefaultDigestProvider`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-1 (FIPS 180-4), 160-bit output
    Sha1,
    /// SHA-224 (FIPS 180-4)
    Sha224,
    /// SHA-256 (FIPS 180-4)
    Sha256,
    /// SHA-384 (FIPS 180-4)
    Sha384,
    /// SHA-512 (FIPS 180-4)
    Sha512,
    /// SHA-512/224 (FIPS 180-4)
    Sha512_224,
    /// SHA-512/256 (FIPS 180-4)
    Sha512_256,
}

impl HashAlgorithm {
    /// Every supported algorithm
    pub const ALL: [HashAlgorithm; 7] = [
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha512_224,
        HashAlgorithm::Sha512_256,
    ];

    /// Canonical name, as used by JCA and most JOSE libraries
    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha224 => "SHA-224",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Sha512_224 => "SHA-512/224",
            HashAlgorithm::Sha512_256 => "SHA-512/256",
        }
    }

    /// Output size in bytes
    pub const fn output_size(self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha224 | HashAlgorithm::Sha512_224 => 28,
            HashAlgorithm::Sha256 | HashAlgorithm::Sha512_256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Output size in bits
    pub const fn output_bits(self) -> usize {
        self.output_size() * 8
    }

    /// Look up an algorithm by name.
    ///
    /// Matching ignores ASCII case, and the separator after `SHA` may be
    /// `-`, `_` or absent, so `"SHA-256"`, `"sha256"` and `"SHA_256"` all
    /// resolve to [`HashAlgorithm::Sha256`]. Separators anywhere else are
    /// not accepted.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| name_matches(name, alg.name()))
            .ok_or_else(|| Error::unsupported(alloc::string::String::from(name)))
    }

    pub(crate) fn new_digest(self) -> Box<dyn DynDigest + Send + Sync> {
        match self {
            HashAlgorithm::Sha1 => Box::new(sha1::Sha1::default()),
            HashAlgorithm::Sha224 => Box::new(sha2::Sha224::default()),
            HashAlgorithm::Sha256 => Box::new(sha2::Sha256::default()),
            HashAlgorithm::Sha384 => Box::new(sha2::Sha384::default()),
            HashAlgorithm::Sha512 => Box::new(sha2::Sha512::default()),
            HashAlgorithm::Sha512_224 => Box::new(sha2::Sha512_224::default()),
            HashAlgorithm::Sha512_256 => Box::new(sha2::Sha512_256::default()),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

// "SHA", at most one '-' or '_', then the canonical suffix; ASCII case ignored
fn name_matches(input: &str, canonical: &str) -> bool {
    let (Some(family), Some(suffix)) = (input.get(..3), canonical.strip_prefix("SHA-")) else {
        return false;
    };
    if !family.eq_ignore_ascii_case("SHA") {
        return false;
    }
    let rest = &input[3..];
    let rest = rest.strip_prefix(|c| c == '-' || c == '_').unwrap_or(rest);
    rest.eq_ignore_ascii_case(suffix)
}
