//! Default digest provider backed by the RustCrypto hash crates

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use digest::DynDigest;
use josekdf_api::{DigestProvider, HashPrimitive};
use zeroize::Zeroizing;

use super::HashAlgorithm;
use crate::error::Result;

/// [`HashPrimitive`] wrapping a RustCrypto hasher
pub struct RustCryptoHash {
    algorithm: HashAlgorithm,
    inner: Box<dyn DynDigest + Send + Sync>,
}

impl RustCryptoHash {
    /// Create an empty hasher for `algorithm`
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            inner: algorithm.new_digest(),
        }
    }

    /// The wrapped algorithm
    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }
}

impl fmt::Debug for RustCryptoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RustCryptoHash")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

impl HashPrimitive for RustCryptoHash {
    fn algorithm(&self) -> &str {
        self.algorithm.name()
    }

    fn output_len_bits(&self) -> usize {
        self.inner.output_size() * 8
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        self.inner.update(data);
        Ok(())
    }

    fn digest(&mut self) -> Result<Zeroizing<Vec<u8>>> {
        Ok(Zeroizing::new(self.inner.finalize_reset().into_vec()))
    }

    fn fresh(&self) -> Box<dyn HashPrimitive> {
        Box::new(Self::new(self.algorithm))
    }
}

/// Digest provider resolving the names of [`HashAlgorithm`] to RustCrypto
/// implementations. Stateless; every call to `resolve` returns a new hasher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultDigestProvider;

impl DigestProvider for DefaultDigestProvider {
    fn resolve(&self, name: &str) -> Result<Box<dyn HashPrimitive>> {
        let algorithm = HashAlgorithm::from_name(name)?;
        Ok(Box::new(RustCryptoHash::new(algorithm)))
    }
}
