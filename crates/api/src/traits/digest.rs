// File: crates/api/src/traits/digest.rs

//! Hash primitives and the providers that resolve them by name
//!
//! The key derivation function never hashes anything itself. It asks a
//! [`DigestProvider`] for a [`HashPrimitive`] and drives the incremental
//! `update`/`digest` protocol of that primitive.

use crate::Result;
use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use zeroize::Zeroizing;

/// A stateful, incremental hash function.
///
/// # Protocol
///
/// `update` may be called any number of times to accumulate input. `digest`
/// finalizes, returns the fixed-length output and leaves the primitive empty,
/// ready for the next message. The protocol is sequential: a single instance
/// must never be driven from two derivations at once. Use [`fresh`] to obtain
/// an independent instance instead of sharing one.
///
/// [`fresh`]: HashPrimitive::fresh
pub trait HashPrimitive: Send + Sync {
    /// Canonical name of the hash algorithm, e.g. `"SHA-256"`
    fn algorithm(&self) -> &str;

    /// Output length in bits. Always a positive multiple of 8.
    fn output_len_bits(&self) -> usize;

    /// Accumulate `data` into the running hash state
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Finalize the accumulated input, return the digest and reset the state
    fn digest(&mut self) -> Result<Zeroizing<Vec<u8>>>;

    /// Create a new, empty instance of the same algorithm
    fn fresh(&self) -> Box<dyn HashPrimitive>;

    /// Output length in bytes
    fn output_len_bytes(&self) -> usize {
        self.output_len_bits() / 8
    }
}

/// Supplier of hash primitives, looked up by algorithm name.
pub trait DigestProvider: Send + Sync {
    /// Resolve `name` to a new, empty hash primitive.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedAlgorithm`](crate::Error::UnsupportedAlgorithm)
    /// if the provider does not know the algorithm.
    fn resolve(&self, name: &str) -> Result<Box<dyn HashPrimitive>>;
}

impl<P: DigestProvider + ?Sized> DigestProvider for &P {
    fn resolve(&self, name: &str) -> Result<Box<dyn HashPrimitive>> {
        (**self).resolve(name)
    }
}

impl<P: DigestProvider + ?Sized> DigestProvider for Box<P> {
    fn resolve(&self, name: &str) -> Result<Box<dyn HashPrimitive>> {
        (**self).resolve(name)
    }
}

impl<P: DigestProvider + ?Sized> DigestProvider for Arc<P> {
    fn resolve(&self, name: &str) -> Result<Box<dyn HashPrimitive>> {
        (**self).resolve(name)
    }
}
