// File: crates/api/src/traits/kdf.rs

//! Trait for key derivation functions used after a key agreement

use crate::Result;
use alloc::vec::Vec;
use zeroize::Zeroizing;

/// A key derivation function that turns an agreed shared secret and its
/// context binding data into symmetric key material.
///
/// This is the seam an ECDH-ES style key agreement component depends on.
/// The `other_info` argument is the already assembled context string; how it
/// is laid out is a matter for the caller and the concrete KDF.
pub trait KeyAgreementKdf {
    /// Name of the KDF and its hash, e.g. `"ConcatKDF-SHA-256"`
    fn algorithm_name(&self) -> &str;

    /// Derive `ceil(key_data_len_bits / 8)` bytes of key material
    fn derive(
        &self,
        shared_secret: &[u8],
        key_data_len_bits: usize,
        other_info: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>>;
}
