//! # josekdf
//!
//! The NIST SP 800-56A Concatenation KDF, as profiled by RFC 7518 §4.6 for
//! JWE ECDH-ES key agreement.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! josekdf = "0.1"
//! ```
//!
//! ```
//! use josekdf::prelude::*;
//!
//! let z = [0x11u8; 32];
//! let kdf = ConcatKdf::new("SHA-256")?;
//! let other_info = OtherInfo::jose(b"A128KW", b"Alice", b"Bob", 128)?;
//! let kek = kdf.derive_key(&z, 128, &other_info)?;
//! assert_eq!(kek.len(), 16);
//! # Ok::<(), josekdf::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `trace`: `tracing` events for derivations whose params set `trace`
//! - `serde`: Serialize and deserialize [`ConcatKdfParams`](algorithms::kdf::ConcatKdfParams)
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`josekdf-api`]: Error type and the provider and KDF traits
//! - [`josekdf-algorithms`]: The Concat KDF and the default digest provider

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use zeroize::Zeroizing;

pub use josekdf_algorithms as algorithms;
pub use josekdf_api as api;

pub use api::{Error, Result};

/// Common imports for josekdf users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{DigestProvider, HashPrimitive, KeyAgreementKdf};
    pub use crate::algorithms::kdf::ParamProvider;

    // Re-export the KDF and its inputs
    pub use crate::algorithms::hash::{DefaultDigestProvider, HashAlgorithm};
    pub use crate::algorithms::kdf::{
        key_data_len_info, length_prefixed, ConcatKdf, ConcatKdfParams, OtherInfo,
    };
}

/// One-shot Concat KDF derivation.
///
/// Resolves `hash_algorithm` with the default provider and derives
/// `ceil(key_data_len_bits / 8)` bytes from `shared_secret` and the five
/// `OtherInfo` components, which are used verbatim and in this order.
///
/// ```
/// let z = hex::decode("9e56d91d817135d372834283bf84269cfb316ea3da806a48f6daa7798cfe90c4").unwrap();
/// let key = josekdf::derive(
///     "SHA-256",
///     &z,
///     128,
///     b"\x00\x00\x00\x07A128GCM",
///     b"\x00\x00\x00\x05Alice",
///     b"\x00\x00\x00\x03Bob",
///     &[0, 0, 0, 128],
///     b"",
/// )
/// .unwrap();
/// assert_eq!(hex::encode(&*key), "56aa8deaf8236d205c2228cd71a7101a");
/// ```
#[allow(clippy::too_many_arguments)]
pub fn derive(
    hash_algorithm: &str,
    shared_secret: &[u8],
    key_data_len_bits: usize,
    algorithm_id: &[u8],
    party_u_info: &[u8],
    party_v_info: &[u8],
    supp_pub_info: &[u8],
    supp_priv_info: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    algorithms::ConcatKdf::new(hash_algorithm)?.derive_key_with_components(
        shared_secret,
        key_data_len_bits,
        algorithm_id,
        party_u_info,
        party_v_info,
        supp_pub_info,
        supp_priv_info,
    )
}
