//! Concatenation KDF for JOSE key agreement
//!
//! This crate implements the single-step key derivation function of
//! NIST SP 800-56A (the "Concat KDF") that RFC 7518 uses to turn an ECDH-ES
//! shared secret into a content encryption or key wrapping key.
//! The library is designed to be usable in both `std` and `no_std` environments.
//!
//! # Security Features
//!
//! - Derived key material is returned in `Zeroizing` buffers
//! - Intermediate hash blocks and assembled `OtherInfo` strings are wiped
//! - Optional trace events carry lengths and counters only, never key bytes

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function bindings
pub mod hash;
pub use hash::{DefaultDigestProvider, HashAlgorithm, RustCryptoHash};

// KDF implementations
pub mod kdf;
pub use kdf::{ConcatKdf, ConcatKdfOperation, ConcatKdfParams, OtherInfo, ParamProvider};
