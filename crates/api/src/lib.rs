//! Public API traits and types for the josekdf library
//!
//! This crate provides the public API surface shared by the josekdf crates:
//! the error taxonomy and the traits at the seam between the key derivation
//! function and the cryptography provider that supplies hash primitives.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{DigestProvider, HashPrimitive, KeyAgreementKdf};
