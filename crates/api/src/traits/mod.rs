//! Trait definitions for the provider seam and key derivation

pub mod digest;
pub mod kdf;

pub use digest::{DigestProvider, HashPrimitive};
pub use kdf::KeyAgreementKdf;
