//! Key derivation functions for key agreement
//!
//! [`ConcatKdf`] is the NIST SP 800-56A single-step KDF used by JWE ECDH-ES.
//! Configuration goes through [`ParamProvider`] and [`ConcatKdfParams`].

pub mod concat;
pub mod params;

pub use concat::{
    key_data_len_info, length_prefixed, ConcatKdf, ConcatKdfOperation, OtherInfo,
};
pub use params::{ConcatKdfParams, ParamProvider};
