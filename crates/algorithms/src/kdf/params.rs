//! Common parameter structures and traits for key derivation functions

use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Trait for algorithms with configurable parameters
pub trait ParamProvider: Sized {
    /// The parameter type associated with this algorithm
    type Params: Clone;

    /// Creates a new instance with the specified parameters
    fn with_params(params: Self::Params) -> Result<Self>;

    /// Returns the current parameters
    fn params(&self) -> &Self::Params;

    /// Updates the parameters. On error the instance keeps its previous ones.
    fn set_params(&mut self, params: Self::Params) -> Result<()>;
}

/// Default hash for the Concat KDF, the one RFC 7518 mandates for ECDH-ES
pub const DEFAULT_HASH: &str = "SHA-256";

/// Configuration of a [`ConcatKdf`](super::ConcatKdf)
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ConcatKdfParams {
    /// Hash algorithm name, resolved through the digest provider
    pub hash: String,

    /// Emit trace events for derivations (needs the `trace` feature)
    pub trace: bool,
}

impl ConcatKdfParams {
    /// Parameters for `hash` with tracing off
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            trace: false,
        }
    }

    /// Turn trace events on or off
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

impl Default for ConcatKdfParams {
    fn default() -> Self {
        Self::new(DEFAULT_HASH)
    }
}
