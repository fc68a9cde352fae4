//! Error handling for the algorithm implementations
//!
//! The algorithms share the error taxonomy of the API crate so that a caller
//! sees one error type whichever layer rejected the input.

pub use josekdf_api::error::{validate, Error, Result};
