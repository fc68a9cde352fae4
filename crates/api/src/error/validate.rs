//! Validation utilities for key derivation inputs

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate that a byte string is not empty
#[inline(always)]
pub fn non_empty(context: &'static str, data: &[u8]) -> Result<()> {
    parameter(!data.is_empty(), context, "must not be empty")
}

/// Validate that a length or count is positive
#[inline(always)]
pub fn non_zero(context: &'static str, value: usize) -> Result<()> {
    parameter(value != 0, context, "must be greater than zero")
}

/// Validate that a derivation quantity stays within its addressable range
#[inline(always)]
pub fn max_value(context: &'static str, requested: u64, max: u64) -> Result<()> {
    if requested > max {
        return Err(Error::DerivationRange {
            context,
            requested,
            max,
        });
    }
    Ok(())
}
