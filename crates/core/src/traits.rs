//! Core traits for hdrgen
//!
//! This module defines the traits that request types implement to
//! provide consistent validation behavior before code generation runs.

use crate::error::GenResult;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use hdrgen_core::{Validatable, GenResult, GenError};
///
/// struct Request {
///     name: String,
/// }
///
/// impl Validatable for Request {
///     fn validate(&self) -> GenResult<()> {
///         if self.name.is_empty() {
///             return Err(GenError::validation("Name cannot be empty"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `GenError` describing the problem.
    fn validate(&self) -> GenResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ============================================================================
// Tests
// ============================================================================
