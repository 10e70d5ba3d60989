//! # hdrgen Core
//!
//! Core types, traits, and error handling for hdrgen.
//!
//! This crate provides the foundational building blocks used throughout
//! the hdrgen crates, including:
//!
//! - **Types**: `HeaderRequest` and the `TemplateKind` flavors
//! - **Traits**: Common behaviors like `Validatable`
//! - **Errors**: Unified error handling with `GenError` and `GenResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{GenError, GenResult};
pub use traits::Validatable;
pub use types::{HeaderRequest, TemplateKind};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
