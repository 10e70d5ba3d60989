//! # hdrgen Codegen
//!
//! Header generation engine for hdrgen.
//!
//! This crate is responsible for turning a validated [`HeaderRequest`]
//! into a ready-to-write header file.
//!
//! ## Features
//!
//! - **Guard Symbols**: include-guard macro names derived from file names
//! - **Template Rendering**: namespace and `extern "C"` header flavors
//! - **Target Resolution**: output paths resolved against an optional
//!   alternate directory
//! - **Overwrite Detection**: existing non-empty files are flagged before
//!   anything is written
//!

// ============================================================================
// Modules
// ============================================================================

pub mod generator;
pub mod symbol;
pub mod template;

// ============================================================================
// Re-exports
// ============================================================================

pub use generator::{Generator, prepare};
pub use symbol::guard_symbol;
pub use template::generate_header;

use hdrgen_core::{GenError, GenResult, TemplateKind};
use std::path::PathBuf;

// ============================================================================
// GeneratorConfig
// ============================================================================

/// Configuration for the header generator
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Whether to overwrite non-empty files without confirmation
    pub force: bool,
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow overwriting existing files without confirmation
    pub fn allow_overwrite(mut self) -> Self {
        self.force = true;
        self
    }
}

// ============================================================================
// TargetStatus
// ============================================================================

/// State of the output path before writing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    /// No file exists at the target path
    Absent,
    /// A file exists but is empty
    Empty,
    /// A file exists with content
    NonEmpty,
}

impl TargetStatus {
    /// Check if a file already exists at the target path
    pub fn exists(&self) -> bool {
        !matches!(self, TargetStatus::Absent)
    }
}

// ============================================================================
// GeneratedHeader
// ============================================================================

/// Represents a single generated header file
#[derive(Debug, Clone)]
pub struct GeneratedHeader {
    /// Path the header will be written to
    pub path: PathBuf,

    /// Include-guard macro name
    pub symbol: String,

    /// Rendered file content
    pub content: String,

    /// Template flavor used to render the content
    pub template: TemplateKind,
}

impl GeneratedHeader {
    /// Create a new generated header
    pub fn new(
        path: impl Into<PathBuf>,
        symbol: impl Into<String>,
        content: impl Into<String>,
        template: TemplateKind,
    ) -> Self {
        Self {
            path: path.into(),
            symbol: symbol.into(),
            content: content.into(),
            template,
        }
    }

    /// Inspect the file currently at the target path, if any
    pub fn target_status(&self) -> TargetStatus {
        match std::fs::metadata(&self.path) {
            Ok(meta) if meta.len() == 0 => TargetStatus::Empty,
            Ok(_) => TargetStatus::NonEmpty,
            Err(_) => TargetStatus::Absent,
        }
    }

    /// Write the header content to disk
    ///
    /// Parent directories are not created. A missing directory surfaces
    /// as a [`GenError::FileWrite`] carrying the OS error message.
    pub fn write_to_disk(&self) -> GenResult<()> {
        std::fs::write(&self.path, &self.content).map_err(|e| GenError::FileWrite {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        tracing::info!(
            path = %self.path.display(),
            symbol = %self.symbol,
            bytes = self.content.len(),
            "header written",
        );

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_config_default() {
        let config = GeneratorConfig::default();
        assert!(!config.force);
    }

    #[test]
    fn test_generator_config_builder() {
        let config = GeneratorConfig::new().allow_overwrite();
        assert!(config.force);
    }

    #[test]
    fn test_generated_header_new() {
        let header = GeneratedHeader::new(
            "api.h",
            "API_H",
            "#pragma once\n",
            TemplateKind::Namespace,
        );
        assert_eq!(header.path, PathBuf::from("api.h"));
        assert_eq!(header.symbol, "API_H");
        assert_eq!(header.template, TemplateKind::Namespace);
    }

    #[test]
    fn test_target_status_absent() {
        let dir = tempfile::tempdir().unwrap();
        let header = GeneratedHeader::new(
            dir.path().join("missing.h"),
            "MISSING_H",
            "",
            TemplateKind::Namespace,
        );
        assert_eq!(header.target_status(), TargetStatus::Absent);
        assert!(!header.target_status().exists());
    }

    #[test]
    fn test_target_status_empty_and_non_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.h");

        std::fs::write(&path, "").unwrap();
        let header = GeneratedHeader::new(&path, "API_H", "x", TemplateKind::Namespace);
        assert_eq!(header.target_status(), TargetStatus::Empty);
        assert!(header.target_status().exists());

        std::fs::write(&path, "old content").unwrap();
        assert_eq!(header.target_status(), TargetStatus::NonEmpty);
    }

    #[test]
    fn test_write_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.h");
        let header = GeneratedHeader::new(&path, "API_H", "#pragma once\n", TemplateKind::Namespace);

        header.write_to_disk().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "#pragma once\n");
    }

    #[test]
    fn test_write_to_disk_missing_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("api.h");
        let header = GeneratedHeader::new(&path, "API_H", "#pragma once\n", TemplateKind::Namespace);

        let err = header.write_to_disk().unwrap_err();
        assert!(err.is_io());
    }
}
