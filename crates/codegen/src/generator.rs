//! # Header Generator Orchestrator
//!
//! The `Generator` is the top-level entry point for header generation. It
//! takes a [`HeaderRequest`] and a [`GeneratorConfig`], validates the
//! request, resolves the output path, and renders the template to produce
//! a [`GeneratedHeader`] ready to be written.
//!
//! ## Pipeline
//!
//! ```text
//! HeaderRequest + GeneratorConfig
//!         │
//!         ▼
//!   request.validate()
//!         │
//!         ├──► resolve_target()             → output path
//!         ├──► symbol::guard_symbol()       → guard macro name
//!         ├──► template::generate_header()  → file content
//!         │
//!         ▼
//!   GeneratedHeader { path, symbol, content }
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hdrgen_codegen::{Generator, GeneratorConfig};
//! use hdrgen_core::HeaderRequest;
//!
//! let request = HeaderRequest::new("api.h").with_namespace("net");
//! let header = Generator::with_defaults().prepare(&request)?;
//!
//! header.write_to_disk()?;
//! ```

use hdrgen_core::{GenError, GenResult, HeaderRequest, Validatable};
use std::path::PathBuf;

use crate::{GeneratedHeader, GeneratorConfig, TargetStatus, symbol, template};

// ============================================================================
// Generator
// ============================================================================

/// Top-level header generator.
///
/// The `Generator` is stateless aside from its configuration. Call
/// [`prepare`](Generator::prepare) with a request to produce a
/// [`GeneratedHeader`] holding the resolved path and rendered content.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    /// Configuration controlling overwrite behaviour.
    config: GeneratorConfig,
}

impl Generator {
    // ====================================================================
    // Construction
    // ====================================================================

    /// Create a new generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Create a generator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: GeneratorConfig) {
        self.config = config;
    }

    // ====================================================================
    // Generation
    // ====================================================================

    /// Validate a request and render it into a [`GeneratedHeader`].
    ///
    /// # Steps
    ///
    /// 1. **Validate** the request (the file name must be non-empty).
    /// 2. **Resolve** the output path against the alternate directory,
    ///    if one was given.
    /// 3. **Derive** the guard symbol from the file name as typed, so a
    ///    name like `include/net/socket.h` guards as `NET_SOCKET_H`
    ///    regardless of where the file lands.
    /// 4. **Render** the template.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty name, or a directory error
    /// if the alternate directory does not exist or is not a directory.
    /// Nothing is written to disk here.
    pub fn prepare(&self, request: &HeaderRequest) -> GenResult<GeneratedHeader> {
        request.validate()?;

        let path = self.resolve_target(request)?;
        let symbol = symbol::guard_symbol(&request.name);

        let namespace = if request.template.takes_namespace() {
            request.namespace()
        } else {
            None
        };
        let content = template::generate_header(&symbol, namespace, request.template);

        tracing::debug!(
            path = %path.display(),
            symbol = %symbol,
            template = %request.template,
            "header prepared",
        );

        Ok(GeneratedHeader::new(path, symbol, content, request.template))
    }

    /// Check whether writing this header requires user confirmation.
    ///
    /// Confirmation is needed when the target file exists with content
    /// and the configuration does not force overwrites. Empty files are
    /// overwritten silently.
    pub fn needs_confirmation(&self, header: &GeneratedHeader) -> bool {
        !self.config.force && header.target_status() == TargetStatus::NonEmpty
    }

    // ====================================================================
    // Target resolution
    // ====================================================================

    /// Resolve the output path for a request.
    ///
    /// The file name is joined onto the alternate directory when one is
    /// set, matching what changing into that directory first would do.
    /// An absolute file name wins over the directory.
    fn resolve_target(&self, request: &HeaderRequest) -> GenResult<PathBuf> {
        match request.directory() {
            Some(dir) => {
                let meta = std::fs::metadata(dir)
                    .map_err(|e| GenError::directory(dir, e.to_string()))?;
                if !meta.is_dir() {
                    return Err(GenError::directory(dir, "Not a directory"));
                }
                Ok(dir.join(&request.name))
            }
            None => Ok(PathBuf::from(&request.name)),
        }
    }
}

// ============================================================================
// Standalone convenience function
// ============================================================================

/// Prepare a header using default configuration.
///
/// This is a shorthand for `Generator::with_defaults().prepare(request)`.
pub fn prepare(request: &HeaderRequest) -> GenResult<GeneratedHeader> {
    Generator::with_defaults().prepare(request)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hdrgen_core::TemplateKind;

    // ── Generator construction ───────────────────────────────────────────

    #[test]
    fn test_generator_new() {
        let generator = Generator::new(GeneratorConfig::new().allow_overwrite());
        assert!(generator.config().force);
    }

    #[test]
    fn test_generator_with_defaults() {
        let generator = Generator::with_defaults();
        assert!(!generator.config().force);
    }

    #[test]
    fn test_generator_set_config() {
        let mut generator = Generator::with_defaults();
        generator.set_config(GeneratorConfig::new().allow_overwrite());
        assert!(generator.config().force);
    }

    // ── Preparation ──────────────────────────────────────────────────────

    #[test]
    fn test_prepare_plain_name() {
        let request = HeaderRequest::new("api.h");
        let header = Generator::with_defaults().prepare(&request).unwrap();

        assert_eq!(header.path, PathBuf::from("api.h"));
        assert_eq!(header.symbol, "API_H");
        assert!(header.content.contains("#ifndef API_H\n"));
        assert!(!header.content.contains("namespace"));
    }

    #[test]
    fn test_prepare_with_namespace() {
        let request = HeaderRequest::new("socket.h").with_namespace("net");
        let header = Generator::with_defaults().prepare(&request).unwrap();

        assert!(header.content.contains("namespace net {"));
    }

    #[test]
    fn test_prepare_extern_c_drops_namespace() {
        let request = HeaderRequest::new("socket.h")
            .with_namespace("net")
            .with_template(TemplateKind::ExternC);
        let header = Generator::with_defaults().prepare(&request).unwrap();

        assert!(header.content.contains("extern \"C\""));
        assert!(!header.content.contains("namespace"));
    }

    #[test]
    fn test_prepare_empty_name_fails() {
        let request = HeaderRequest::new("  ");
        let err = Generator::with_defaults().prepare(&request).unwrap_err();
        assert!(err.is_validation());
    }

    // ── Target resolution ────────────────────────────────────────────────

    #[test]
    fn test_prepare_with_directory() {
        let dir = tempfile::tempdir().unwrap();
        let request = HeaderRequest::new("api.h").with_directory(dir.path());
        let header = Generator::with_defaults().prepare(&request).unwrap();

        assert_eq!(header.path, dir.path().join("api.h"));
        // Symbol comes from the name alone, not the resolved path.
        assert_eq!(header.symbol, "API_H");
    }

    #[test]
    fn test_prepare_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no_such_dir");
        let request = HeaderRequest::new("api.h").with_directory(&missing);

        let err = Generator::with_defaults().prepare(&request).unwrap_err();
        assert!(err.is_directory());
    }

    #[test]
    fn test_prepare_directory_is_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();
        let request = HeaderRequest::new("api.h").with_directory(&file);

        let err = Generator::with_defaults().prepare(&request).unwrap_err();
        assert!(err.is_directory());
        assert!(err.to_string().contains("Not a directory"));
    }

    #[test]
    fn test_prepare_absolute_name_wins_over_directory() {
        let dir = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();
        let absolute = other.path().join("abs.h");
        let request =
            HeaderRequest::new(absolute.to_string_lossy()).with_directory(dir.path());

        let header = Generator::with_defaults().prepare(&request).unwrap();
        assert_eq!(header.path, absolute);
    }

    // ── Overwrite confirmation ───────────────────────────────────────────

    #[test]
    fn test_needs_confirmation_for_non_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.h");
        std::fs::write(&path, "existing").unwrap();

        let header = GeneratedHeader::new(&path, "API_H", "new", TemplateKind::Namespace);
        assert!(Generator::with_defaults().needs_confirmation(&header));
    }

    #[test]
    fn test_no_confirmation_for_absent_or_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let generator = Generator::with_defaults();

        let absent = GeneratedHeader::new(
            dir.path().join("missing.h"),
            "MISSING_H",
            "new",
            TemplateKind::Namespace,
        );
        assert!(!generator.needs_confirmation(&absent));

        let empty_path = dir.path().join("empty.h");
        std::fs::write(&empty_path, "").unwrap();
        let empty = GeneratedHeader::new(&empty_path, "EMPTY_H", "new", TemplateKind::Namespace);
        assert!(!generator.needs_confirmation(&empty));
    }

    #[test]
    fn test_force_skips_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.h");
        std::fs::write(&path, "existing").unwrap();

        let generator = Generator::new(GeneratorConfig::new().allow_overwrite());
        let header = GeneratedHeader::new(&path, "API_H", "new", TemplateKind::Namespace);
        assert!(!generator.needs_confirmation(&header));
    }

    // ── Standalone function ──────────────────────────────────────────────

    #[test]
    fn test_standalone_prepare() {
        let request = HeaderRequest::new("widget.h");
        let header = prepare(&request).unwrap();
        assert_eq!(header.symbol, "WIDGET_H");
    }
}
