//! Core types used throughout hdrgen
//!
//! This module contains the fundamental types that describe a single
//! header-generation request, shared by the codegen and CLI layers.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{GenError, GenResult};
use crate::traits::Validatable;

// ============================================================================
// Template Kinds
// ============================================================================

/// Header template flavors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateKind {
    /// Include guard with an optional C++ namespace block
    #[default]
    Namespace,
    /// Include guard with an `extern "C"` linkage block
    ExternC,
}

impl TemplateKind {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateKind::Namespace => "namespace",
            TemplateKind::ExternC => "extern-c",
        }
    }

    /// Check if this template accepts a namespace name
    pub fn takes_namespace(&self) -> bool {
        matches!(self, TemplateKind::Namespace)
    }

    /// Get all template kinds
    pub fn all() -> &'static [TemplateKind] {
        &[TemplateKind::Namespace, TemplateKind::ExternC]
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for TemplateKind {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "namespace" => Ok(TemplateKind::Namespace),
            "extern-c" | "extern_c" | "externc" => Ok(TemplateKind::ExternC),
            other => Err(GenError::validation(format!(
                "Unknown template '{}', expected one of: namespace, extern-c",
                other
            ))),
        }
    }
}

// ============================================================================
// Header Requests
// ============================================================================

/// Everything needed to generate one header file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderRequest {
    /// File name as given by the user, possibly with path components
    pub name: String,
    /// Directory to resolve the file name against instead of the
    /// current working directory
    pub directory: Option<PathBuf>,
    /// C++ namespace to open inside the guard, if any
    pub namespace: Option<String>,
    /// Template flavor to render
    pub template: TemplateKind,
}

impl HeaderRequest {
    /// Create a request for the given file name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the output directory
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Set the namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the template flavor
    pub fn with_template(mut self, template: TemplateKind) -> Self {
        self.template = template;
        self
    }

    /// The namespace, treating empty and whitespace-only values as absent
    pub fn namespace(&self) -> Option<&str> {
        self.namespace
            .as_deref()
            .map(str::trim)
            .filter(|ns| !ns.is_empty())
    }

    /// The directory override, if one was given
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }
}

impl Validatable for HeaderRequest {
    fn validate(&self) -> GenResult<()> {
        if self.name.trim().is_empty() {
            return Err(GenError::validation("File name must not be empty"));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
