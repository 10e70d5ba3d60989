//! # Header Templates
//!
//! Renders the body of a generated header file.
//!
//! Two flavors are supported:
//!
//! - **Namespace**: `#pragma once` plus an include guard, with an optional
//!   empty C++ namespace block inside the guard
//! - **ExternC**: the same guard wrapping an `extern "C"` linkage block
//!   for headers shared between C and C++ translation units

use hdrgen_core::TemplateKind;

// ============================================================================
// Rendering
// ============================================================================

/// Render a header body for the given guard symbol.
///
/// The namespace is only used by templates that accept one; other
/// flavors ignore it.
pub fn generate_header(symbol: &str, namespace: Option<&str>, kind: TemplateKind) -> String {
    match kind {
        TemplateKind::Namespace => build_namespace_header(symbol, namespace),
        TemplateKind::ExternC => build_extern_c_header(symbol),
    }
}

/// Include guard with an optional empty namespace block.
fn build_namespace_header(symbol: &str, namespace: Option<&str>) -> String {
    let mut code = String::with_capacity(128);

    code.push_str("#pragma once\n\n");
    code.push_str(&format!("#ifndef {}\n", symbol));
    code.push_str(&format!("#define {} 1\n\n", symbol));

    if let Some(ns) = namespace {
        code.push_str(&format!("namespace {} ", ns));
        code.push_str("{\n\n}\n\n");
    }

    code.push_str(&format!("#endif /* !{} */\n", symbol));

    code
}

/// Include guard wrapping an `extern "C"` linkage block.
fn build_extern_c_header(symbol: &str) -> String {
    let mut code = String::with_capacity(160);

    code.push_str("#pragma once\n\n");
    code.push_str(&format!("#ifndef {}\n", symbol));
    code.push_str(&format!("#define {} 1\n\n", symbol));

    code.push_str("#ifdef __cplusplus\n");
    code.push_str("extern \"C\" {\n");
    code.push_str("#endif\n\n");

    code.push_str("#ifdef __cplusplus\n");
    code.push_str("}\n");
    code.push_str("#endif\n\n");

    code.push_str(&format!("#endif /* !{} */\n", symbol));

    code
}

// ============================================================================
// Tests
// ============================================================================
