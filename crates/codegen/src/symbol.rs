//! # Guard Symbols
//!
//! Derives the include-guard macro name from the header's file name.
//!
//! A leading `include/` (or `include\`) path component is dropped so that
//! headers placed in a conventional include tree get guards named after
//! their project-relative path, then every `.`, `/`, and `\` becomes `_`
//! and the result is uppercased.

// ============================================================================
// Symbol derivation
// ============================================================================

/// Derive the guard macro name for a header file name.
///
/// # Example
///
/// ```rust,ignore
/// use hdrgen_codegen::guard_symbol;
///
/// assert_eq!(guard_symbol("api.h"), "API_H");
/// assert_eq!(guard_symbol("include/net/socket.h"), "NET_SOCKET_H");
/// ```
pub fn guard_symbol(name: &str) -> String {
    // Only the first path component is treated as the include root.
    let stripped = name
        .strip_prefix("include/")
        .or_else(|| name.strip_prefix("include\\"))
        .unwrap_or(name);

    let mut symbol = String::with_capacity(stripped.len());
    for c in stripped.chars() {
        match c {
            '.' | '/' | '\\' => symbol.push('_'),
            _ => symbol.push(c),
        }
    }

    symbol.to_uppercase()
}

// ============================================================================
// Tests
// ============================================================================
