//! Helpers for turning tera errors into readable messages.

use std::error::Error;

/// Flatten a tera error and its sources into one line.
///
/// tera's top-level message is usually just "Failed to render 'x'"; the
/// useful part lives in the source chain.
pub(super) fn describe(err: &tera::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(inner) = source {
        parts.push(inner.to_string());
        source = inner.source();
    }
    parts.join(": ")
}

/// Extract the variable name from a tera "Variable `X` not found" message.
pub(super) fn undefined_variable(detail: &str) -> Option<String> {
    const MARKER: &str = "Variable `";

    let start = detail.find(MARKER)? + MARKER.len();
    let rest = &detail[start..];
    let end = rest.find('`')?;
    if !rest[end..].starts_with("` not found") {
        return None;
    }
    Some(rest[..end].to_string())
}
