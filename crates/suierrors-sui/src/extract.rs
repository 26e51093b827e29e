//! Extract a numeric error code from a normalized error string.
//!
//! Patterns are tried in order, strictly most-specific first: structural
//! Move abort frames, then explicit code fields, then protocol wrapper
//! shapes, then generic numeric catch-alls. A generic catch-all must never
//! pick up an unrelated number ahead of a real structured code.

use regex::Regex;

/// Ordered code-shaped patterns. Each captures an optionally-signed
/// integer; captures that do not parse as `u64` are skipped.
const CODE_PATTERNS: &[&str] = &[
    // Structural Move abort frame with a trailing code:
    // `MoveAbort(MoveLocation { ... }, 1001)`
    r"MoveAbort\(.*?,\s*(-?\d+)\s*\)",
    // Explicit code fields.
    r"abort_code[:\s]+(-?\d+)",
    r"error_code[:\s]+(-?\d+)",
    // Protocol wrapper shapes.
    r"ExecutionError\s*\(\s*(-?\d+)\s*\)",
    r"SuiError\s*\(\s*(-?\d+)\s*\)",
    // Generic catch-alls, last.
    r"(?i)error code[:\s]+(-?\d+)",
    r"(?i)\bcode[:\s]+(-?\d+)",
    r"(?i)\berror[:\s]+(-?\d+)",
];

/// Applies the ordered code-shaped pattern list to normalized error text.
pub struct CodeExtractor {
    patterns: Vec<Regex>,
}

impl CodeExtractor {
    pub fn new() -> Self {
        let patterns = CODE_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("invalid code pattern"))
            .collect();
        Self { patterns }
    }

    /// Returns the first captured integer that parses as a non-negative
    /// integer, or `None`. Negative captures are rejected, not normalized.
    pub fn extract(&self, text: &str) -> Option<u64> {
        for pattern in &self.patterns {
            if let Some(caps) = pattern.captures(text) {
                if let Some(m) = caps.get(1) {
                    if let Ok(code) = m.as_str().parse::<u64>() {
                        tracing::trace!(code, pattern = pattern.as_str(), "extracted error code");
                        return Some(code);
                    }
                }
            }
        }
        None
    }
}

impl Default for CodeExtractor {
    fn default() -> Self {
        Self::new()
    }
}
