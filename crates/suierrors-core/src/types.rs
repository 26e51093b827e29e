//! Core types for the SuiErrors classification taxonomy.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// ─── Category ─────────────────────────────────────────────────────────────────

/// The coarse classification of a decoded Sui error.
///
/// These four categories are the entire output space: every parse lands in
/// exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// A Move runtime abort carrying a numeric code.
    MoveAbort,
    /// A submission/processing-level failure, often symbolic.
    Transaction,
    /// A platform/runtime infrastructure failure.
    SuiSystem,
    /// Nothing matched.
    Unknown,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MoveAbort => "move_abort",
            Self::Transaction => "transaction",
            Self::SuiSystem => "sui_system",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

// ─── ParsedError ──────────────────────────────────────────────────────────────

/// The result of classifying an opaque Sui error value.
///
/// Created fresh per parse; the caller owns it exclusively. `original_error`
/// always preserves the input verbatim for caller-side logging, regardless
/// of the match outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedError {
    /// Numeric error code, if one was extracted from the input.
    pub code: Option<u64>,

    /// Symbolic error type (e.g. `"INSUFFICIENT_GAS"`), if one matched.
    pub error_type: Option<String>,

    /// Human-readable message for the error.
    pub message: String,

    /// `true` iff this record came from a registry hit or a fixed pattern
    /// rule, never from the terminal fallback.
    pub is_known_error: bool,

    /// Coarse classification.
    pub category: ErrorCategory,

    /// The original input value, unchanged.
    pub original_error: Value,
}

impl ParsedError {
    /// Terminal-fallback constructor: nothing matched.
    pub fn unknown(message: String, original_error: Value) -> Self {
        Self {
            code: None,
            error_type: None,
            message,
            is_known_error: false,
            category: ErrorCategory::Unknown,
            original_error,
        }
    }

    /// Returns `true` if this error carries a numeric Move abort code.
    pub fn has_code(&self) -> bool {
        self.code.is_some()
    }
}

impl fmt::Display for ParsedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
