//! The `ErrorDecoder` trait — implemented by each chain-specific crate.

use crate::types::ParsedError;
use serde_json::Value;

/// A chain-specific error decoder.
///
/// Implementations classify an arbitrary error value into a [`ParsedError`]
/// and never fail: malformed, null, or non-string input degrades to an
/// `unknown` classification rather than an `Err`. Implementations must be
/// `Send + Sync` for use behind shared references.
pub trait ErrorDecoder: Send + Sync {
    /// Returns the chain family name this decoder handles (e.g. `"sui"`).
    fn chain_family(&self) -> &'static str;

    /// Classify an arbitrary error value.
    ///
    /// The input is preserved verbatim in `ParsedError::original_error`
    /// regardless of the match outcome.
    fn parse(&self, error: &Value) -> ParsedError;

    /// Convenience: classify and return only the human-readable message.
    fn decode(&self, error: &Value) -> String {
        self.parse(error).message
    }
}
