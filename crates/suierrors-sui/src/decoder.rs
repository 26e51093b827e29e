//! `SuiErrorDecoder` — the top-level Sui error decoder.
//!
//! Parse priority:
//! 1. Normalize the input to a string.
//! 2. Numeric code extraction — registry hit or "unknown code" result.
//! 3. Pattern matching — exact symbolic types, then the fixed rule table.
//! 4. Fallback — `unknown` category, input text as the message.
//!
//! Numeric extraction deliberately runs before symbolic matching;
//! specificity ordering lives inside the extractor (structural abort
//! frames before generic numeric catch-alls). An input carrying both a
//! symbolic token and a code-bearing shape resolves through the numeric
//! path.

use serde_json::Value;

use suierrors_core::decoder::ErrorDecoder;
use suierrors_core::registry::{ErrorCodeMap, ErrorRegistry, RegistryError, TransactionErrorMap};
use suierrors_core::types::ParsedError;

use crate::categorize::categorize;
use crate::defaults::{default_error_codes, default_transaction_errors};
use crate::extract::CodeExtractor;
use crate::normalize::normalize;
use crate::patterns::PatternMatcher;

/// Message used when nothing matched and the input normalized to nothing.
const GENERIC_UNKNOWN_MESSAGE: &str = "Unknown error occurred";

// ─── Options ──────────────────────────────────────────────────────────────────

/// Configuration for building a [`SuiErrorDecoder`].
#[derive(Debug, Clone)]
pub struct DecoderOptions {
    /// Caller-supplied code → message overrides. Custom entries win over
    /// defaults and survive every default refresh.
    pub custom_error_codes: ErrorCodeMap,
    /// Caller-supplied symbolic-type → message overrides.
    pub custom_transaction_errors: TransactionErrorMap,
    /// When `false`, the built-in default tables are excluded entirely.
    pub include_defaults: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            custom_error_codes: ErrorCodeMap::new(),
            custom_transaction_errors: TransactionErrorMap::new(),
            include_defaults: true,
        }
    }
}

// ─── SuiErrorDecoder ──────────────────────────────────────────────────────────

/// Classifies opaque Sui error values into [`ParsedError`] records.
///
/// # Usage
/// ```rust
/// use suierrors_sui::SuiErrorDecoder;
///
/// let decoder = SuiErrorDecoder::new();
/// let parsed = decoder.parse_str("MoveAbort(loc, 1000)");
/// assert_eq!(parsed.code, Some(1000));
/// ```
pub struct SuiErrorDecoder {
    registry: ErrorRegistry,
    extractor: CodeExtractor,
    matcher: PatternMatcher,
}

impl SuiErrorDecoder {
    /// A decoder with the bundled default tables and no overrides.
    pub fn new() -> Self {
        Self::with_options(DecoderOptions::default())
    }

    /// A decoder built from explicit options.
    pub fn with_options(options: DecoderOptions) -> Self {
        let registry = ErrorRegistry::new(
            default_error_codes(),
            default_transaction_errors(),
            options.custom_error_codes,
            options.custom_transaction_errors,
            options.include_defaults,
        );
        Self {
            registry,
            extractor: CodeExtractor::new(),
            matcher: PatternMatcher::new(),
        }
    }

    // ─── Parsing ──────────────────────────────────────────────────────────

    /// Classify an arbitrary error value. Never fails; unmatched input
    /// degrades to an `unknown` result. The input is preserved verbatim in
    /// the returned record.
    pub fn parse_error(&self, error: &Value) -> ParsedError {
        let text = normalize(error);

        // Numeric code first.
        if let Some(code) = self.extractor.extract(&text) {
            let category = categorize(code, &text);
            return match self.registry.code_message(code) {
                Some(message) => {
                    tracing::debug!(code, %category, "decoded known error code");
                    ParsedError {
                        code: Some(code),
                        error_type: None,
                        message: format!("Error Code {code}: {message}"),
                        is_known_error: true,
                        category,
                        original_error: error.clone(),
                    }
                }
                None => {
                    tracing::debug!(code, %category, "extracted unregistered error code");
                    ParsedError {
                        code: Some(code),
                        error_type: None,
                        message: format!("{GENERIC_UNKNOWN_MESSAGE} (code: {code})"),
                        is_known_error: false,
                        category,
                        original_error: error.clone(),
                    }
                }
            };
        }

        // Symbolic and message-shaped patterns.
        if let Some(hit) = self.matcher.find(&text, &self.registry) {
            return ParsedError {
                code: None,
                error_type: hit.error_type,
                message: hit.message,
                is_known_error: true,
                category: hit.category,
                original_error: error.clone(),
            };
        }

        // Terminal fallback.
        let message = if text.is_empty() {
            GENERIC_UNKNOWN_MESSAGE.to_string()
        } else {
            text
        };
        ParsedError::unknown(message, error.clone())
    }

    /// Classify and return only the human-readable message.
    pub fn decode_error(&self, error: &Value) -> String {
        self.parse_error(error).message
    }

    /// String-input convenience for [`Self::parse_error`].
    pub fn parse_str(&self, error: &str) -> ParsedError {
        self.parse_error(&Value::String(error.to_string()))
    }

    /// String-input convenience for [`Self::decode_error`].
    pub fn decode_str(&self, error: &str) -> String {
        self.parse_str(error).message
    }

    // ─── Registry mutation ────────────────────────────────────────────────

    /// Add custom code → message entries. Sticky across default refreshes.
    pub fn add_error_codes(&mut self, codes: ErrorCodeMap) {
        self.registry.add_codes(codes);
    }

    /// Add custom symbolic-type → message entries.
    pub fn add_transaction_errors(&mut self, types: TransactionErrorMap) {
        self.registry.add_types(types);
    }

    /// Replace the default code table; custom entries survive.
    pub fn update_default_error_codes(&mut self, defaults: ErrorCodeMap) {
        self.registry.refresh_default_codes(defaults);
    }

    /// Replace the default symbolic-type table; custom entries survive.
    pub fn update_default_transaction_errors(&mut self, defaults: TransactionErrorMap) {
        self.registry.refresh_default_types(defaults);
    }

    /// Load custom codes from a JSON object (`{"1000": "message"}`).
    pub fn add_error_codes_json(&mut self, json: &str) -> Result<usize, RegistryError> {
        self.registry.add_codes_json(json)
    }

    /// Load custom symbolic types from a JSON object.
    pub fn add_transaction_errors_json(&mut self, json: &str) -> Result<usize, RegistryError> {
        self.registry.add_types_json(json)
    }

    // ─── Registry inspection ──────────────────────────────────────────────

    /// Owned copy of the merged code table.
    pub fn get_error_codes(&self) -> ErrorCodeMap {
        self.registry.codes()
    }

    /// Owned copy of the merged symbolic-type table.
    pub fn get_transaction_errors(&self) -> TransactionErrorMap {
        self.registry.types()
    }

    /// Returns `true` if the merged table knows this numeric code.
    pub fn is_known_error_code(&self, code: u64) -> bool {
        self.registry.contains_code(code)
    }

    /// Returns `true` if the merged table knows this symbolic type.
    pub fn is_known_transaction_error(&self, error_type: &str) -> bool {
        self.registry.contains_type(error_type)
    }

    /// Message registered for a numeric code, if any.
    pub fn get_error_message(&self, code: u64) -> Option<String> {
        self.registry.code_message(code).map(str::to_string)
    }

    /// Message registered for a symbolic type, if any.
    pub fn get_transaction_error_message(&self, error_type: &str) -> Option<String> {
        self.registry.type_message(error_type).map(str::to_string)
    }

    /// Custom codes that shadow an entry of the original built-in table.
    pub fn get_overridden_codes(&self) -> Vec<u64> {
        self.registry.overridden_codes()
    }
}

impl Default for SuiErrorDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorDecoder for SuiErrorDecoder {
    fn chain_family(&self) -> &'static str {
        "sui"
    }

    fn parse(&self, error: &Value) -> ParsedError {
        self.parse_error(error)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
