//! suierrors-sui — Sui execution error decoder.
//!
//! Turns opaque, free-form error values from the Sui execution environment
//! (Move aborts, transaction failures, protocol rejections) into structured
//! [`ParsedError`](suierrors_core::ParsedError) classifications.
//!
//! # Quick Start
//!
//! ```rust
//! use suierrors_sui::SuiErrorDecoder;
//!
//! let decoder = SuiErrorDecoder::new();
//! let parsed = decoder.parse_str(
//!     "MoveAbort(MoveLocation { module: 0x2::coin, function: 6 }, 1000) in command 0",
//! );
//! assert_eq!(parsed.code, Some(1000));
//! assert!(parsed.is_known_error);
//! println!("{}", parsed.message); // "Error Code 1000: Insufficient balance ..."
//! ```

pub mod categorize;
pub mod decoder;
pub mod defaults;
pub mod extract;
pub mod normalize;
pub mod patterns;

pub use decoder::{DecoderOptions, SuiErrorDecoder};

use std::sync::OnceLock;

use serde_json::Value;
use suierrors_core::{ErrorCodeMap, TransactionErrorMap};

/// The process-wide default-configured decoder, built on first use.
static DEFAULT_DECODER: OnceLock<SuiErrorDecoder> = OnceLock::new();

fn default_decoder() -> &'static SuiErrorDecoder {
    DEFAULT_DECODER.get_or_init(SuiErrorDecoder::new)
}

/// One-shot decode to a human-readable message.
///
/// Reuses the shared default decoder when no overrides are supplied;
/// builds a transient decoder otherwise.
pub fn decode(
    error: &Value,
    custom_codes: Option<ErrorCodeMap>,
    custom_transaction_errors: Option<TransactionErrorMap>,
) -> String {
    match (custom_codes, custom_transaction_errors) {
        (None, None) => default_decoder().decode_error(error),
        (codes, types) => {
            let decoder = SuiErrorDecoder::with_options(DecoderOptions {
                custom_error_codes: codes.unwrap_or_default(),
                custom_transaction_errors: types.unwrap_or_default(),
                include_defaults: true,
            });
            decoder.decode_error(error)
        }
    }
}

/// One-shot decode of a plain string input.
pub fn decode_str(error: &str) -> String {
    default_decoder().decode_str(error)
}
