//! suierrors-core — foundation types and traits for the SuiErrors library.
//!
//! This crate defines:
//! - [`ErrorCategory`] — the four-way taxonomy of Sui error classifications
//! - [`ParsedError`] — the output of a classification
//! - [`ErrorRegistry`] — layered default + custom lookup tables
//! - [`ErrorDecoder`] — the decoder trait every chain implements

pub mod decoder;
pub mod registry;
pub mod types;

pub use decoder::ErrorDecoder;
pub use registry::{ErrorCodeMap, ErrorRegistry, RegistryError, TransactionErrorMap};
pub use types::{ErrorCategory, ParsedError};
