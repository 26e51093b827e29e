//! Layered error registry — merged default + custom lookup tables.
//!
//! The registry holds two mappings (numeric code → message and symbolic
//! type → message), each modeled as two explicit layers:
//!
//! - a **default** layer, replaceable wholesale via `refresh_*`;
//! - a **custom** layer, written only by the caller and sticky across
//!   every default refresh.
//!
//! The merged view is recomputed on every mutation as
//! `defaults ⊕ custom` (right-biased union, custom wins on collision).

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

/// Mapping from numeric error code to message.
pub type ErrorCodeMap = BTreeMap<u64, String>;

/// Mapping from symbolic error type (e.g. `"INSUFFICIENT_GAS"`) to message.
pub type TransactionErrorMap = BTreeMap<String, String>;

/// Errors raised when loading registry tables from JSON.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid registry JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("registry JSON must be an object of key → message pairs")]
    NotAnObject,

    #[error("invalid error code key {key:?}: expected a non-negative integer")]
    InvalidCodeKey { key: String },

    #[error("message for key {key:?} must be a string")]
    NonStringMessage { key: String },
}

// ─── ErrorRegistry ────────────────────────────────────────────────────────────

/// Merged default + custom lookup tables for codes and symbolic types.
///
/// Constructed once per decoder instance and mutated only through explicit
/// add/refresh calls, never during a parse. Mutators take `&mut self`;
/// callers needing concurrent writers must serialize access externally.
#[derive(Debug, Clone)]
pub struct ErrorRegistry {
    default_codes: ErrorCodeMap,
    custom_codes: ErrorCodeMap,
    merged_codes: ErrorCodeMap,

    default_types: TransactionErrorMap,
    custom_types: TransactionErrorMap,
    merged_types: TransactionErrorMap,

    /// Keys of the original built-in code table, kept for shadowing
    /// diagnostics. Empty when built-ins were excluded at construction.
    builtin_code_keys: BTreeSet<u64>,
}

impl ErrorRegistry {
    /// Build a registry from built-in default tables and caller overrides.
    ///
    /// With `include_defaults == false` the built-in tables are excluded
    /// entirely and the merged views equal the custom tables exactly.
    pub fn new(
        builtin_codes: ErrorCodeMap,
        builtin_types: TransactionErrorMap,
        custom_codes: ErrorCodeMap,
        custom_types: TransactionErrorMap,
        include_defaults: bool,
    ) -> Self {
        let (default_codes, default_types, builtin_code_keys) = if include_defaults {
            let keys = builtin_codes.keys().copied().collect();
            (builtin_codes, builtin_types, keys)
        } else {
            (BTreeMap::new(), BTreeMap::new(), BTreeSet::new())
        };

        let mut reg = Self {
            default_codes,
            custom_codes,
            merged_codes: BTreeMap::new(),
            default_types,
            custom_types,
            merged_types: BTreeMap::new(),
            builtin_code_keys,
        };
        reg.rebuild_merged();
        reg
    }

    /// An empty registry with no defaults and no customs.
    pub fn empty() -> Self {
        Self::new(
            BTreeMap::new(),
            BTreeMap::new(),
            BTreeMap::new(),
            BTreeMap::new(),
            false,
        )
    }

    fn rebuild_merged(&mut self) {
        let mut codes = self.default_codes.clone();
        codes.extend(self.custom_codes.clone());
        self.merged_codes = codes;

        let mut types = self.default_types.clone();
        types.extend(self.custom_types.clone());
        self.merged_types = types;
    }

    // ─── Mutation ─────────────────────────────────────────────────────────

    /// Right-biased union of `codes` into the custom and merged tables.
    /// Custom entries are sticky across future default refreshes.
    pub fn add_codes(&mut self, codes: ErrorCodeMap) {
        self.custom_codes.extend(codes.clone());
        self.merged_codes.extend(codes);
    }

    /// Right-biased union of `types` into the custom and merged tables.
    pub fn add_types(&mut self, types: TransactionErrorMap) {
        self.custom_types.extend(types.clone());
        self.merged_types.extend(types);
    }

    /// Replace the default code table. The previous default table is
    /// discarded; custom entries survive unconditionally.
    pub fn refresh_default_codes(&mut self, defaults: ErrorCodeMap) {
        self.default_codes = defaults;
        self.rebuild_merged();
    }

    /// Replace the default symbolic-type table. Custom entries survive.
    pub fn refresh_default_types(&mut self, defaults: TransactionErrorMap) {
        self.default_types = defaults;
        self.rebuild_merged();
    }

    /// Load codes from a JSON object (`{"1000": "message", ...}`) into the
    /// custom layer. Returns the number of entries loaded.
    pub fn add_codes_json(&mut self, json: &str) -> Result<usize, RegistryError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let obj = value.as_object().ok_or(RegistryError::NotAnObject)?;

        let mut codes = ErrorCodeMap::new();
        for (key, val) in obj {
            let code: u64 = key
                .parse()
                .map_err(|_| RegistryError::InvalidCodeKey { key: key.clone() })?;
            let msg = val
                .as_str()
                .ok_or_else(|| RegistryError::NonStringMessage { key: key.clone() })?;
            codes.insert(code, msg.to_string());
        }
        let count = codes.len();
        self.add_codes(codes);
        Ok(count)
    }

    /// Load symbolic types from a JSON object into the custom layer.
    /// Returns the number of entries loaded.
    pub fn add_types_json(&mut self, json: &str) -> Result<usize, RegistryError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let obj = value.as_object().ok_or(RegistryError::NotAnObject)?;

        let mut types = TransactionErrorMap::new();
        for (key, val) in obj {
            let msg = val
                .as_str()
                .ok_or_else(|| RegistryError::NonStringMessage { key: key.clone() })?;
            types.insert(key.clone(), msg.to_string());
        }
        let count = types.len();
        self.add_types(types);
        Ok(count)
    }

    // ─── Lookup ───────────────────────────────────────────────────────────

    /// Message registered for a numeric code, if any.
    pub fn code_message(&self, code: u64) -> Option<&str> {
        self.merged_codes.get(&code).map(String::as_str)
    }

    /// Message registered for a symbolic type, if any.
    pub fn type_message(&self, error_type: &str) -> Option<&str> {
        self.merged_types.get(error_type).map(String::as_str)
    }

    /// Returns `true` if the merged table knows this numeric code.
    pub fn contains_code(&self, code: u64) -> bool {
        self.merged_codes.contains_key(&code)
    }

    /// Returns `true` if the merged table knows this symbolic type.
    pub fn contains_type(&self, error_type: &str) -> bool {
        self.merged_types.contains_key(error_type)
    }

    /// Owned copy of the merged code table. Mutating the copy does not
    /// affect registry state.
    pub fn codes(&self) -> ErrorCodeMap {
        self.merged_codes.clone()
    }

    /// Owned copy of the merged symbolic-type table.
    pub fn types(&self) -> TransactionErrorMap {
        self.merged_types.clone()
    }

    /// Iterate the merged symbolic-type table in deterministic key order.
    pub fn types_iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.merged_types
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Custom codes that shadow an entry of the *original* built-in table.
    pub fn overridden_codes(&self) -> Vec<u64> {
        self.custom_codes
            .keys()
            .filter(|code| self.builtin_code_keys.contains(code))
            .copied()
            .collect()
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
