//! Bundled default message tables.
//!
//! Content curation is a data concern: messages here are starting points,
//! and deployments refresh or override them through the registry.

use suierrors_core::{ErrorCodeMap, TransactionErrorMap};

/// Built-in numeric-code messages. The 1000s are common Move abort codes,
/// the 2000s system/invariant failures, 3000+ binary/serialization errors.
pub const DEFAULT_ERROR_CODES: &[(u64, &str)] = &[
    // ─── Move abort band ──────────────────────────────────────────────────
    (1000, "Insufficient balance for the requested operation"),
    (1001, "Insufficient gas to complete the transaction"),
    (1002, "Invalid coin object passed to the call"),
    (1003, "Coin balance would overflow"),
    (1004, "Arithmetic overflow in Move execution"),
    (1005, "Division by zero in Move execution"),
    (1006, "Vector index out of bounds"),
    (1007, "Caller is not authorized for this operation"),
    (1008, "Object is not owned by the sender"),
    (1009, "Shared object is locked by another transaction"),
    (1010, "Requested amount is zero"),
    (1011, "Deadline for the operation has passed"),
    // ─── System/invariant band ────────────────────────────────────────────
    (2000, "Sui system state invariant violation"),
    (2001, "Object ownership check failed"),
    (2002, "Object version is unavailable for consumption"),
    (2003, "Move VM invariant violation"),
    (2004, "Effects certificate verification failed"),
    (2005, "Validator set changed during execution"),
    // ─── Binary/serialization band ────────────────────────────────────────
    (3000, "Failed to deserialize transaction data"),
    (3001, "Failed to deserialize a Move call argument"),
    (3002, "Malformed BCS bytes in object contents"),
    (3003, "Unexpected type tag in serialized value"),
];

/// Built-in symbolic transaction-error messages.
pub const DEFAULT_TRANSACTION_ERRORS: &[(&str, &str)] = &[
    ("INSUFFICIENT_GAS", "Not enough gas to execute the transaction"),
    ("GAS_BUDGET_TOO_HIGH", "Gas budget exceeds the protocol maximum"),
    ("GAS_BUDGET_TOO_LOW", "Gas budget is below the protocol minimum"),
    (
        "INSUFFICIENT_COIN_BALANCE",
        "Coin balance is insufficient to cover the transfer and gas",
    ),
    ("COIN_BALANCE_OVERFLOW", "Merging coins would overflow the balance"),
    ("OBJECT_TOO_BIG", "Object size exceeds the maximum allowed"),
    ("PACKAGE_TOO_BIG", "Published package exceeds the maximum size"),
    ("OBJECT_NOT_FOUND", "A referenced object could not be found"),
    (
        "OBJECT_VERSION_UNAVAILABLE",
        "The requested object version is not available",
    ),
    ("INVALID_SIGNATURE", "Transaction signature verification failed"),
    (
        "DEPENDENT_PACKAGE_NOT_FOUND",
        "A package this transaction depends on was not found",
    ),
    (
        "PUBLISH_UPGRADE_MISSING_DEPENDENCY",
        "Package upgrade is missing a declared dependency",
    ),
    (
        "FEATURE_NOT_SUPPORTED",
        "The requested feature is not supported by the current protocol version",
    ),
    ("ADDRESS_DENIED_FOR_COIN", "This address is denied for the given coin type"),
];

/// The built-in code table as an owned map.
pub fn default_error_codes() -> ErrorCodeMap {
    DEFAULT_ERROR_CODES
        .iter()
        .map(|(code, msg)| (*code, (*msg).to_string()))
        .collect()
}

/// The built-in symbolic-type table as an owned map.
pub fn default_transaction_errors() -> TransactionErrorMap {
    DEFAULT_TRANSACTION_ERRORS
        .iter()
        .map(|(ty, msg)| ((*ty).to_string(), (*msg).to_string()))
        .collect()
}
