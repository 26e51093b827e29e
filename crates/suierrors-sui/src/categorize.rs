//! Range-based category assignment for numeric error codes.
//!
//! Band boundaries are a policy constant, not a derived property: codes in
//! the 1000s are Move abort codes, the 2000s are system/invariant failures,
//! and everything from 3000 up is transaction-level (binary/serialization)
//! failure. Codes below every band fall back to a keyword scan of the
//! original string.

use suierrors_core::ErrorCategory;

/// Lower bound of the Move abort band.
pub const MOVE_ABORT_BAND_START: u64 = 1000;
/// Lower bound of the system/invariant band.
pub const SYSTEM_BAND_START: u64 = 2000;
/// Lower bound of the top-open binary/serialization band.
pub const SERIALIZATION_BAND_START: u64 = 3000;

/// Assign a category to a numeric code, using the original string for the
/// out-of-band keyword fallback.
pub fn categorize(code: u64, text: &str) -> ErrorCategory {
    match code {
        c if c >= SERIALIZATION_BAND_START => ErrorCategory::Transaction,
        c if c >= SYSTEM_BAND_START => ErrorCategory::SuiSystem,
        c if c >= MOVE_ABORT_BAND_START => ErrorCategory::MoveAbort,
        _ => {
            let lower = text.to_lowercase();
            if lower.contains("transaction") || lower.contains("signature") {
                ErrorCategory::Transaction
            } else {
                ErrorCategory::MoveAbort
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_abort_band() {
        assert_eq!(categorize(1000, ""), ErrorCategory::MoveAbort);
        assert_eq!(categorize(1999, ""), ErrorCategory::MoveAbort);
    }

    #[test]
    fn system_band() {
        assert_eq!(categorize(2000, ""), ErrorCategory::SuiSystem);
        assert_eq!(categorize(2023, ""), ErrorCategory::SuiSystem);
        assert_eq!(categorize(2999, ""), ErrorCategory::SuiSystem);
    }

    #[test]
    fn serialization_band_is_top_open() {
        assert_eq!(categorize(3000, ""), ErrorCategory::Transaction);
        assert_eq!(categorize(u64::MAX, ""), ErrorCategory::Transaction);
    }

    #[test]
    fn below_bands_defaults_to_move_abort() {
        assert_eq!(categorize(500, "Error code: 500"), ErrorCategory::MoveAbort);
        assert_eq!(categorize(0, ""), ErrorCategory::MoveAbort);
    }

    #[test]
    fn below_bands_keyword_fallback() {
        assert_eq!(
            categorize(500, "transaction rejected, code: 500"),
            ErrorCategory::Transaction
        );
        assert_eq!(
            categorize(12, "Signature check failed, error: 12"),
            ErrorCategory::Transaction
        );
    }
}
