//! Ordered pattern rules for symbolic and message-shaped errors.
//!
//! Match priority, first hit wins:
//! 1. Exact symbolic-type scan against the registry's merged type table
//!    (whole-token containment, deterministic key order).
//! 2. The fixed rule table, top to bottom: structural system-failure
//!    signatures, then transaction-failure content patterns whose message
//!    is resolved against the registry *at match time*, then fixed
//!    named-abort identifiers.
//!
//! The table is an ordered sequence of (pattern, outcome) pairs rather
//! than a map: order is part of the contract.

use regex::Regex;
use suierrors_core::{ErrorCategory, ErrorRegistry};

/// A successful pattern match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternHit {
    pub category: ErrorCategory,
    pub error_type: Option<String>,
    pub message: String,
}

/// How a rule produces its message.
enum RuleMessage {
    /// A compile-time-fixed message.
    Fixed(&'static str),
    /// Resolved against the registry's symbolic table at match time, so a
    /// later registry update changes future match text. Falls back to the
    /// literal when the type is absent from the registry.
    Registry {
        error_type: &'static str,
        fallback: &'static str,
    },
}

struct PatternRule {
    pattern: Regex,
    category: ErrorCategory,
    error_type: Option<&'static str>,
    message: RuleMessage,
}

/// Applies the ordered rule table to normalized error text.
pub struct PatternMatcher {
    rules: Vec<PatternRule>,
}

impl PatternMatcher {
    pub fn new() -> Self {
        Self { rules: build_rules() }
    }

    /// Returns the first match, or `None` if nothing in the table matched.
    pub fn find(&self, text: &str, registry: &ErrorRegistry) -> Option<PatternHit> {
        // 1. Exact symbolic-type containment beats every looser pattern.
        for (error_type, message) in registry.types_iter() {
            if contains_token(text, error_type) {
                tracing::trace!(error_type, "matched symbolic transaction error");
                return Some(PatternHit {
                    category: ErrorCategory::Transaction,
                    error_type: Some(error_type.to_string()),
                    message: format!("Transaction Error ({error_type}): {message}"),
                });
            }
        }

        // 2. Fixed rule table, top to bottom.
        for rule in &self.rules {
            if rule.pattern.is_match(text) {
                let message = match rule.message {
                    RuleMessage::Fixed(msg) => msg.to_string(),
                    RuleMessage::Registry { error_type, fallback } => {
                        let msg = registry.type_message(error_type).unwrap_or(fallback);
                        format!("Transaction Error ({error_type}): {msg}")
                    }
                };
                tracing::trace!(pattern = rule.pattern.as_str(), "matched pattern rule");
                return Some(PatternHit {
                    category: rule.category,
                    error_type: rule.error_type.map(str::to_string),
                    message,
                });
            }
        }
        None
    }
}

impl Default for PatternMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole-token containment: `token` must not be flanked by identifier
/// characters on either side. Caller-registered tokens may contain
/// arbitrary Unicode, so the scan only steps on char boundaries.
fn contains_token(haystack: &str, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    let step = token.chars().next().map_or(1, char::len_utf8);
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(token) {
        let start = from + pos;
        let end = start + token.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_ident_char(c));
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_ident_char(c));
        if before_ok && after_ok {
            return true;
        }
        from = start + step;
    }
    false
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn build_rules() -> Vec<PatternRule> {
    fn rule(
        pattern: &str,
        category: ErrorCategory,
        error_type: Option<&'static str>,
        message: RuleMessage,
    ) -> PatternRule {
        PatternRule {
            pattern: Regex::new(pattern).expect("invalid rule pattern"),
            category,
            error_type,
            message,
        }
    }

    fn dynamic(pattern: &str, error_type: &'static str, fallback: &'static str) -> PatternRule {
        rule(
            pattern,
            ErrorCategory::Transaction,
            Some(error_type),
            RuleMessage::Registry { error_type, fallback },
        )
    }

    fn named_abort(identifier: &'static str, message: &'static str) -> PatternRule {
        rule(
            &format!(r"\b{identifier}\b"),
            ErrorCategory::MoveAbort,
            // The identifier doubles as the symbolic type of the hit.
            Some(identifier),
            RuleMessage::Fixed(message),
        )
    }

    vec![
        // ─── Structural system failures ───────────────────────────────────
        rule(
            r"(?i)failed to reach (?:a )?quorum|quorum of validators",
            ErrorCategory::SuiSystem,
            None,
            RuleMessage::Fixed(
                "The network failed to reach a quorum of validators for this transaction. Retry shortly.",
            ),
        ),
        rule(
            r"(?i)validators?\s+(?:halted|unavailable|offline)",
            ErrorCategory::SuiSystem,
            None,
            RuleMessage::Fixed(
                "Validators are halted or unavailable. The network may be at an epoch boundary.",
            ),
        ),
        rule(
            r"(?i)epoch (?:change|boundary|is about to end)",
            ErrorCategory::SuiSystem,
            None,
            RuleMessage::Fixed(
                "The transaction was interrupted by an epoch change. Retry after the new epoch begins.",
            ),
        ),
        rule(
            r"(?i)system (?:is )?(?:overloaded|congested)",
            ErrorCategory::SuiSystem,
            None,
            RuleMessage::Fixed(
                "The network is overloaded. Retry later or with a higher gas price.",
            ),
        ),
        rule(
            r"(?i)transaction (?:timed out|(?:is |has )?expired)",
            ErrorCategory::Transaction,
            None,
            RuleMessage::Fixed("The transaction expired before it could be finalized."),
        ),
        rule(
            r"(?i)equivocation|conflicting transaction",
            ErrorCategory::Transaction,
            None,
            RuleMessage::Fixed(
                "A conflicting transaction was already submitted for one of the owned objects.",
            ),
        ),
        // ─── Transaction-failure content patterns (registry-resolved) ─────
        // Word boundaries keep these loose phrases from matching inside
        // camel-case identifiers like `EInsufficientBalance`, which belong
        // to the named-abort rules below.
        dynamic(
            r"(?i)(?:\binsufficient\b|not enough).{0,24}\bgas\b",
            "INSUFFICIENT_GAS",
            "Not enough gas to execute the transaction",
        ),
        dynamic(
            r"(?i)gas budget.{0,24}(?:too high|exceeds)",
            "GAS_BUDGET_TOO_HIGH",
            "Gas budget exceeds the protocol maximum",
        ),
        dynamic(
            r"(?i)gas budget.{0,24}(?:too low|below)",
            "GAS_BUDGET_TOO_LOW",
            "Gas budget is below the protocol minimum",
        ),
        dynamic(
            r"(?i)\bobject\b.{0,24}\btoo\s+(?:big|large)\b",
            "OBJECT_TOO_BIG",
            "Object size exceeds the maximum allowed",
        ),
        dynamic(
            r"(?i)\bpackage\b.{0,24}\btoo\s+(?:big|large)\b",
            "PACKAGE_TOO_BIG",
            "Published package exceeds the maximum size",
        ),
        dynamic(
            r"(?i)\binsufficient\b.{0,24}\bbalance\b",
            "INSUFFICIENT_COIN_BALANCE",
            "Coin balance is insufficient to cover the transfer and gas",
        ),
        dynamic(
            r"(?i)\binvalid\s+signature\b|\bsignature\b.{0,24}(?:invalid|mismatch|verification failed)",
            "INVALID_SIGNATURE",
            "Transaction signature verification failed",
        ),
        // ─── Named Move aborts ────────────────────────────────────────────
        named_abort(
            "EInsufficientBalance",
            "Move abort: insufficient balance in the source object",
        ),
        named_abort(
            "ENotAuthorized",
            "Move abort: the sender is not authorized to perform this action",
        ),
        named_abort(
            "EInvalidArgument",
            "Move abort: an argument failed validation",
        ),
        named_abort("EZeroAmount", "Move abort: amount must be greater than zero"),
        named_abort("EOverflow", "Move abort: arithmetic overflow"),
        named_abort(
            "EDeadlineExceeded",
            "Move abort: the operation deadline has passed",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use suierrors_core::TransactionErrorMap;

    fn registry() -> ErrorRegistry {
        let types: TransactionErrorMap = [
            ("INSUFFICIENT_GAS", "Not enough gas to execute the transaction"),
            ("OBJECT_TOO_BIG", "Object size exceeds the maximum allowed"),
        ]
        .into_iter()
        .map(|(t, m)| (t.to_string(), m.to_string()))
        .collect();
        ErrorRegistry::new(BTreeMap::new(), types, BTreeMap::new(), BTreeMap::new(), true)
    }

    fn find(text: &str, reg: &ErrorRegistry) -> Option<PatternHit> {
        PatternMatcher::new().find(text, reg)
    }

    #[test]
    fn exact_symbolic_match() {
        let reg = registry();
        let hit = find("Transaction failed: INSUFFICIENT_GAS", &reg).unwrap();
        assert_eq!(hit.category, ErrorCategory::Transaction);
        assert_eq!(hit.error_type.as_deref(), Some("INSUFFICIENT_GAS"));
        assert_eq!(
            hit.message,
            "Transaction Error (INSUFFICIENT_GAS): Not enough gas to execute the transaction"
        );
    }

    #[test]
    fn symbolic_match_requires_whole_token() {
        let reg = registry();
        // A prefixed identifier must not count as containment.
        let hit = find("MY_INSUFFICIENT_GAS_FLAG set", &reg);
        assert!(hit.is_none());
    }

    #[test]
    fn symbolic_scan_beats_content_pattern() {
        let reg = registry();
        // Both the exact token and the loose phrase are present; the exact
        // scan runs first and sets the error type.
        let hit = find("OBJECT_TOO_BIG: object is too big", &reg).unwrap();
        assert_eq!(hit.error_type.as_deref(), Some("OBJECT_TOO_BIG"));
    }

    #[test]
    fn system_failure_signatures() {
        let reg = registry();
        let hit = find("Transaction failed to reach a quorum of validators", &reg).unwrap();
        assert_eq!(hit.category, ErrorCategory::SuiSystem);
        assert!(hit.error_type.is_none());

        let hit = find("epoch change in progress", &reg).unwrap();
        assert_eq!(hit.category, ErrorCategory::SuiSystem);
    }

    #[test]
    fn content_pattern_resolves_message_from_registry() {
        let mut reg = registry();
        let hit = find("insufficient funds for gas", &reg).unwrap();
        assert_eq!(hit.category, ErrorCategory::Transaction);
        assert_eq!(hit.error_type.as_deref(), Some("INSUFFICIENT_GAS"));
        assert_eq!(
            hit.message,
            "Transaction Error (INSUFFICIENT_GAS): Not enough gas to execute the transaction"
        );

        // A registry update changes the text of subsequent matches.
        reg.add_types(
            [("INSUFFICIENT_GAS".to_string(), "Top up your gas coin".to_string())]
                .into_iter()
                .collect(),
        );
        let hit = find("insufficient funds for gas", &reg).unwrap();
        assert_eq!(
            hit.message,
            "Transaction Error (INSUFFICIENT_GAS): Top up your gas coin"
        );
    }

    #[test]
    fn content_pattern_falls_back_without_registry_entry() {
        let reg = ErrorRegistry::empty();
        let hit = find("object was too large to store", &reg).unwrap();
        assert_eq!(hit.error_type.as_deref(), Some("OBJECT_TOO_BIG"));
        assert_eq!(
            hit.message,
            "Transaction Error (OBJECT_TOO_BIG): Object size exceeds the maximum allowed"
        );
    }

    #[test]
    fn named_abort_patterns() {
        let reg = ErrorRegistry::empty();
        let hit = find("abort in 0x2::coin: EInsufficientBalance", &reg).unwrap();
        assert_eq!(hit.category, ErrorCategory::MoveAbort);
        assert_eq!(hit.error_type.as_deref(), Some("EInsufficientBalance"));
        assert!(hit.message.contains("insufficient balance"));
    }

    #[test]
    fn no_match_returns_none() {
        let reg = registry();
        assert!(find("Some unknown error", &reg).is_none());
        assert!(find("", &reg).is_none());
    }

    #[test]
    fn contains_token_boundaries() {
        assert!(contains_token("a INSUFFICIENT_GAS b", "INSUFFICIENT_GAS"));
        assert!(contains_token("INSUFFICIENT_GAS", "INSUFFICIENT_GAS"));
        assert!(contains_token("(INSUFFICIENT_GAS)", "INSUFFICIENT_GAS"));
        assert!(!contains_token("XINSUFFICIENT_GAS", "INSUFFICIENT_GAS"));
        assert!(!contains_token("INSUFFICIENT_GAS2", "INSUFFICIENT_GAS"));
        assert!(!contains_token("", "INSUFFICIENT_GAS"));
    }

    #[test]
    fn contains_token_multibyte_token_never_panics() {
        // A rejected candidate must re-scan from the next char boundary,
        // not the next byte, when the token starts mid-multi-byte-char.
        assert!(!contains_token("xÉCHEC_GAZ reported", "ÉCHEC_GAZ"));
        assert!(contains_token("gaz: ÉCHEC_GAZ reported", "ÉCHEC_GAZ"));
        assert!(contains_token("ÉCHEC_GAZ", "ÉCHEC_GAZ"));
    }

    #[test]
    fn contains_token_multibyte_flanks_are_identifier_chars() {
        // Non-ASCII letters flanking the token do not count as boundaries.
        assert!(!contains_token("éINSUFFICIENT_GAS", "INSUFFICIENT_GAS"));
        assert!(!contains_token("INSUFFICIENT_GASé", "INSUFFICIENT_GAS"));
        assert!(contains_token("→INSUFFICIENT_GAS←", "INSUFFICIENT_GAS"));
    }

    #[test]
    fn non_ascii_custom_type_matches_whole_token() {
        let mut reg = ErrorRegistry::empty();
        reg.add_types(
            [("ÉCHEC_GAZ".to_string(), "Gaz insuffisant".to_string())]
                .into_iter()
                .collect(),
        );
        let hit = find("rejeté: ÉCHEC_GAZ", &reg).unwrap();
        assert_eq!(hit.error_type.as_deref(), Some("ÉCHEC_GAZ"));
        assert_eq!(hit.message, "Transaction Error (ÉCHEC_GAZ): Gaz insuffisant");

        // A flanked occurrence is not a whole-token match.
        assert!(find("xÉCHEC_GAZ reported", &reg).is_none());
    }
}
