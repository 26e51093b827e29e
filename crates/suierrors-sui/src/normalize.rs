//! Normalize an arbitrary error value into a string for pattern analysis.
//!
//! Direct `message` fields are preferred over nested-cause messages, which
//! are preferred over generic JSON stringification: direct and cause
//! messages are far more likely to contain an embedded code or symbolic
//! token than a generic object dump.

use serde_json::Value;

/// Convert any error value into a single best-effort string. Never fails;
/// serialization failures degrade to the empty string.
pub fn normalize(error: &Value) -> String {
    match error {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            if let Some(Value::String(msg)) = map.get("message") {
                return msg.clone();
            }
            if let Some(Value::Object(cause)) = map.get("cause") {
                if let Some(Value::String(msg)) = cause.get("message") {
                    return msg.clone();
                }
            }
            serde_json::to_string(error).unwrap_or_default()
        }
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) => serde_json::to_string(error).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_becomes_empty() {
        assert_eq!(normalize(&Value::Null), "");
    }

    #[test]
    fn string_passes_through() {
        assert_eq!(normalize(&json!("MoveAbort(..., 1000)")), "MoveAbort(..., 1000)");
    }

    #[test]
    fn message_field_preferred() {
        let err = json!({ "message": "abort_code: 7", "cause": { "message": "inner" } });
        assert_eq!(normalize(&err), "abort_code: 7");
    }

    #[test]
    fn cause_message_when_outer_missing() {
        let err = json!({ "code": 500, "cause": { "message": "Error Code 1001" } });
        assert_eq!(normalize(&err), "Error Code 1001");
    }

    #[test]
    fn non_string_message_is_skipped() {
        let err = json!({ "message": 42, "cause": { "message": "inner wins" } });
        assert_eq!(normalize(&err), "inner wins");
    }

    #[test]
    fn scalars_use_display_form() {
        assert_eq!(normalize(&json!(1000)), "1000");
        assert_eq!(normalize(&json!(true)), "true");
    }

    #[test]
    fn object_without_message_dumps_json() {
        let err = json!({ "status": "failure" });
        assert_eq!(normalize(&err), r#"{"status":"failure"}"#);
    }

    #[test]
    fn array_dumps_json() {
        assert_eq!(normalize(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn deeply_nested_object_never_panics() {
        let mut v = json!("leaf");
        for _ in 0..64 {
            v = json!({ "cause": v });
        }
        let _ = normalize(&v);
    }
}
