//! Literal GraphQL request payloads for the demo page.
//!
//! Both payloads are complete JSON request bodies, kept byte-identical to the
//! originals (including the literal `\r\n` escape sequences embedded in the
//! query text). They are never constructed dynamically and are sent over the
//! wire exactly as written.

/// Request payload for the similar-items query (`similarItems(itemId: "1")`).
pub const SIMILAR_ITEMS_PAYLOAD: &str = r#"{"query":"query MyQuery {\r\n  similarItems(itemId: \"1\") {\r\n    items\r\n  }\r\n}\r\n","variables":{}}"#;

/// Request payload for the personalized-items query
/// (`userPersonalizations(userId: "")`).
pub const USER_PERSONALIZATIONS_PAYLOAD: &str = r#"{"query":"query MyQuery {\r\n  userPersonalizations(userId: \"\") {\r\n    items\r\n  }\r\n}\r\n","variables":{}}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similar_items_payload_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(SIMILAR_ITEMS_PAYLOAD).unwrap();

        let query = value["query"].as_str().unwrap();
        assert!(query.contains("similarItems(itemId: \"1\")"));
        // The escape sequences decode to real CRLF characters
        assert!(query.contains("\r\n"));
        assert_eq!(value["variables"], serde_json::json!({}));
    }

    #[test]
    fn test_user_personalizations_payload_is_valid_json() {
        let value: serde_json::Value =
            serde_json::from_str(USER_PERSONALIZATIONS_PAYLOAD).unwrap();

        let query = value["query"].as_str().unwrap();
        assert!(query.contains("userPersonalizations(userId: \"\")"));
        assert!(query.contains("\r\n"));
        assert_eq!(value["variables"], serde_json::json!({}));
    }

    #[test]
    fn test_payloads_contain_literal_escape_sequences() {
        // The payload text itself carries backslash-r backslash-n, not raw
        // control characters.
        assert!(SIMILAR_ITEMS_PAYLOAD.contains("\\r\\n"));
        assert!(!SIMILAR_ITEMS_PAYLOAD.contains('\r'));
        assert!(USER_PERSONALIZATIONS_PAYLOAD.contains("\\r\\n"));
        assert!(!USER_PERSONALIZATIONS_PAYLOAD.contains('\r'));
    }

    #[test]
    fn test_payloads_are_distinct() {
        assert_ne!(SIMILAR_ITEMS_PAYLOAD, USER_PERSONALIZATIONS_PAYLOAD);
    }
}
