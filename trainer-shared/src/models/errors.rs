use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the API (`{"detail": ...}`).
///
/// `detail` is a plain string for handled errors and a list of validation
/// entries for rejected request bodies, so it is kept as raw JSON.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ErrorResponse {
    /// Error detail as sent by the server.
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    /// Creates an error response with a string detail.
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(Value::String(detail.into())),
        }
    }

    /// The detail when it is a non-empty human readable string.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(Value::as_str)
            .filter(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_detail_is_a_message() {
        let body: ErrorResponse =
            serde_json::from_value(json!({"detail": "Invalid credentials"})).unwrap();
        assert_eq!(body.message(), Some("Invalid credentials"));
        assert_eq!(body, ErrorResponse::new("Invalid credentials"));
    }

    #[test]
    fn validation_detail_is_not_a_message() {
        let body: ErrorResponse = serde_json::from_value(json!({
            "detail": [{"loc": ["body", "email"], "msg": "field required"}]
        }))
        .unwrap();
        assert!(body.message().is_none());
    }

    #[test]
    fn missing_detail() {
        let body: ErrorResponse = serde_json::from_value(json!({})).unwrap();
        assert!(body.message().is_none());
        assert!(ErrorResponse::new("  ").message().is_none());
    }
}
