use serde::{Deserialize, Serialize};

/// Error payload returned by the backend on 4xx/5xx responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `detail` is either plain text or a list of field-level validation errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Text(String),
    Fields(Vec<FieldErrorItem>),
}

/// One entry of a 422-style validation array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldErrorItem {
    /// Path to the offending field, e.g. `["body", "name"]` or `["items", 0, "qty"]`
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
}

impl FieldErrorItem {
    /// Dotted field path; the leading `body` segment is dropped
    pub fn field_path(&self) -> String {
        self.loc
            .iter()
            .filter_map(|segment| match segment {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .skip_while(|s| s == "body")
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl ErrorBody {
    /// Plain text message, `detail` taking priority over `message`
    pub fn text(&self) -> Option<&str> {
        match &self.detail {
            Some(ErrorDetail::Text(t)) if !t.trim().is_empty() => Some(t.as_str()),
            _ => self
                .message
                .as_deref()
                .filter(|m| !m.trim().is_empty()),
        }
    }

    pub fn field_errors(&self) -> Option<&[FieldErrorItem]> {
        match &self.detail {
            Some(ErrorDetail::Fields(items)) if !items.is_empty() => Some(items.as_slice()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_detail() {
        let body: ErrorBody = serde_json::from_value(json!({ "detail": "Code already exists" })).unwrap();
        assert_eq!(body.text(), Some("Code already exists"));
        assert!(body.field_errors().is_none());
    }

    #[test]
    fn test_message_fallback() {
        let body: ErrorBody = serde_json::from_value(json!({ "message": "Shop is inactive" })).unwrap();
        assert_eq!(body.text(), Some("Shop is inactive"));
    }

    #[test]
    fn test_field_errors_and_path() {
        let body: ErrorBody = serde_json::from_value(json!({
            "detail": [
                { "loc": ["body", "name"], "msg": "field required" },
                { "loc": ["body", "items", 0, "qty"], "msg": "must be positive" }
            ]
        }))
        .unwrap();
        let fields = body.field_errors().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field_path(), "name");
        assert_eq!(fields[1].field_path(), "items.0.qty");
        assert_eq!(body.text(), None);
    }
}
