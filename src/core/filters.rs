//! Redaction of sensitive message text and field values

use super::fields::{FieldSet, FieldValue};
use serde::{Deserialize, Serialize};

/// Replacement text for redacted content
pub const FILTERED: &str = "[FILTERED]";

/// Redaction rules applied to a record before it is rendered
///
/// # Example
///
/// ```
/// use rust_console_logger::{FieldSet, Filters};
///
/// let filters = Filters::new().message("hunter2").field("password");
///
/// assert_eq!(filters.apply_message("login with hunter2"), "login with [FILTERED]");
///
/// let fields = filters.apply_fields(&FieldSet::from([("user", "bob"), ("password", "x")]));
/// assert_eq!(fields.to_string(), "user=bob password=[FILTERED]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filters {
    /// Substrings replaced wherever they occur in the message
    pub message: Vec<String>,
    /// Keys whose values are replaced
    pub fields: Vec<String>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn message(mut self, text: impl Into<String>) -> Self {
        self.message.push(text.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn field(mut self, key: impl Into<String>) -> Self {
        self.fields.push(key.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty() && self.fields.is_empty()
    }

    pub fn apply_message(&self, message: &str) -> String {
        self.message
            .iter()
            .filter(|needle| !needle.is_empty())
            .fold(message.to_string(), |text, needle| text.replace(needle.as_str(), FILTERED))
    }

    pub fn apply_fields(&self, fields: &FieldSet) -> FieldSet {
        if self.fields.is_empty() || !fields.keys().any(|k| self.fields.iter().any(|f| f == k)) {
            return fields.clone();
        }

        fields
            .iter()
            .map(|field| {
                let value = if self.fields.contains(&field.key) {
                    FieldValue::from(FILTERED)
                } else {
                    field.value.clone()
                };
                (field.key.clone(), value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_pass_through() {
        let filters = Filters::new();
        assert!(filters.is_empty());
        assert_eq!(filters.apply_message("secret stuff"), "secret stuff");

        let fields = FieldSet::from([("token", "abc")]);
        assert_eq!(filters.apply_fields(&fields), fields);
    }

    #[test]
    fn test_message_filter_replaces_every_occurrence() {
        let filters = Filters::new().message("secret").message("");
        assert_eq!(
            filters.apply_message("secret and secret"),
            "[FILTERED] and [FILTERED]"
        );
    }

    #[test]
    fn test_field_filter_keeps_order() {
        let filters = Filters::new().field("password");
        let fields = FieldSet::from([("password", "pw"), ("user", "alice")]);
        let filtered = filters.apply_fields(&fields);

        assert_eq!(filtered.keys().collect::<Vec<_>>(), ["password", "user"]);
        assert_eq!(filtered.get("password"), Some(&FieldValue::from(FILTERED)));
        assert_eq!(fields.get("password"), Some(&FieldValue::from("pw")));
    }

    #[test]
    fn test_deserialize_partial() {
        let filters: Filters = serde_json::from_str(r#"{"fields": ["api_key"]}"#).unwrap();
        assert!(filters.message.is_empty());
        assert_eq!(filters.fields, vec!["api_key".to_string()]);
    }
}
