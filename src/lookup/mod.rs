pub mod http;

use std::future::Future;
use std::pin::Pin;

use serde_json::{Map, Value};
use thiserror::Error;

/// Shown when a lookup is requested with an empty query
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a serial number";

/// Shown for any network or decoding failure
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to fetch data. Please try again.";

/// Placeholder shown in the value cell for falsy values
pub const VALUE_PLACEHOLDER: &str = "-";

/// Why a lookup produced no record
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The query was blank.
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,

    /// The endpoint answered with an explicit `error` member.
    #[error("{0}")]
    ServerReported(String),

    /// The request failed or the body could not be decoded. The detail is for logs only.
    #[error("{}", TRANSPORT_FAILURE_MESSAGE)]
    Transport(String),
}

impl LookupError {
    pub fn transport(detail: impl std::fmt::Display) -> Self {
        Self::Transport(detail.to_string())
    }

    /// The text shown to the user
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Field/value pairs of one record, in display order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupResult {
    fields: Map<String, Value>,
}

impl LookupResult {
    /// Integer-like names come first in ascending order, then the rest in
    /// the order the endpoint sent them, as a browser enumerates the object.
    pub fn new(fields: Map<String, Value>) -> Self {
        fields.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Rows ready for display: falsy values become [`VALUE_PLACEHOLDER`].
    pub fn rows(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(name, value)| (name.to_string(), display_value(value)))
            .collect()
    }
}

impl FromIterator<(String, Value)> for LookupResult {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut indexed = Vec::new();
        let mut named = Vec::new();
        for (name, value) in iter {
            match array_index(&name) {
                Some(index) => indexed.push((index, name, value)),
                None => named.push((name, value)),
            }
        }
        indexed.sort_by_key(|(index, _, _)| *index);

        let fields = indexed
            .into_iter()
            .map(|(_, name, value)| (name, value))
            .chain(named)
            .collect();
        Self { fields }
    }
}

/// Canonical decimal array index: no sign, no leading zeros, below 2^32 - 1.
fn array_index(name: &str) -> Option<u32> {
    if name.is_empty() || (name.len() > 1 && name.starts_with('0')) {
        return None;
    }
    if !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse::<u32>().ok().filter(|index| *index != u32::MAX)
}

/// Pending outcome of a single lookup
pub type LookupFuture = Pin<Box<dyn Future<Output = Result<LookupResult, LookupError>> + Send>>;

/// The external endpoint that resolves a serial number to a record
pub trait Lookup: Send + Sync {
    /// Issue one request for `query`. The future owns everything it needs.
    fn fetch(&self, query: &str) -> LookupFuture;
}

/// Decide what a response body means.
///
/// A JSON object with a truthy `error` member is a server-reported failure;
/// any other JSON object is the record. Everything else counts as a
/// transport failure.
pub fn interpret_body(body: &[u8]) -> Result<LookupResult, LookupError> {
    let value: Value = serde_json::from_slice(body).map_err(LookupError::transport)?;
    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(LookupError::transport(format!(
                "expected a JSON object, got {}",
                kind_of(&other)
            )))
        }
    };

    match fields.get("error") {
        Some(error) if is_truthy(error) => Err(LookupError::ServerReported(text_of(error))),
        _ => Ok(LookupResult::new(fields)),
    }
}

/// Text for a value cell
pub fn display_value(value: &Value) -> String {
    if is_truthy(value) {
        text_of(value)
    } else {
        VALUE_PLACEHOLDER.to_string()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_member_is_reported_verbatim() {
        let err = interpret_body(br#"{"error": "not found"}"#).unwrap_err();
        assert_eq!(err, LookupError::ServerReported("not found".to_string()));
        assert_eq!(err.user_message(), "not found");
    }

    #[test]
    fn object_without_error_is_the_record_in_order() {
        let result = interpret_body(br#"{"Name": "Alice", "Age": "", "City": "Dhaka"}"#).unwrap();
        let names: Vec<&str> = result.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["Name", "Age", "City"]);
        assert_eq!(
            result.rows(),
            vec![
                ("Name".to_string(), "Alice".to_string()),
                ("Age".to_string(), "-".to_string()),
                ("City".to_string(), "Dhaka".to_string()),
            ]
        );
    }

    #[test]
    fn integer_like_names_come_first_in_ascending_order() {
        let result = interpret_body(br#"{"Name": "Alice", "2": "b", "10": "c", "1": "a", "01": "x", "Age": ""}"#)
            .unwrap();
        let names: Vec<&str> = result.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["1", "2", "10", "Name", "01", "Age"]);
    }

    #[test]
    fn index_limit_and_signs_are_plain_names() {
        let result = interpret_body(br#"{"4294967295": "max", "-1": "neg", "4294967294": "last", "0": "zero"}"#)
            .unwrap();
        let names: Vec<&str> = result.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["0", "4294967294", "4294967295", "-1"]);
    }

    #[test]
    fn falsy_error_member_is_treated_as_data() {
        let result = interpret_body(br#"{"error": "", "Name": "Bob"}"#).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.get("Name"), Some(&json!("Bob")));
    }

    #[test]
    fn non_string_error_is_shown_as_json_text() {
        let err = interpret_body(br#"{"error": 404}"#).unwrap_err();
        assert_eq!(err, LookupError::ServerReported("404".to_string()));
    }

    #[test]
    fn unparseable_and_non_object_bodies_are_transport_failures() {
        let bodies: [&[u8]; 4] = [b"<html>oops</html>", b"[1, 2]", b"null", b""];
        for body in bodies {
            let err = interpret_body(body).unwrap_err();
            assert!(matches!(err, LookupError::Transport(_)), "body {body:?}");
            assert_eq!(err.user_message(), TRANSPORT_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn display_value_uses_placeholder_for_falsy_values() {
        assert_eq!(display_value(&json!("")), "-");
        assert_eq!(display_value(&json!(null)), "-");
        assert_eq!(display_value(&json!(false)), "-");
        assert_eq!(display_value(&json!(0)), "-");
        assert_eq!(display_value(&json!(746)), "746");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!(["a", 1])), r#"["a",1]"#);
    }

    #[test]
    fn empty_input_message() {
        assert_eq!(LookupError::EmptyInput.user_message(), EMPTY_INPUT_MESSAGE);
    }
}
