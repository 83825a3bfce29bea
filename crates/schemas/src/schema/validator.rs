//! Payload validation against event schemas.
//!
//! The validator consumes an untyped payload (a string-keyed JSON mapping
//! decoded from a wire message) and a target schema, and produces either a
//! fully typed payload instance or a structured report of every way the
//! payload diverges from the schema. Each call is pure and side-effect
//! free: no I/O, no shared state, no partial application.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::schema::descriptor::SchemaDescriptor;

/// An untyped event payload: a string-keyed mapping of JSON values.
pub type JsonObject = serde_json::Map<String, Value>;

/// The structured breakdown of a failed schema validation.
///
/// The three categories are computed exhaustively in a single pass, so one
/// report carries the complete picture rather than the first fault found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaErrorInfo {
    /// Schema fields with no required value in the payload, in declaration
    /// order.
    pub missing_fields: Vec<String>,
    /// Schema fields whose payload value failed its type or constraint
    /// check, mapped to the reason.
    pub mistyped_fields: BTreeMap<String, String>,
    /// Payload keys with no corresponding schema field.
    pub unexpected_fields: Vec<String>,
}

impl SchemaErrorInfo {
    /// Returns whether the report carries no faults at all.
    pub fn is_empty(&self) -> bool {
        self.missing_fields.is_empty()
            && self.mistyped_fields.is_empty()
            && self.unexpected_fields.is_empty()
    }
}

impl std::fmt::Display for SchemaErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{self:?}"),
        }
    }
}

/// Raised when an event payload fails validation against its event schema.
///
/// Carries both the structured error info and the offending payload so the
/// caller can branch programmatically or log the full picture; the display
/// message embeds both serialized as JSON text.
#[derive(Debug, Clone, Error)]
#[error(
    "The event payload failed validation against the corresponding event schema: {error_info}. \
     The complete payload is: {}",
    serde_json::to_string(.payload).unwrap_or_default()
)]
pub struct EventSchemaValidationError {
    /// The payload that was rejected.
    pub payload: JsonObject,
    /// The structured breakdown of every detected fault.
    pub error_info: SchemaErrorInfo,
}

impl EventSchemaValidationError {
    /// Creates a new validation error from a payload and its error info.
    pub fn new(payload: JsonObject, error_info: SchemaErrorInfo) -> Self {
        Self {
            payload,
            error_info,
        }
    }
}

/// Implemented by every event payload type in the schema catalog.
pub trait EventPayload: Serialize + DeserializeOwned {
    /// The descriptor declaring this payload's fields.
    fn descriptor() -> &'static SchemaDescriptor;
}

/// Validates an event payload against a payload type's schema and returns
/// the validated, typed instance.
///
/// On failure, the returned error aggregates every missing, mistyped, and
/// unexpected field found in one pass. On success, payload keys that are
/// not declared in the schema are silently dropped from the instance.
pub fn get_validated_payload<S: EventPayload>(
    payload: &JsonObject,
) -> Result<S, EventSchemaValidationError> {
    let descriptor = S::descriptor();
    if let Err(error_info) = descriptor.check(payload) {
        return Err(EventSchemaValidationError::new(payload.clone(), error_info));
    }

    match serde_json::from_value(Value::Object(payload.clone())) {
        Ok(instance) => Ok(instance),
        Err(err) => {
            // A failure here means the descriptor is out of sync with its
            // struct; report it under the schema name to keep the
            // two-outcome contract.
            let mut mistyped_fields = BTreeMap::new();
            mistyped_fields.insert(descriptor.name.to_string(), err.to_string());
            Err(EventSchemaValidationError::new(
                payload.clone(),
                SchemaErrorInfo {
                    mistyped_fields,
                    ..SchemaErrorInfo::default()
                },
            ))
        }
    }
}

/// Checks that an upload date string can be interpreted as an ISO 8601
/// date/time.
///
/// This is the single rule shared by every schema carrying an
/// `upload_date` field, so the accepted format cannot drift between
/// schemas. Both offset-carrying RFC 3339 strings and the naive
/// `YYYY-MM-DDTHH:MM:SS[.ffffff]` form are accepted.
pub fn validated_upload_date(upload_date: &str) -> Result<(), String> {
    let parses = chrono::DateTime::parse_from_rfc3339(upload_date).is_ok()
        || upload_date.parse::<chrono::NaiveDateTime>().is_ok();
    if parses {
        Ok(())
    } else {
        Err(format!(
            "could not interpret upload date as a datetime: {upload_date}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::descriptor::{FieldKind, FieldSpec};
    use serde_json::json;
    use std::sync::LazyLock;

    #[derive(Debug, Serialize, Deserialize)]
    struct ExampleSchema {
        some_param: String,
        another_param: i64,
    }

    impl EventPayload for ExampleSchema {
        fn descriptor() -> &'static SchemaDescriptor {
            static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
                SchemaDescriptor::new("example_schema")
                    .field(FieldSpec::new("some_param", FieldKind::String))
                    .field(FieldSpec::new("another_param", FieldKind::Integer))
            });
            &DESCRIPTOR
        }
    }

    fn as_object(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_happy() {
        let payload = as_object(json!({"some_param": "test", "another_param": 1234}));

        let validated: ExampleSchema = get_validated_payload(&payload).unwrap();
        assert_eq!(validated.some_param, "test");
        assert_eq!(validated.another_param, 1234);
    }

    #[test]
    fn test_failure() {
        let payload = as_object(json!({"some_param": "test", "another_param": "test"}));

        let error = get_validated_payload::<ExampleSchema>(&payload).unwrap_err();
        assert!(error.error_info.missing_fields.is_empty());
        assert!(error.error_info.unexpected_fields.is_empty());
        let reason = &error.error_info.mistyped_fields["another_param"];
        assert!(!reason.is_empty());
    }

    #[test]
    fn test_extra_fields_are_dropped_on_success() {
        let payload = as_object(json!({
            "some_param": "test",
            "another_param": 1234,
            "extra_field": "x"
        }));

        let validated: ExampleSchema = get_validated_payload(&payload).unwrap();
        let as_value = serde_json::to_value(&validated).unwrap();
        assert!(as_value.get("extra_field").is_none());
    }

    #[test]
    fn test_error_message_embeds_report_and_payload() {
        let payload = as_object(json!({"another_param": true}));

        let error = get_validated_payload::<ExampleSchema>(&payload).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("missing_fields"));
        assert!(message.contains("some_param"));
        assert!(message.contains("\"another_param\":true"));
    }

    #[test]
    fn test_validated_upload_date() {
        assert!(validated_upload_date("2024-03-01T12:00:00+00:00").is_ok());
        assert!(validated_upload_date("2024-03-01T12:00:00.123456").is_ok());

        let reason = validated_upload_date("not-a-date").unwrap_err();
        assert!(reason.contains("not-a-date"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let payload = as_object(json!({"some_param": 5, "extra": null}));

        let first = get_validated_payload::<ExampleSchema>(&payload).unwrap_err();
        let second = get_validated_payload::<ExampleSchema>(&payload).unwrap_err();
        assert_eq!(first.error_info, second.error_info);
    }
}
