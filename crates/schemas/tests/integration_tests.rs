//! Integration tests for the Datavault event schema library.
//!
//! Covers the payload validator contract (exhaustive single-pass fault
//! reporting, the unexpected-field asymmetry, idempotence), the shared
//! upload-date rule, and the standard schema registry.

use std::sync::LazyLock;

use datavault_event_schemas::payloads::{FileUploadValidationFailure, UserID};
use datavault_event_schemas::{
    EventPayload, EventSchemaError, FieldKind, FieldSpec, JsonObject, SchemaDescriptor,
    SchemaRegistry, event_types, get_validated_payload,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

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

mod validation_tests {
    use super::*;

    #[test]
    fn test_valid_payload_yields_typed_instance() {
        let payload = as_object(json!({"some_param": "test", "another_param": 1234}));

        let validated: ExampleSchema = get_validated_payload(&payload).unwrap();
        assert_eq!(validated.some_param, "test");
        assert_eq!(validated.another_param, 1234);
    }

    #[test]
    fn test_mistyped_field_is_reported_with_reason() {
        let payload = as_object(json!({"some_param": "test", "another_param": "test"}));

        let error = get_validated_payload::<ExampleSchema>(&payload).unwrap_err();
        assert!(error.error_info.missing_fields.is_empty());
        assert!(error.error_info.unexpected_fields.is_empty());
        assert!(!error.error_info.mistyped_fields["another_param"].is_empty());
    }

    #[test]
    fn test_extra_fields_succeed_and_are_dropped() {
        let payload = as_object(json!({
            "some_param": "test",
            "another_param": 1234,
            "extra_field": "x"
        }));

        let validated: ExampleSchema = get_validated_payload(&payload).unwrap();
        let as_value = serde_json::to_value(&validated).unwrap();
        assert!(as_value.get("extra_field").is_none());
        assert_eq!(as_value.get("some_param"), Some(&json!("test")));
    }

    #[test]
    fn test_extra_fields_are_reported_only_on_failure() {
        // The same extra key that is silently dropped on success shows up
        // under unexpected_fields once another fault fails the payload.
        let payload = as_object(json!({
            "some_param": "test",
            "extra_field": "x"
        }));

        let error = get_validated_payload::<ExampleSchema>(&payload).unwrap_err();
        assert_eq!(error.error_info.missing_fields, vec!["another_param"]);
        assert_eq!(error.error_info.unexpected_fields, vec!["extra_field"]);
    }

    #[test]
    fn test_missing_fields_are_listed_in_declared_order() {
        let payload = as_object(json!({"unrelated": true}));

        let error = get_validated_payload::<ExampleSchema>(&payload).unwrap_err();
        assert_eq!(
            error.error_info.missing_fields,
            vec!["some_param", "another_param"]
        );
        assert_eq!(error.error_info.unexpected_fields, vec!["unrelated"]);
    }

    #[test]
    fn test_all_faults_are_aggregated_in_one_report() {
        let payload = as_object(json!({"another_param": [], "bogus": 1}));

        let error = get_validated_payload::<ExampleSchema>(&payload).unwrap_err();
        assert_eq!(error.error_info.missing_fields, vec!["some_param"]);
        assert!(error.error_info.mistyped_fields.contains_key("another_param"));
        assert_eq!(error.error_info.unexpected_fields, vec!["bogus"]);
    }

    #[test]
    fn test_unparseable_upload_date_names_the_string() {
        let payload = as_object(json!({
            "upload_date": "not-a-date",
            "file_id": "file-1",
            "object_id": "obj-1",
            "bucket_id": "inbox",
            "s3_endpoint_alias": "primary",
            "reason": "checksum mismatch"
        }));

        let error = get_validated_payload::<FileUploadValidationFailure>(&payload).unwrap_err();
        assert!(
            error.error_info.mistyped_fields["upload_date"].contains("not-a-date")
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let payload = as_object(json!({"some_param": null, "other": 1}));

        let first = get_validated_payload::<ExampleSchema>(&payload).unwrap_err();
        let second = get_validated_payload::<ExampleSchema>(&payload).unwrap_err();
        assert_eq!(first.error_info, second.error_info);
    }

    #[test]
    fn test_error_display_embeds_report_and_payload_as_json() {
        let payload = as_object(json!({"some_param": "test"}));

        let error = get_validated_payload::<ExampleSchema>(&payload).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("\"missing_fields\":[\"another_param\"]"));
        assert!(message.contains("\"some_param\":\"test\""));
    }
}

mod registry_tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_standard_event_type() {
        let registry = SchemaRegistry::with_catalog();
        assert_eq!(registry.len(), event_types::ALL.len());
        for event_type in event_types::ALL {
            assert!(registry.contains(event_type), "missing {event_type}");
        }
    }

    #[test]
    fn test_shared_schemas_resolve_to_the_same_descriptor() {
        let registry = SchemaRegistry::with_catalog();

        let user_id = registry.schema_for(event_types::USER_ID).unwrap();
        let second_factor = registry
            .schema_for(event_types::SECOND_FACTOR_RECREATED)
            .unwrap();
        assert!(std::ptr::eq(user_id, second_factor));
    }

    #[test]
    fn test_unknown_event_type_is_schema_not_found() {
        let registry = SchemaRegistry::with_catalog();
        let error = registry.schema_for("file_upload_rejected").unwrap_err();
        assert!(matches!(error, EventSchemaError::SchemaNotFound(_)));
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = SchemaRegistry::new();
        registry
            .register(event_types::USER_ID, UserID::descriptor())
            .unwrap();

        let error = registry
            .register(event_types::USER_ID, UserID::descriptor())
            .unwrap_err();
        assert!(matches!(error, EventSchemaError::DuplicateEventType(_)));
    }

    #[test]
    fn test_registry_validate_routes_by_event_type() {
        let registry = SchemaRegistry::with_catalog();

        let payload = as_object(json!({"file_id": "file-1"}));
        assert!(
            registry
                .validate(event_types::FILE_DELETION_REQUESTED, &payload)
                .is_ok()
        );

        let error = registry
            .validate(event_types::NOTIFICATION, &payload)
            .unwrap_err();
        let EventSchemaError::Validation(validation) = error else {
            panic!("expected a validation error");
        };
        assert!(
            validation
                .error_info
                .missing_fields
                .contains(&"recipient_email".to_string())
        );
        assert_eq!(validation.error_info.unexpected_fields, vec!["file_id"]);
    }

    #[test]
    fn test_concurrent_reads_need_no_locking() {
        let registry = SchemaRegistry::with_catalog();
        let payload = as_object(json!({"user_id": "user-1"}));

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        assert!(registry.validate(event_types::USER_ID, &payload).is_ok());
                        assert!(registry.schema_for(event_types::NOTIFICATION).is_ok());
                    }
                });
            }
        });
    }
}
