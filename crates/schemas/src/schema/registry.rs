//! The event-type to schema lookup table.
//!
//! A registry is built once at process start and never mutated afterwards,
//! so shared references can be read from any number of threads without
//! locking. There is deliberately no unregister or overwrite operation.

use std::collections::HashMap;

use crate::error::EventSchemaError;
use crate::event_types;
use crate::payloads::{
    AccessRequestDetails, FileDeletionRequested, FileDeletionSuccess, FileDownloadServed,
    FileInternallyRegistered, FileRegisteredForDownload, FileStagedForDownload,
    FileUploadReceived, FileUploadValidationFailure, FileUploadValidationSuccess,
    MetadataDatasetID, MetadataDatasetOverview, MetadataSubmissionUpserted,
    NonStagedFileRequested, Notification, SearchableResource, SearchableResourceInfo, UserID,
    UserIvaState,
};
use crate::schema::descriptor::SchemaDescriptor;
use crate::schema::validator::{EventPayload, EventSchemaValidationError, JsonObject};

/// Immutable mapping from event-type name to schema descriptor.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, &'static SchemaDescriptor>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            schemas: HashMap::new(),
        }
    }

    /// Builds the registry holding the full standard schema catalog.
    ///
    /// Call this once at process start and pass the registry to consumers.
    pub fn with_catalog() -> Self {
        let mut registry = Self::new();
        for (event_type, descriptor) in catalog() {
            registry
                .register(event_type, descriptor)
                .expect("catalog event types are unique");
        }
        registry
    }

    /// Registers a schema under an event-type name.
    ///
    /// Registration happens at initialization time only; registering two
    /// schemas under the same name is a fatal configuration error.
    pub fn register(
        &mut self,
        event_type: &'static str,
        schema: &'static SchemaDescriptor,
    ) -> Result<(), EventSchemaError> {
        if self.schemas.contains_key(event_type) {
            return Err(EventSchemaError::DuplicateEventType(event_type.to_string()));
        }
        self.schemas.insert(event_type, schema);
        tracing::debug!(event_type, schema = schema.name, "registered event schema");
        Ok(())
    }

    /// Resolves the schema an inbound event of the given type must conform
    /// to.
    pub fn schema_for(
        &self,
        event_type: &str,
    ) -> Result<&'static SchemaDescriptor, EventSchemaError> {
        self.schemas
            .get(event_type)
            .copied()
            .ok_or_else(|| EventSchemaError::SchemaNotFound(event_type.to_string()))
    }

    /// Looks up a schema, returning `None` when the event type is unknown.
    pub fn get(&self, event_type: &str) -> Option<&'static SchemaDescriptor> {
        self.schemas.get(event_type).copied()
    }

    /// Returns whether an event type is registered.
    pub fn contains(&self, event_type: &str) -> bool {
        self.schemas.contains_key(event_type)
    }

    /// Validates a payload against the schema registered for an event type.
    pub fn validate(&self, event_type: &str, payload: &JsonObject) -> Result<(), EventSchemaError> {
        let schema = self.schema_for(event_type)?;
        schema.check(payload).map_err(|error_info| {
            EventSchemaError::Validation(EventSchemaValidationError::new(
                payload.clone(),
                error_info,
            ))
        })
    }

    /// Returns the registered event-type names, sorted.
    pub fn event_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered event types.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The standard catalog: every event type and the schema its payloads must
/// conform to. Some event types share a schema (e.g. `user_id` and
/// `second_factor_recreated` both relay a bare user ID).
fn catalog() -> [(&'static str, &'static SchemaDescriptor); 20] {
    [
        (
            event_types::METADATA_DATASET_DELETED,
            MetadataDatasetID::descriptor(),
        ),
        (
            event_types::METADATA_DATASET_OVERVIEW,
            MetadataDatasetOverview::descriptor(),
        ),
        (
            event_types::METADATA_SUBMISSION_UPSERTED,
            MetadataSubmissionUpserted::descriptor(),
        ),
        (
            event_types::FILE_UPLOAD_RECEIVED,
            FileUploadReceived::descriptor(),
        ),
        (
            event_types::FILE_UPLOAD_VALIDATION_SUCCESS,
            FileUploadValidationSuccess::descriptor(),
        ),
        (
            event_types::FILE_UPLOAD_VALIDATION_FAILURE,
            FileUploadValidationFailure::descriptor(),
        ),
        (
            event_types::FILE_INTERNALLY_REGISTERED,
            FileInternallyRegistered::descriptor(),
        ),
        (
            event_types::FILE_REGISTERED_FOR_DOWNLOAD,
            FileRegisteredForDownload::descriptor(),
        ),
        (
            event_types::NON_STAGED_FILE_REQUESTED,
            NonStagedFileRequested::descriptor(),
        ),
        (
            event_types::FILE_STAGED_FOR_DOWNLOAD,
            FileStagedForDownload::descriptor(),
        ),
        (
            event_types::FILE_DOWNLOAD_SERVED,
            FileDownloadServed::descriptor(),
        ),
        (
            event_types::FILE_DELETION_REQUESTED,
            FileDeletionRequested::descriptor(),
        ),
        (
            event_types::FILE_DELETION_SUCCESS,
            FileDeletionSuccess::descriptor(),
        ),
        (event_types::NOTIFICATION, Notification::descriptor()),
        (
            event_types::SEARCHABLE_RESOURCE_DELETED,
            SearchableResourceInfo::descriptor(),
        ),
        (
            event_types::SEARCHABLE_RESOURCE_UPSERTED,
            SearchableResource::descriptor(),
        ),
        (event_types::USER_ID, UserID::descriptor()),
        (
            event_types::SECOND_FACTOR_RECREATED,
            UserID::descriptor(),
        ),
        (
            event_types::ACCESS_REQUEST_DETAILS,
            AccessRequestDetails::descriptor(),
        ),
        (event_types::IVA_STATE_CHANGED, UserIvaState::descriptor()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = SchemaRegistry::new();
        registry
            .register(event_types::USER_ID, UserID::descriptor())
            .unwrap();

        assert!(registry.contains(event_types::USER_ID));
        let schema = registry.schema_for(event_types::USER_ID).unwrap();
        assert_eq!(schema.name, "user_id");
    }

    #[test]
    fn test_duplicate_registration_fails() {
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
    fn test_unknown_event_type_is_not_found() {
        let registry = SchemaRegistry::with_catalog();
        let error = registry.schema_for("no_such_event").unwrap_err();
        assert!(matches!(error, EventSchemaError::SchemaNotFound(_)));
    }

    #[test]
    fn test_catalog_is_complete() {
        let registry = SchemaRegistry::with_catalog();
        assert_eq!(registry.len(), event_types::ALL.len());
        for event_type in event_types::ALL {
            assert!(registry.contains(event_type), "missing {event_type}");
        }
    }

    #[test]
    fn test_registry_validate() {
        let registry = SchemaRegistry::with_catalog();

        let payload = json!({"user_id": "user-7"}).as_object().cloned().unwrap();
        assert!(registry.validate(event_types::USER_ID, &payload).is_ok());

        let bad = json!({"user_id": 7}).as_object().cloned().unwrap();
        let error = registry
            .validate(event_types::USER_ID, &bad)
            .unwrap_err();
        assert!(matches!(error, EventSchemaError::Validation(_)));
    }
}
