//! # Datavault Event Schemas
//!
//! Shared catalog of event payload schemas for the Datavault
//! file-management and access-control services, providing:
//! - One versioned definition of what each event means (fields, kinds,
//!   constraints)
//! - An immutable registry resolving an event-type string to its schema
//! - A single-pass payload validator producing either a typed instance or
//!   a structured report of every missing, mistyped, and unexpected field
//!
//! The library performs no I/O and holds no mutable state: build the
//! registry once at process start, pass it to consumers, and validate each
//! inbound payload with a pure function call.
//!
//! ## Example
//!
//! ```rust
//! use datavault_event_schemas::payloads::FileDeletionRequested;
//! use datavault_event_schemas::{SchemaRegistry, event_types, get_validated_payload};
//! use serde_json::json;
//!
//! let registry = SchemaRegistry::with_catalog();
//! let schema = registry
//!     .schema_for(event_types::FILE_DELETION_REQUESTED)
//!     .unwrap();
//!
//! let payload = json!({ "file_id": "file-001" });
//! let payload = payload.as_object().unwrap();
//! assert!(schema.check(payload).is_ok());
//!
//! let typed: FileDeletionRequested = get_validated_payload(payload).unwrap();
//! assert_eq!(typed.file_id, "file-001");
//! ```

mod error;
pub mod payloads;
pub mod schema;

pub use error::{EventSchemaError, SchemaResult};
pub use schema::descriptor::{Constraint, FieldKind, FieldSpec, SchemaDescriptor};
pub use schema::registry::SchemaRegistry;
pub use schema::validator::{
    EventPayload, EventSchemaValidationError, JsonObject, SchemaErrorInfo, get_validated_payload,
    validated_upload_date,
};

/// Standard event-type name constants.
///
/// These are the registry keys: the strings carried in message metadata by
/// the transport layer to identify which schema an inbound payload must
/// conform to.
pub mod event_types {
    /// A metadata dataset was deleted.
    pub const METADATA_DATASET_DELETED: &str = "metadata_dataset_deleted";
    /// Overview of the files contained in a dataset.
    pub const METADATA_DATASET_OVERVIEW: &str = "metadata_dataset_overview";
    /// A metadata submission was created or updated.
    pub const METADATA_SUBMISSION_UPSERTED: &str = "metadata_submission_upserted";
    /// A new file upload was received.
    pub const FILE_UPLOAD_RECEIVED: &str = "file_upload_received";
    /// An uploaded file passed interrogation.
    pub const FILE_UPLOAD_VALIDATION_SUCCESS: &str = "file_upload_validation_success";
    /// An uploaded file failed interrogation.
    pub const FILE_UPLOAD_VALIDATION_FAILURE: &str = "file_upload_validation_failure";
    /// A newly uploaded file was internally registered.
    pub const FILE_INTERNALLY_REGISTERED: &str = "file_internally_registered";
    /// A file became downloadable through the DRS API.
    pub const FILE_REGISTERED_FOR_DOWNLOAD: &str = "file_registered_for_download";
    /// A download was requested for a file not yet in the outbox.
    pub const NON_STAGED_FILE_REQUESTED: &str = "non_staged_file_requested";
    /// A file was staged to the outbox storage.
    pub const FILE_STAGED_FOR_DOWNLOAD: &str = "file_staged_for_download";
    /// File content was served for download.
    pub const FILE_DOWNLOAD_SERVED: &str = "file_download_served";
    /// Deletion of a file was requested.
    pub const FILE_DELETION_REQUESTED: &str = "file_deletion_requested";
    /// A file was deleted from a service's database and buckets.
    pub const FILE_DELETION_SUCCESS: &str = "file_deletion_success";
    /// A service asked for a notification to be sent.
    pub const NOTIFICATION: &str = "notification";
    /// A searchable resource was deleted.
    pub const SEARCHABLE_RESOURCE_DELETED: &str = "searchable_resource_deleted";
    /// A searchable resource was created or updated.
    pub const SEARCHABLE_RESOURCE_UPSERTED: &str = "searchable_resource_upserted";
    /// Generic relay of a user ID.
    pub const USER_ID: &str = "user_id";
    /// A user's second authentication factor was recreated.
    pub const SECOND_FACTOR_RECREATED: &str = "second_factor_recreated";
    /// Details of a data access request.
    pub const ACCESS_REQUEST_DETAILS: &str = "access_request_details";
    /// The state of a user's IVA changed.
    pub const IVA_STATE_CHANGED: &str = "iva_state_changed";

    /// Every standard event-type name, in registry order.
    pub const ALL: &[&str] = &[
        METADATA_DATASET_DELETED,
        METADATA_DATASET_OVERVIEW,
        METADATA_SUBMISSION_UPSERTED,
        FILE_UPLOAD_RECEIVED,
        FILE_UPLOAD_VALIDATION_SUCCESS,
        FILE_UPLOAD_VALIDATION_FAILURE,
        FILE_INTERNALLY_REGISTERED,
        FILE_REGISTERED_FOR_DOWNLOAD,
        NON_STAGED_FILE_REQUESTED,
        FILE_STAGED_FOR_DOWNLOAD,
        FILE_DOWNLOAD_SERVED,
        FILE_DELETION_REQUESTED,
        FILE_DELETION_SUCCESS,
        NOTIFICATION,
        SEARCHABLE_RESOURCE_DELETED,
        SEARCHABLE_RESOURCE_UPSERTED,
        USER_ID,
        SECOND_FACTOR_RECREATED,
        ACCESS_REQUEST_DETAILS,
        IVA_STATE_CHANGED,
    ];
}
