//! Error types for schema registry and validation operations.

use thiserror::Error;

use crate::schema::validator::EventSchemaValidationError;

/// Result alias for schema operations.
pub type SchemaResult<T> = Result<T, EventSchemaError>;

/// The error type for schema registry and validation operations.
#[derive(Debug, Error)]
pub enum EventSchemaError {
    /// No schema is registered under the requested event type. Indicates a
    /// protocol-version mismatch or a caller bug; never retried.
    #[error("No event schema registered for event type: {0}")]
    SchemaNotFound(String),

    /// A second schema was registered under an already-taken event type.
    /// This is a startup-time configuration fault, not a per-message
    /// condition.
    #[error("Event type is already registered: {0}")]
    DuplicateEventType(String),

    /// An event payload did not conform to its schema.
    #[error(transparent)]
    Validation(#[from] EventSchemaValidationError),
}
