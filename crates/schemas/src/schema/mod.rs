//! Event schema descriptors, registry, and payload validation.
//!
//! - [`descriptor`]: the data model describing what each event payload
//!   looks like (field names, kinds, constraints).
//! - [`registry`]: the immutable event-type name to schema lookup table.
//! - [`validator`]: the single-pass payload validation routine and its
//!   structured error report.

pub mod descriptor;
pub mod registry;
pub mod validator;

pub use descriptor::{Constraint, FieldKind, FieldSpec, SchemaDescriptor, json_type_name};
pub use registry::SchemaRegistry;
pub use validator::{
    EventPayload, EventSchemaValidationError, JsonObject, SchemaErrorInfo, get_validated_payload,
    validated_upload_date,
};
