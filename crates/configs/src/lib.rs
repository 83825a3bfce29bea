//! # Datavault Event Configs
//!
//! Topic and event-type configuration fields for the Datavault services.
//!
//! Each struct declares the string fields a service needs to discover
//! where an event family is published and which event-type string to
//! attach. The structs are pure data: services embed them in their own
//! configuration models, deserialize them from their configuration
//! sources, and read the field values. No behavior lives here.
//!
//! Shared base fields (e.g. a topic consumed by several event families)
//! are flattened into each struct that needs them; there is no inheritance
//! between config declarations.

pub mod access;
pub mod auth;
pub mod files;
pub mod notifications;

pub use access::{
    AccessRequestAllowedEventsConfig, AccessRequestCreatedEventsConfig,
    AccessRequestDeniedEventsConfig, IvaChangeEventsConfig,
};
pub use auth::SecondFactorRecreatedEventsConfig;
pub use files::{
    DownloadServedEventsConfig, FileDeletedEventsConfig, FileDeletionRequestEventsConfig,
    FileMetadataEventsConfig, FileRegisteredEventsConfig, FileStagedEventsConfig,
    FileStagingRequestedEventsConfig, FileToRegisterEventsConfig, FileUploadReceivedEventsConfig,
    FileValidationFailureEventsConfig, FileValidationSuccessEventsConfig,
};
pub use notifications::NotificationEventsConfig;
