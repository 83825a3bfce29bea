//! The event payload schema catalog.
//!
//! One serde struct per event payload, each implementing
//! [`EventPayload`](crate::schema::validator::EventPayload) so it can be
//! produced by [`get_validated_payload`](crate::schema::validator::get_validated_payload)
//! and registered in the [`SchemaRegistry`](crate::schema::registry::SchemaRegistry).
//!
//! Shared base field sets (user ID, upload date, staging coordinates) are
//! flattened into each schema once at descriptor-build time; there is no
//! inheritance between payload types.

mod access;
mod files;
mod metadata;
mod notifications;
mod users;

pub use access::{AccessRequestDetails, AccessRequestStatus, IvaState, IvaType, UserIvaState};
pub use files::{
    FileDeletionRequested, FileDeletionSuccess, FileDownloadServed, FileInternallyRegistered,
    FileRegisteredForDownload, FileStagedForDownload, FileUploadReceived,
    FileUploadValidationFailure, FileUploadValidationSuccess, NonStagedFileRequested,
};
pub use metadata::{
    Artifact, ArtifactTag, MetadataDatasetFile, MetadataDatasetID, MetadataDatasetOverview,
    MetadataDatasetStage, MetadataSubmissionFiles, MetadataSubmissionUpserted, SearchableResource,
    SearchableResourceInfo,
};
pub use notifications::Notification;
pub use users::{AcademicTitle, User, UserID};
