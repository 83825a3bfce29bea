//! Config fields for file lifecycle events: metadata arrivals, uploads,
//! interrogations, registrations, staging, downloads, and deletions.

use serde::{Deserialize, Serialize};

/// For events related to new file metadata arrivals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadataEventsConfig {
    /// Name of the topic to receive new or changed metadata on files that
    /// shall be registered for upload, e.g. `metadata`.
    pub file_metadata_event_topic: String,
    /// The type used for events to receive new or changed metadata on
    /// files that are expected to be uploaded, e.g.
    /// `file_metadata_upserted`.
    pub file_metadata_event_type: String,
}

/// For events about new file uploads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUploadReceivedEventsConfig {
    /// The name of the topic used for FileUploadReceived events, e.g.
    /// `received-file-uploads`.
    pub file_upload_received_topic: String,
    /// The name of the type used for FileUploadReceived events, e.g.
    /// `file_upload_received`.
    pub file_upload_received_event_type: String,
}

/// For events conveying that a file interrogation was successful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileValidationSuccessEventsConfig {
    /// The name of the topic used to publish file interrogation outcome
    /// events, e.g. `file-interrogations`.
    pub file_interrogations_topic: String,
    /// The type used for events informing about successful file
    /// validations, e.g. `file_interrogation_success`.
    pub interrogation_success_event_type: String,
}

/// For events conveying that a file interrogation was unsuccessful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileValidationFailureEventsConfig {
    /// The name of the topic used to publish file interrogation outcome
    /// events, e.g. `file-interrogations`.
    pub file_interrogations_topic: String,
    /// The type used for events informing about failed file validations,
    /// e.g. `file_interrogation_failed`.
    pub interrogation_failure_event_type: String,
}

/// For events containing info about a file to register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileToRegisterEventsConfig {
    /// The name of the topic to receive events informing about new files
    /// to register, e.g. `files-to-register`.
    pub files_to_register_event_topic: String,
    /// The name of the type for events informing about new files to
    /// register, e.g. `file_to_register`.
    pub files_to_register_event_type: String,
}

/// For events conveying that a file was registered in the permanent
/// bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRegisteredEventsConfig {
    /// Name of the topic used for events indicating that a file has been
    /// registered for download, e.g. `file-registrations`.
    pub file_registered_event_topic: String,
    /// The type used for events indicating that a file has been
    /// registered for download, e.g. `file_registered`.
    pub file_registered_event_type: String,
}

/// For events indicating that a file was requested for download but is not
/// present in the outbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStagingRequestedEventsConfig {
    /// Name of the topic used for events indicating that a download was
    /// requested for a file that is not yet available in the outbox, e.g.
    /// `file-stage-requests`.
    pub files_to_stage_event_topic: String,
    /// The type used for non-staged file request events, e.g.
    /// `non_staged_file_requested`.
    pub files_to_stage_event_type: String,
}

/// For events indicating that a file was staged to the download bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStagedEventsConfig {
    /// Name of the topic used for events indicating that a file has been
    /// staged, e.g. `file-stagings`.
    pub file_staged_event_topic: String,
    /// The type used for events indicating that a file has been staged,
    /// e.g. `file_staged_for_download`.
    pub file_staged_event_type: String,
}

/// For events indicating that a file was downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadServedEventsConfig {
    /// Name of the topic used for events indicating that a download of a
    /// specified file happened, e.g. `file-downloads`.
    pub download_served_event_topic: String,
    /// The type used for events indicating that a download of a specified
    /// file happened, e.g. `download_served`.
    pub download_served_event_type: String,
}

/// For events that require deleting a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDeletionRequestEventsConfig {
    /// The name of the topic to receive events informing about files to
    /// delete, e.g. `file-deletion-requests`.
    pub files_to_delete_topic: String,
    /// The type used for events indicating that a request to delete a
    /// file has been received, e.g. `file_deletion_requested`.
    pub file_deletion_request_event_type: String,
}

/// For events indicating that a given file has been deleted successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDeletedEventsConfig {
    /// Name of the topic used for events indicating that a file has been
    /// deleted, e.g. `file-deletions`.
    pub file_deleted_event_topic: String,
    /// The type used for events indicating that a file has been deleted,
    /// e.g. `file_deleted`.
    pub file_deleted_event_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_fields_deserialize_from_flat_json() {
        let config: FileUploadReceivedEventsConfig = serde_json::from_str(
            r#"{
                "file_upload_received_topic": "received-file-uploads",
                "file_upload_received_event_type": "file_upload_received"
            }"#,
        )
        .unwrap();

        assert_eq!(config.file_upload_received_topic, "received-file-uploads");
        assert_eq!(
            config.file_upload_received_event_type,
            "file_upload_received"
        );
    }

    #[test]
    fn test_interrogation_configs_share_the_topic_field() {
        let success: FileValidationSuccessEventsConfig = serde_json::from_str(
            r#"{
                "file_interrogations_topic": "file-interrogations",
                "interrogation_success_event_type": "file_interrogation_success"
            }"#,
        )
        .unwrap();
        let failure: FileValidationFailureEventsConfig = serde_json::from_str(
            r#"{
                "file_interrogations_topic": "file-interrogations",
                "interrogation_failure_event_type": "file_interrogation_failed"
            }"#,
        )
        .unwrap();

        assert_eq!(
            success.file_interrogations_topic,
            failure.file_interrogations_topic
        );
    }
}
