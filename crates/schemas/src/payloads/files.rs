//! File lifecycle event payload schemas: upload, interrogation,
//! registration, staging, download, and deletion.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::schema::descriptor::{FieldKind, FieldSpec, SchemaDescriptor};
use crate::schema::validator::{EventPayload, validated_upload_date};

/// The stringified upload date field shared by upload-shaped schemas.
///
/// The string format follows ISO 8601; the constraint is the single shared
/// rule, so the accepted format cannot drift between schemas.
fn upload_date_field() -> FieldSpec {
    FieldSpec::new("upload_date", FieldKind::String).with_constraint(validated_upload_date)
}

/// Payload emitted when a new file upload is received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUploadReceived {
    /// The date and time when this file was uploaded, ISO 8601 encoded.
    pub upload_date: String,
    /// The public ID of the file as present in the metadata catalog.
    pub file_id: String,
    /// The ID of the file in the specific S3 bucket.
    pub object_id: String,
    /// The ID/name of the S3 bucket used to store the file.
    pub bucket_id: String,
    /// Alias for the object storage location holding the object. Uniquely
    /// mapped to an endpoint configuration in each service.
    pub s3_endpoint_alias: String,
    /// The public key of the submitter.
    pub submitter_public_key: String,
    /// The size of the entire decrypted file content in bytes.
    pub decrypted_size: i64,
    /// The expected SHA-256 checksum of the entire decrypted file content,
    /// to be validated.
    pub expected_decrypted_sha256: String,
}

impl EventPayload for FileUploadReceived {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("file_upload_received")
                .field(upload_date_field())
                .field(FieldSpec::new("file_id", FieldKind::String))
                .field(FieldSpec::new("object_id", FieldKind::String))
                .field(FieldSpec::new("bucket_id", FieldKind::String))
                .field(FieldSpec::new("s3_endpoint_alias", FieldKind::String))
                .field(FieldSpec::new("submitter_public_key", FieldKind::String))
                .field(FieldSpec::new("decrypted_size", FieldKind::Integer))
                .field(FieldSpec::new(
                    "expected_decrypted_sha256",
                    FieldKind::String,
                ))
        });
        &DESCRIPTOR
    }
}

/// Payload emitted when an uploaded file passes interrogation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUploadValidationSuccess {
    /// The date and time when this file was uploaded, ISO 8601 encoded.
    pub upload_date: String,
    /// The public ID of the file as present in the metadata catalog.
    pub file_id: String,
    /// The ID of the file in the specific S3 bucket.
    pub object_id: String,
    /// The ID/name of the S3 bucket used to store the file.
    pub bucket_id: String,
    /// Alias for the object storage location holding the object.
    pub s3_endpoint_alias: String,
    /// The size of the entire decrypted file content in bytes.
    pub decrypted_size: i64,
    /// The ID of the symmetric file encryption/decryption secret. Not the
    /// secret itself.
    pub decryption_secret_id: String,
    /// The offset in bytes at which the encrypted content starts
    /// (excluding the envelope).
    pub content_offset: i64,
    /// The part size in bytes used for the encrypted-part checksums. The
    /// same part size is recommended for moving that content.
    pub encrypted_part_size: i64,
    /// MD5 checksums of the encrypted content parts.
    pub encrypted_parts_md5: Vec<String>,
    /// SHA-256 checksums of the encrypted content parts.
    pub encrypted_parts_sha256: Vec<String>,
    /// The SHA-256 checksum of the entire decrypted file content.
    pub decrypted_sha256: String,
}

impl EventPayload for FileUploadValidationSuccess {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("file_upload_validation_success")
                .field(upload_date_field())
                .field(FieldSpec::new("file_id", FieldKind::String))
                .field(FieldSpec::new("object_id", FieldKind::String))
                .field(FieldSpec::new("bucket_id", FieldKind::String))
                .field(FieldSpec::new("s3_endpoint_alias", FieldKind::String))
                .field(FieldSpec::new("decrypted_size", FieldKind::Integer))
                .field(FieldSpec::new("decryption_secret_id", FieldKind::String))
                .field(FieldSpec::new("content_offset", FieldKind::Integer))
                .field(FieldSpec::new("encrypted_part_size", FieldKind::Integer))
                .field(FieldSpec::new(
                    "encrypted_parts_md5",
                    FieldKind::List(Box::new(FieldKind::String)),
                ))
                .field(FieldSpec::new(
                    "encrypted_parts_sha256",
                    FieldKind::List(Box::new(FieldKind::String)),
                ))
                .field(FieldSpec::new("decrypted_sha256", FieldKind::String))
        });
        &DESCRIPTOR
    }
}

/// Payload emitted when an uploaded file fails interrogation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUploadValidationFailure {
    /// The date and time when this file was uploaded, ISO 8601 encoded.
    pub upload_date: String,
    /// The public ID of the file as present in the metadata catalog.
    pub file_id: String,
    /// The ID of the file in the specific S3 bucket.
    pub object_id: String,
    /// The ID/name of the S3 bucket used to store the file.
    pub bucket_id: String,
    /// Alias for the object storage location holding the object.
    pub s3_endpoint_alias: String,
    /// The reason why the validation failed.
    pub reason: String,
}

impl EventPayload for FileUploadValidationFailure {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("file_upload_validation_failure")
                .field(upload_date_field())
                .field(FieldSpec::new("file_id", FieldKind::String))
                .field(FieldSpec::new("object_id", FieldKind::String))
                .field(FieldSpec::new("bucket_id", FieldKind::String))
                .field(FieldSpec::new("s3_endpoint_alias", FieldKind::String))
                .field(FieldSpec::new("reason", FieldKind::String))
        });
        &DESCRIPTOR
    }
}

/// Payload emitted when a newly uploaded file is internally registered.
///
/// Carries everything a successful interrogation carries, plus the size of
/// the encrypted content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInternallyRegistered {
    /// The date and time when this file was uploaded, ISO 8601 encoded.
    pub upload_date: String,
    /// The public ID of the file as present in the metadata catalog.
    pub file_id: String,
    /// The ID of the file in the specific S3 bucket.
    pub object_id: String,
    /// The ID/name of the S3 bucket used to store the file.
    pub bucket_id: String,
    /// Alias for the object storage location holding the object.
    pub s3_endpoint_alias: String,
    /// The size of the entire decrypted file content in bytes.
    pub decrypted_size: i64,
    /// The ID of the symmetric file encryption/decryption secret.
    pub decryption_secret_id: String,
    /// The offset in bytes at which the encrypted content starts.
    pub content_offset: i64,
    /// The part size in bytes used for the encrypted-part checksums.
    pub encrypted_part_size: i64,
    /// MD5 checksums of the encrypted content parts.
    pub encrypted_parts_md5: Vec<String>,
    /// SHA-256 checksums of the encrypted content parts.
    pub encrypted_parts_sha256: Vec<String>,
    /// The SHA-256 checksum of the entire decrypted file content.
    pub decrypted_sha256: String,
    /// The size of the encrypted file content in bytes, envelope excluded.
    pub encrypted_size: i64,
}

impl EventPayload for FileInternallyRegistered {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("file_internally_registered")
                .extend(FileUploadValidationSuccess::descriptor())
                .field(FieldSpec::new("encrypted_size", FieldKind::Integer))
        });
        &DESCRIPTOR
    }
}

/// Payload emitted when a file becomes downloadable through the DRS API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRegisteredForDownload {
    /// The date and time when this file was uploaded, ISO 8601 encoded.
    pub upload_date: String,
    /// The public ID of the file as present in the metadata catalog.
    pub file_id: String,
    /// The SHA-256 checksum of the entire decrypted file content.
    pub decrypted_sha256: String,
    /// A DRS URI for accessing the file.
    pub drs_uri: String,
}

impl EventPayload for FileRegisteredForDownload {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("file_registered_for_download")
                .field(upload_date_field())
                .field(FieldSpec::new("file_id", FieldKind::String))
                .field(FieldSpec::new("decrypted_sha256", FieldKind::String))
                .field(FieldSpec::new("drs_uri", FieldKind::String))
        });
        &DESCRIPTOR
    }
}

/// Payload emitted when a user requests a file that is not yet in the
/// outbox and has to be staged first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonStagedFileRequested {
    /// The public ID of the file as present in the metadata catalog.
    pub file_id: String,
    /// The ID of the file in the specific S3 bucket.
    pub target_object_id: String,
    /// The ID/name of the S3 bucket in which the object was expected.
    pub target_bucket_id: String,
    /// Alias for the object storage location holding the object.
    pub s3_endpoint_alias: String,
    /// The SHA-256 checksum of the entire decrypted file content.
    pub decrypted_sha256: String,
}

impl EventPayload for NonStagedFileRequested {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("non_staged_file_requested")
                .field(FieldSpec::new("file_id", FieldKind::String))
                .field(FieldSpec::new("target_object_id", FieldKind::String))
                .field(FieldSpec::new("target_bucket_id", FieldKind::String))
                .field(FieldSpec::new("s3_endpoint_alias", FieldKind::String))
                .field(FieldSpec::new("decrypted_sha256", FieldKind::String))
        });
        &DESCRIPTOR
    }
}

/// Payload emitted when a file is staged to the outbox storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStagedForDownload {
    /// The public ID of the file as present in the metadata catalog.
    pub file_id: String,
    /// The ID of the file in the specific S3 bucket.
    pub target_object_id: String,
    /// The ID/name of the S3 bucket in which the object was expected.
    pub target_bucket_id: String,
    /// Alias for the object storage location holding the object.
    pub s3_endpoint_alias: String,
    /// The SHA-256 checksum of the entire decrypted file content.
    pub decrypted_sha256: String,
}

impl EventPayload for FileStagedForDownload {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("file_staged_for_download")
                .extend(NonStagedFileRequested::descriptor())
        });
        &DESCRIPTOR
    }
}

/// Payload emitted when file content was served for download. Useful for
/// auditing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDownloadServed {
    /// The public ID of the file as present in the metadata catalog.
    pub file_id: String,
    /// The ID of the file in the specific S3 bucket.
    pub target_object_id: String,
    /// The ID/name of the S3 bucket in which the object was expected.
    pub target_bucket_id: String,
    /// Alias for the object storage location holding the object.
    pub s3_endpoint_alias: String,
    /// The SHA-256 checksum of the entire decrypted file content.
    pub decrypted_sha256: String,
    /// The context in which the download was served (e.g. the ID of the
    /// data access request).
    pub context: String,
}

impl EventPayload for FileDownloadServed {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("file_download_served")
                .extend(NonStagedFileRequested::descriptor())
                .field(FieldSpec::new("context", FieldKind::String))
        });
        &DESCRIPTOR
    }
}

/// Payload emitted when the deletion of a file from the file backend has
/// been requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDeletionRequested {
    /// The public ID of the file as present in the metadata catalog.
    pub file_id: String,
}

impl EventPayload for FileDeletionRequested {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("file_deletion_requested")
                .field(FieldSpec::new("file_id", FieldKind::String))
        });
        &DESCRIPTOR
    }
}

/// Payload emitted when a service has deleted a file from its database and
/// the buckets it controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDeletionSuccess {
    /// The public ID of the file as present in the metadata catalog.
    pub file_id: String,
}

impl EventPayload for FileDeletionSuccess {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("file_deletion_success")
                .extend(FileDeletionRequested::descriptor())
        });
        &DESCRIPTOR
    }
}
