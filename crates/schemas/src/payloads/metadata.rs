//! Metadata catalog event payload schemas: datasets, searchable resources,
//! artifacts, and metadata submissions.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::schema::descriptor::{FieldKind, FieldSpec, SchemaDescriptor};
use crate::schema::validator::{EventPayload, JsonObject};

/// The current stage that a metadata dataset is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataDatasetStage {
    Download,
    Upload,
}

impl MetadataDatasetStage {
    /// The wire literals accepted for this enumeration.
    pub const LITERALS: &'static [&'static str] = &["download", "upload"];
}

/// A file that is part of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataDatasetFile {
    /// The file accession.
    pub accession: String,
    /// The description of the file.
    pub description: Option<String>,
    /// The file extension with a leading dot.
    pub file_extension: String,
}

impl EventPayload for MetadataDatasetFile {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("metadata_dataset_file")
                .field(FieldSpec::new("accession", FieldKind::String))
                .field(FieldSpec::new(
                    "description",
                    FieldKind::Nullable(Box::new(FieldKind::String)),
                ))
                .field(FieldSpec::new("file_extension", FieldKind::String))
        });
        &DESCRIPTOR
    }
}

/// Payload identifying a dataset, e.g. for deletion events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataDatasetID {
    /// The dataset accession.
    pub accession: String,
}

impl EventPayload for MetadataDatasetID {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("metadata_dataset_id")
                .field(FieldSpec::new("accession", FieldKind::String))
        });
        &DESCRIPTOR
    }
}

/// Overview of the files contained in a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataDatasetOverview {
    /// The dataset accession.
    pub accession: String,
    /// The title of the dataset.
    pub title: String,
    /// The current stage of this dataset.
    pub stage: MetadataDatasetStage,
    /// The description of the dataset.
    pub description: Option<String>,
    /// The alias of the Data Access Committee.
    pub dac_alias: String,
    /// The email address of the Data Access Committee.
    pub dac_email: String,
    /// Files contained in the dataset.
    pub files: Vec<MetadataDatasetFile>,
}

impl EventPayload for MetadataDatasetOverview {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("metadata_dataset_overview")
                .extend(MetadataDatasetID::descriptor())
                .field(FieldSpec::new("title", FieldKind::String))
                .field(FieldSpec::new(
                    "stage",
                    FieldKind::Enumerated(MetadataDatasetStage::LITERALS),
                ))
                .field(FieldSpec::new(
                    "description",
                    FieldKind::Nullable(Box::new(FieldKind::String)),
                ))
                .field(FieldSpec::new("dac_alias", FieldKind::String))
                .field(FieldSpec::new("dac_email", FieldKind::Email))
                .field(FieldSpec::new(
                    "files",
                    FieldKind::List(Box::new(FieldKind::Record(MetadataDatasetFile::descriptor))),
                ))
        });
        &DESCRIPTOR
    }
}

/// Identifying information about an artifact's resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableResourceInfo {
    /// The resource accession.
    pub accession: String,
    /// The name of the class this artifact resource corresponds to.
    pub class_name: String,
}

impl EventPayload for SearchableResourceInfo {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("searchable_resource_info")
                .field(FieldSpec::new("accession", FieldKind::String))
                .field(FieldSpec::new("class_name", FieldKind::String))
        });
        &DESCRIPTOR
    }
}

/// A searchable resource with its metadata content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableResource {
    /// The resource accession.
    pub accession: String,
    /// The name of the class this artifact resource corresponds to.
    pub class_name: String,
    /// The metadata content of this artifact resource.
    pub content: JsonObject,
}

impl EventPayload for SearchableResource {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("searchable_resource")
                .extend(SearchableResourceInfo::descriptor())
                .field(FieldSpec::new("content", FieldKind::Object))
        });
        &DESCRIPTOR
    }
}

/// A tag identifying an artifact: its name plus the study it pertains to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactTag {
    /// The ID of the study this artifact pertains to.
    pub study_accession: String,
    /// The name of the artifact.
    pub artifact_name: String,
}

impl EventPayload for ArtifactTag {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("artifact_tag")
                .field(FieldSpec::new("study_accession", FieldKind::String))
                .field(FieldSpec::new("artifact_name", FieldKind::String))
        });
        &DESCRIPTOR
    }
}

/// An artifact with its metadata content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// The ID of the study this artifact pertains to.
    pub study_accession: String,
    /// The name of the artifact.
    pub artifact_name: String,
    /// The metadata content of the artifact.
    pub content: JsonObject,
}

impl EventPayload for Artifact {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("artifact")
                .extend(ArtifactTag::descriptor())
                .field(FieldSpec::new("content", FieldKind::Object))
        });
        &DESCRIPTOR
    }
}

/// A file associated with or affected by a metadata submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataSubmissionFiles {
    /// The public ID of the file as present in the metadata catalog.
    pub file_id: String,
    /// The name of the file as it was submitted.
    pub file_name: String,
    /// The size of the entire decrypted file content in bytes.
    pub decrypted_size: i64,
    /// The SHA-256 checksum of the entire decrypted file content.
    pub decrypted_sha256: String,
}

impl EventPayload for MetadataSubmissionFiles {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("metadata_submission_files")
                .field(FieldSpec::new("file_id", FieldKind::String))
                .field(FieldSpec::new("file_name", FieldKind::String))
                .field(FieldSpec::new("decrypted_size", FieldKind::Integer))
                .field(FieldSpec::new("decrypted_sha256", FieldKind::String))
        });
        &DESCRIPTOR
    }
}

/// Payload emitted when a metadata submission is created or updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataSubmissionUpserted {
    /// The files associated with the submission.
    pub associated_files: Vec<MetadataSubmissionFiles>,
}

impl EventPayload for MetadataSubmissionUpserted {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("metadata_submission_upserted").field(FieldSpec::new(
                "associated_files",
                FieldKind::List(Box::new(FieldKind::Record(
                    MetadataSubmissionFiles::descriptor,
                ))),
            ))
        });
        &DESCRIPTOR
    }
}
