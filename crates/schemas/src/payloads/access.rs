//! Access-request and IVA event payload schemas.
//!
//! IVAs (independent verification addresses) are the out-of-band contact
//! addresses used to verify a user before access to a dataset is granted.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::payloads::users::UserID;
use crate::schema::descriptor::{FieldKind, FieldSpec, SchemaDescriptor};
use crate::schema::validator::EventPayload;

/// The status of an access request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessRequestStatus {
    Allowed,
    Denied,
    Pending,
}

impl AccessRequestStatus {
    /// The wire literals accepted for this enumeration.
    pub const LITERALS: &'static [&'static str] = &["allowed", "denied", "pending"];
}

/// Payload conveying the details of a data access request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequestDetails {
    /// The requesting user's ID.
    pub user_id: String,
    /// The access request ID.
    pub id: String,
    /// The dataset ID.
    pub dataset_id: String,
    /// The dataset title.
    pub dataset_title: String,
    /// A description of the dataset.
    #[serde(default)]
    pub dataset_description: Option<String>,
    /// The status of the access request.
    pub status: AccessRequestStatus,
    /// Text note submitted with the request.
    pub request_text: String,
    /// The alias of the Data Access Committee responsible for the dataset.
    pub dac_alias: String,
    /// The email address of the Data Access Committee.
    pub dac_email: String,
    /// The ID of the ticket associated with the access request.
    #[serde(default)]
    pub ticket_id: Option<String>,
    /// A note about the request only visible to Data Stewards.
    #[serde(default)]
    pub internal_note: Option<String>,
    /// A note about the request that is visible to the requester.
    #[serde(default)]
    pub note_to_requester: Option<String>,
    /// The beginning of the access validity period as a UTC date/time.
    pub access_starts: DateTime<Utc>,
    /// The end of the access validity period as a UTC date/time.
    pub access_ends: DateTime<Utc>,
}

impl EventPayload for AccessRequestDetails {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("access_request_details")
                .extend(UserID::descriptor())
                .field(FieldSpec::new("id", FieldKind::String))
                .field(FieldSpec::new("dataset_id", FieldKind::String))
                .field(FieldSpec::new("dataset_title", FieldKind::String))
                .field(
                    FieldSpec::new(
                        "dataset_description",
                        FieldKind::Nullable(Box::new(FieldKind::String)),
                    )
                    .optional(),
                )
                .field(FieldSpec::new(
                    "status",
                    FieldKind::Enumerated(AccessRequestStatus::LITERALS),
                ))
                .field(FieldSpec::new("request_text", FieldKind::String))
                .field(FieldSpec::new("dac_alias", FieldKind::String))
                .field(FieldSpec::new("dac_email", FieldKind::Email))
                .field(
                    FieldSpec::new("ticket_id", FieldKind::Nullable(Box::new(FieldKind::String)))
                        .optional(),
                )
                .field(
                    FieldSpec::new(
                        "internal_note",
                        FieldKind::Nullable(Box::new(FieldKind::String)),
                    )
                    .optional(),
                )
                .field(
                    FieldSpec::new(
                        "note_to_requester",
                        FieldKind::Nullable(Box::new(FieldKind::String)),
                    )
                    .optional(),
                )
                .field(FieldSpec::new("access_starts", FieldKind::DateTime))
                .field(FieldSpec::new("access_ends", FieldKind::DateTime))
        });
        &DESCRIPTOR
    }
}

/// The type of an IVA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IvaType {
    Phone,
    Fax,
    PostalAddress,
    InPerson,
}

impl IvaType {
    /// The wire literals accepted for this enumeration.
    pub const LITERALS: &'static [&'static str] = &["Phone", "Fax", "PostalAddress", "InPerson"];
}

/// The state of an IVA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IvaState {
    Unverified,
    CodeRequested,
    CodeCreated,
    CodeTransmitted,
    Verified,
}

impl IvaState {
    /// The wire literals accepted for this enumeration.
    pub const LITERALS: &'static [&'static str] = &[
        "Unverified",
        "CodeRequested",
        "CodeCreated",
        "CodeTransmitted",
        "Verified",
    ];
}

/// Notification payload for state changes of a user's IVA(s).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIvaState {
    /// The affected user's ID.
    pub user_id: String,
    /// The value of the IVA (null addresses all IVAs of the user).
    pub value: Option<String>,
    /// The type of the IVA (null addresses all IVAs of the user).
    pub r#type: Option<IvaType>,
    /// The new state of the IVA.
    pub state: IvaState,
}

impl EventPayload for UserIvaState {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("iva_state_change")
                .extend(UserID::descriptor())
                .field(FieldSpec::new(
                    "value",
                    FieldKind::Nullable(Box::new(FieldKind::String)),
                ))
                .field(FieldSpec::new(
                    "type",
                    FieldKind::Nullable(Box::new(FieldKind::Enumerated(IvaType::LITERALS))),
                ))
                .field(FieldSpec::new(
                    "state",
                    FieldKind::Enumerated(IvaState::LITERALS),
                ))
        });
        &DESCRIPTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validator::get_validated_payload;
    use serde_json::json;

    #[test]
    fn test_iva_state_null_value_and_type_are_valid_but_required() {
        let payload = json!({
            "user_id": "user-1",
            "value": null,
            "type": null,
            "state": "Verified"
        })
        .as_object()
        .cloned()
        .unwrap();

        let state: UserIvaState = get_validated_payload(&payload).unwrap();
        assert_eq!(state.value, None);
        assert_eq!(state.state, IvaState::Verified);

        // Omitting the nullable fields entirely is a different thing: a fault.
        let payload = json!({"user_id": "user-1", "state": "Verified"})
            .as_object()
            .cloned()
            .unwrap();

        let error = get_validated_payload::<UserIvaState>(&payload).unwrap_err();
        assert_eq!(error.error_info.missing_fields, vec!["value", "type"]);
    }

    #[test]
    fn test_access_request_datetime_fields() {
        let payload = json!({
            "user_id": "user-1",
            "id": "req-1",
            "dataset_id": "ds-1",
            "dataset_title": "Some dataset",
            "status": "pending",
            "request_text": "please",
            "dac_alias": "dac-1",
            "dac_email": "dac@example.org",
            "access_starts": "2024-03-01T00:00:00Z",
            "access_ends": "2025-03-01T00:00:00Z"
        })
        .as_object()
        .cloned()
        .unwrap();

        let details: AccessRequestDetails = get_validated_payload(&payload).unwrap();
        assert_eq!(details.status, AccessRequestStatus::Pending);
        assert!(details.access_starts < details.access_ends);

        let mut bad = payload.clone();
        bad.insert("access_starts".into(), json!("yesterday"));
        let error = get_validated_payload::<AccessRequestDetails>(&bad).unwrap_err();
        assert!(error.error_info.mistyped_fields.contains_key("access_starts"));
    }
}
