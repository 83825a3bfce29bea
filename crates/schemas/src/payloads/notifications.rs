//! Notification event payload schema.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::schema::descriptor::{FieldKind, FieldSpec, SchemaDescriptor};
use crate::schema::validator::EventPayload;

/// Payload emitted by any service that wants an email notification sent.
/// Picked up by the notification service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// The primary recipient of the email.
    pub recipient_email: String,
    /// Recipients cc'd on the email.
    #[serde(default)]
    pub email_cc: Vec<String>,
    /// Recipients bcc'd on the email.
    #[serde(default)]
    pub email_bcc: Vec<String>,
    /// The subject line for the notification.
    pub subject: String,
    /// The full name of the recipient, used in the greeting section.
    pub recipient_name: String,
    /// The basic text for the notification body.
    pub plaintext_body: String,
}

impl EventPayload for Notification {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("notification")
                .field(FieldSpec::new("recipient_email", FieldKind::Email))
                .field(
                    FieldSpec::new("email_cc", FieldKind::List(Box::new(FieldKind::Email)))
                        .optional(),
                )
                .field(
                    FieldSpec::new("email_bcc", FieldKind::List(Box::new(FieldKind::Email)))
                        .optional(),
                )
                .field(FieldSpec::new("subject", FieldKind::String))
                .field(FieldSpec::new("recipient_name", FieldKind::String))
                .field(FieldSpec::new("plaintext_body", FieldKind::String))
        });
        &DESCRIPTOR
    }
}
