//! User event payload schemas.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::schema::descriptor::{FieldKind, FieldSpec, SchemaDescriptor};
use crate::schema::validator::EventPayload;

/// Generic event payload relaying a user ID.
///
/// Also used for second-factor recreation events, which carry nothing but
/// the affected user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserID {
    /// The user ID.
    pub user_id: String,
}

impl EventPayload for UserID {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("user_id").field(FieldSpec::new("user_id", FieldKind::String))
        });
        &DESCRIPTOR
    }
}

/// Academic title of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcademicTitle {
    #[serde(rename = "Dr.")]
    Dr,
    #[serde(rename = "Prof.")]
    Prof,
}

impl AcademicTitle {
    /// The wire literals accepted for this enumeration.
    pub const LITERALS: &'static [&'static str] = &["Dr.", "Prof."];
}

/// Payload publishing user data changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user ID.
    pub user_id: String,
    /// Full name of the user.
    pub name: String,
    /// Academic title of the user, if any.
    #[serde(default)]
    pub title: Option<AcademicTitle>,
    /// Preferred e-mail address of the user.
    pub email: String,
}

impl EventPayload for User {
    fn descriptor() -> &'static SchemaDescriptor {
        static DESCRIPTOR: LazyLock<SchemaDescriptor> = LazyLock::new(|| {
            SchemaDescriptor::new("user")
                .extend(UserID::descriptor())
                .field(FieldSpec::new("name", FieldKind::String))
                .field(
                    FieldSpec::new(
                        "title",
                        FieldKind::Nullable(Box::new(FieldKind::Enumerated(
                            AcademicTitle::LITERALS,
                        ))),
                    )
                    .optional(),
                )
                .field(FieldSpec::new("email", FieldKind::Email))
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
    fn test_user_title_is_optional_and_nullable() {
        let payload = json!({
            "user_id": "user-1",
            "name": "Rosalind Franklin",
            "email": "rf@home.org"
        })
        .as_object()
        .cloned()
        .unwrap();

        let user: User = get_validated_payload(&payload).unwrap();
        assert_eq!(user.title, None);

        let payload = json!({
            "user_id": "user-1",
            "name": "Rosalind Franklin",
            "title": "Dr.",
            "email": "rf@home.org"
        })
        .as_object()
        .cloned()
        .unwrap();

        let user: User = get_validated_payload(&payload).unwrap();
        assert_eq!(user.title, Some(AcademicTitle::Dr));
    }

    #[test]
    fn test_unknown_title_literal_is_mistyped() {
        let payload = json!({
            "user_id": "user-1",
            "name": "Rosalind Franklin",
            "title": "Sir",
            "email": "rf@home.org"
        })
        .as_object()
        .cloned()
        .unwrap();

        let error = get_validated_payload::<User>(&payload).unwrap_err();
        assert!(error.error_info.mistyped_fields.contains_key("title"));
    }
}
