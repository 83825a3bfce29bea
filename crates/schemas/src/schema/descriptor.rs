//! Schema descriptors for event payloads.
//!
//! A descriptor is the declared shape of one event payload: an ordered set
//! of named, typed field specifications, plus optional custom constraints.
//! Descriptors are plain data built once per payload type and drive the
//! generic validation routine in [`validator`](crate::schema::validator).

use serde_json::Value;

use crate::schema::validator::{JsonObject, SchemaErrorInfo};

/// A custom validation rule applied to a string-kinded field after its type
/// check passes. The returned `Err` becomes the field's mistyped reason.
pub type Constraint = fn(&str) -> Result<(), String>;

/// The kind of value a payload field must hold.
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// A JSON string.
    String,
    /// A 64-bit signed integer.
    Integer,
    /// A JSON boolean.
    Boolean,
    /// An email address string.
    Email,
    /// An RFC 3339 date/time string.
    DateTime,
    /// A string restricted to a fixed set of literals.
    Enumerated(&'static [&'static str]),
    /// A JSON array whose elements all match the inner kind.
    List(Box<FieldKind>),
    /// A nested record matching another payload's descriptor.
    Record(fn() -> &'static SchemaDescriptor),
    /// A free-form JSON object.
    Object,
    /// The inner kind, or JSON null.
    Nullable(Box<FieldKind>),
}

impl FieldKind {
    /// Checks a single value against this kind, returning a human-readable
    /// reason on mismatch.
    pub fn check(&self, value: &Value) -> Result<(), String> {
        match self {
            FieldKind::String => match value.as_str() {
                Some(_) => Ok(()),
                None => Err(type_mismatch("a string", value)),
            },
            FieldKind::Integer => {
                if value.as_i64().is_some() {
                    Ok(())
                } else if value.is_number() {
                    Err("expected a 64-bit integer, got an out-of-range or fractional number"
                        .to_string())
                } else {
                    Err(type_mismatch("an integer", value))
                }
            }
            FieldKind::Boolean => {
                if value.is_boolean() {
                    Ok(())
                } else {
                    Err(type_mismatch("a boolean", value))
                }
            }
            FieldKind::Email => match value.as_str() {
                Some(text) if text.contains('@') => Ok(()),
                Some(text) => Err(format!("not a valid email address: {text}")),
                None => Err(type_mismatch("an email address string", value)),
            },
            FieldKind::DateTime => match value.as_str() {
                Some(text) => chrono::DateTime::parse_from_rfc3339(text)
                    .map(|_| ())
                    .map_err(|_| format!("not a valid RFC 3339 date/time: {text}")),
                None => Err(type_mismatch("a date/time string", value)),
            },
            FieldKind::Enumerated(allowed) => match value.as_str() {
                Some(text) if allowed.contains(&text) => Ok(()),
                Some(text) => Err(format!(
                    "value {text:?} is not one of the allowed literals [{}]",
                    allowed.join(", ")
                )),
                None => Err(type_mismatch("an enumerated string", value)),
            },
            FieldKind::List(inner) => match value.as_array() {
                Some(items) => {
                    for (index, item) in items.iter().enumerate() {
                        inner
                            .check(item)
                            .map_err(|reason| format!("element {index} is invalid: {reason}"))?;
                    }
                    Ok(())
                }
                None => Err(type_mismatch("an array", value)),
            },
            FieldKind::Record(descriptor) => match value.as_object() {
                Some(object) => {
                    let descriptor = descriptor();
                    descriptor.check(object).map_err(|error_info| {
                        format!(
                            "does not match the {} record schema: {error_info}",
                            descriptor.name
                        )
                    })
                }
                None => Err(type_mismatch("an object", value)),
            },
            FieldKind::Object => {
                if value.is_object() {
                    Ok(())
                } else {
                    Err(type_mismatch("an object", value))
                }
            }
            FieldKind::Nullable(inner) => {
                if value.is_null() {
                    Ok(())
                } else {
                    inner.check(value)
                }
            }
        }
    }
}

fn type_mismatch(expected: &str, value: &Value) -> String {
    format!("expected {expected}, got {}", json_type_name(value))
}

/// Returns the JSON type name of a value, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The specification of one payload field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// The field name as it appears in the payload.
    pub name: &'static str,
    /// The kind of value the field must hold.
    pub kind: FieldKind,
    /// Whether the field must be present in the payload.
    pub required: bool,
    /// Optional custom rule applied after the kind check.
    pub constraint: Option<Constraint>,
}

impl FieldSpec {
    /// Creates a new required field specification.
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            constraint: None,
        }
    }

    /// Marks the field as optional: an absent value is not a fault.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Attaches a custom constraint to the field.
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    /// Checks a present value against the field's kind and constraint.
    pub fn check_value(&self, value: &Value) -> Result<(), String> {
        self.kind.check(value)?;
        if let Some(constraint) = self.constraint {
            if let Some(text) = value.as_str() {
                constraint(text)?;
            }
        }
        Ok(())
    }
}

/// The declared shape of one event payload.
///
/// Descriptors are read-only after construction and hold no interior
/// mutability, so shared references can be checked against payloads from
/// any number of threads concurrently.
#[derive(Debug, Clone)]
pub struct SchemaDescriptor {
    /// The schema name, e.g. `file_upload_received`.
    pub name: &'static str,
    /// The declared fields, in declaration order.
    pub fields: Vec<FieldSpec>,
}

impl SchemaDescriptor {
    /// Creates a new descriptor with no fields.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Adds a field to the descriptor.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Flattens another descriptor's field set into this one.
    ///
    /// This is how a schema embeds a shared base field set: the base fields
    /// are copied in ahead of the fields declared afterwards.
    pub fn extend(mut self, base: &SchemaDescriptor) -> Self {
        self.fields.extend(base.fields.iter().cloned());
        self
    }

    /// Returns whether a field with the given name is declared.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|spec| spec.name == name)
    }

    /// Returns the declared field names in declaration order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|spec| spec.name).collect()
    }

    /// Checks a payload against this descriptor in one exhaustive pass.
    ///
    /// Every independently detectable fault is collected: missing required
    /// fields in declaration order, mistyped fields with their reasons, and
    /// undeclared payload keys. Undeclared keys alone never fail a payload;
    /// the report is only constructed once a missing or mistyped fault puts
    /// the call on the failure path.
    pub fn check(&self, payload: &JsonObject) -> Result<(), SchemaErrorInfo> {
        let mut missing_fields = Vec::new();
        let mut mistyped_fields = std::collections::BTreeMap::new();

        for spec in &self.fields {
            match payload.get(spec.name) {
                None => {
                    if spec.required {
                        missing_fields.push(spec.name.to_string());
                    }
                }
                Some(value) => {
                    if let Err(reason) = spec.check_value(value) {
                        mistyped_fields.insert(spec.name.to_string(), reason);
                    }
                }
            }
        }

        if missing_fields.is_empty() && mistyped_fields.is_empty() {
            return Ok(());
        }

        let unexpected_fields = payload
            .keys()
            .filter(|key| !self.has_field(key))
            .cloned()
            .collect();

        Err(SchemaErrorInfo {
            missing_fields,
            mistyped_fields,
            unexpected_fields,
        })
    }
}
