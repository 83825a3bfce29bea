//! Config fields for access-request and IVA change events.

use serde::{Deserialize, Serialize};

/// For events conveying that an access request was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequestCreatedEventsConfig {
    /// Name of the event topic used to consume access request events,
    /// e.g. `access-requests`.
    pub access_request_events_topic: String,
    /// The type to use for access request created events, e.g.
    /// `access_request_created`.
    pub access_request_created_event_type: String,
}

/// For events conveying that an access request was allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequestAllowedEventsConfig {
    /// Name of the event topic used to consume access request events,
    /// e.g. `access-requests`.
    pub access_request_events_topic: String,
    /// The type to use for access request allowed events, e.g.
    /// `access_request_allowed`.
    pub access_request_allowed_event_type: String,
}

/// For events conveying that an access request was denied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequestDeniedEventsConfig {
    /// Name of the event topic used to consume access request events,
    /// e.g. `access-requests`.
    pub access_request_events_topic: String,
    /// The type to use for access request denied events, e.g.
    /// `access_request_denied`.
    pub access_request_denied_event_type: String,
}

/// For events communicating updates to IVA states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IvaChangeEventsConfig {
    /// The name of the topic containing IVA events, e.g. `ivas`.
    pub iva_state_changed_event_topic: String,
    /// The type to use for IVA state changed events, e.g.
    /// `iva_state_changed`.
    pub iva_state_changed_event_type: String,
}
