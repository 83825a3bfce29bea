//! Config fields for auth-related events.

use serde::{Deserialize, Serialize};

/// For events conveying that a user's second authentication factor has
/// been recreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondFactorRecreatedEventsConfig {
    /// The name of the topic containing auth-related events, e.g.
    /// `auth-events`.
    pub auth_event_topic: String,
    /// The event type for recreation of the second authentication factor,
    /// e.g. `second_factor_recreated`.
    pub second_factor_recreated_event_type: String,
}
