//! Config fields for notification events.

use serde::{Deserialize, Serialize};

/// For notification events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEventsConfig {
    /// Name of the topic used for notification events, e.g.
    /// `notifications`.
    pub notification_event_topic: String,
    /// The type used for notification events, e.g. `notification`.
    pub notification_event_type: String,
}
