use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::{Notification, Priority};

/// One message passed from an app server to client apps via the relay.
///
/// The notification payload and the custom data payload are fixed when the
/// message is created; the remaining delivery options can be adjusted
/// between serializations. The recipient is not part of the message, so a
/// single value can be serialized for any number of tokens or topics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PushMessage {
    notification: Option<Notification>,
    data: Option<Value>,

    /// Identifies a group of messages that can be collapsed, so only the
    /// last one is sent when delivery to the device resumes.
    pub collapse_key: Option<String>,

    /// How long (in seconds) the relay keeps the message for an offline
    /// device. The relay supports at most 4 weeks (2419200 s), which is
    /// also its default.
    pub time_to_live: Option<u32>,

    pub priority: Option<Priority>,

    /// Package name the recipient's registration token must match in order
    /// to receive the message.
    pub restricted_package_name: Option<String>,

    /// Test the request without actually delivering the message.
    pub dry_run: Option<bool>,

    /// Silent push: wake the app in the background without a user prompt.
    pub content_available: Option<bool>,

    /// Let the client's service extension modify the message before it is
    /// displayed.
    pub mutable_content: Option<bool>,
}

impl PushMessage {
    pub fn new(notification: Option<Notification>, data: Option<Value>) -> PushMessage {
        PushMessage {
            notification,
            data,
            ..PushMessage::default()
        }
    }

    /// Predefined, user-visible payload this message was created with.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Custom key-value payload this message was created with.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Serializes the message for one recipient, a registration token or a
    /// topic name. Unset fields are omitted from the document entirely;
    /// the recipient string is passed through as is, since the relay owns
    /// its validation.
    ///
    /// Fails only if the notification payload tree cannot be serialized.
    pub fn make_json(&self, recipient: &str) -> Result<Value> {
        let envelope = Envelope {
            to: recipient,
            notification: self.notification.as_ref(),
            data: self.data.as_ref(),
            priority: self.priority,
            content_available: self.content_available,
            mutable_content: self.mutable_content,
            time_to_live: self.time_to_live,
            collapse_key: self.collapse_key.as_deref(),
            restricted_package_name: self.restricted_package_name.as_deref(),
            dry_run: self.dry_run,
        };

        Ok(serde_json::to_value(envelope)?)
    }
}

/// Wire shape of a send request. `to` is always present; every other key
/// is emitted iff the field is set on the message.
#[derive(Serialize)]
struct Envelope<'a> {
    to: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    notification: Option<&'a Notification>,

    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    content_available: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    mutable_content: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    time_to_live: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    collapse_key: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    restricted_package_name: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    dry_run: Option<bool>,
}
