use serde::{Deserialize, Serialize};

/// Predefined, user-visible fields of a push notification.
///
/// Every field is optional; fields left unset are omitted from the
/// serialized payload entirely.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Notification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Sound file to play on arrival, or `"default"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,

    /// Badge count shown on the client app icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,

    /// Replaces an existing notification with the same tag in the drawer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Action taken when the user taps the notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_action: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_loc_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_loc_args: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_loc_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_loc_args: Option<String>,
}
