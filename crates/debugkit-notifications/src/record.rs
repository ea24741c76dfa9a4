//! Notification content adapters and storage records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use debugkit_core::Recordable;

/// Where a notification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationOrigin {
    /// Delivered by a remote push.
    Push,
    /// Scheduled locally on the device.
    Local,
}

/// The displayed content of one delivered notification.
///
/// Copies the fields the toolkit needs out of the platform notification at
/// construction time; the live OS object is never retained.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationContent {
    origin: NotificationOrigin,
    category: String,
    title: String,
    subtitle: String,
    body: String,
    payload: Option<serde_json::Value>,
}

impl NotificationContent {
    /// Capture notification content.
    pub fn new(
        origin: NotificationOrigin,
        category: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            origin,
            category: category.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            body: body.into(),
            payload: None,
        }
    }

    /// Attach the raw userinfo payload delivered with the notification.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

impl Recordable for NotificationContent {
    type Record = NotificationRecord;

    fn into_record(self) -> Self::Record {
        NotificationRecord {
            id: Uuid::new_v4(),
            origin: self.origin,
            category: self.category,
            title: self.title,
            subtitle: self.subtitle,
            body: self.body,
            payload: self.payload,
        }
    }
}

/// The serializable summary of a delivered notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    /// Stable identity of this record.
    pub id: Uuid,
    /// Where the notification came from.
    pub origin: NotificationOrigin,
    /// The notification's category identifier.
    pub category: String,
    /// Title text.
    pub title: String,
    /// Subtitle text.
    pub subtitle: String,
    /// Body text.
    pub body: String,
    /// Raw userinfo payload, when one was delivered.
    pub payload: Option<serde_json::Value>,
}

impl NotificationRecord {
    /// The remote payload pretty-printed as JSON.
    ///
    /// Only push-originated records carry a remote payload; local ones
    /// return `None`.
    pub fn remote_payload_json(&self) -> Result<Option<String>, serde_json::Error> {
        match (self.origin, &self.payload) {
            (NotificationOrigin::Push, Some(payload)) => {
                serde_json::to_string_pretty(payload).map(Some)
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn content() -> NotificationContent {
        NotificationContent::new(
            NotificationOrigin::Push,
            "com.test.test",
            "title",
            "subtitle",
            "message",
        )
    }

    #[test]
    fn test_into_record_copies_all_fields() {
        let record = content()
            .with_payload(json!({"aps": {"alert": "hello"}}))
            .into_record();

        assert_eq!(record.origin, NotificationOrigin::Push);
        assert_eq!(record.category, "com.test.test");
        assert_eq!(record.title, "title");
        assert_eq!(record.subtitle, "subtitle");
        assert_eq!(record.body, "message");
        assert!(record.payload.is_some());
    }

    #[test]
    fn test_records_have_distinct_identities() {
        let a = content().into_record();
        let b = content().into_record();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_remote_payload_json_only_for_push_records() {
        let payload = json!({"aps": {"badge": 1}});

        let push = content().with_payload(payload.clone()).into_record();
        let rendered = push.remote_payload_json().unwrap().unwrap();
        assert!(rendered.contains("badge"));

        let local = NotificationContent::new(
            NotificationOrigin::Local,
            "com.test.test",
            "title",
            "",
            "message",
        )
        .with_payload(payload)
        .into_record();
        assert!(local.remote_payload_json().unwrap().is_none());
    }

    #[test]
    fn test_record_serializes_losslessly() {
        let record = content().with_payload(json!({"key": "value"})).into_record();

        let encoded = serde_json::to_string(&record).unwrap();
        let decoded: NotificationRecord = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, record);
    }
}
