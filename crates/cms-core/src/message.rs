use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A submission from the public contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub read: bool,
    #[serde(with = "crate::timestamp")]
    pub created_at: OffsetDateTime,
}

impl ContactMessage {
    /// New messages always start unread
    pub fn from_draft(draft: MessageDraft, id: String, now: OffsetDateTime) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            message: draft.message,
            read: false,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl MessageDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}
