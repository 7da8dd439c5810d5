use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An uploaded or linked file shown in the gallery, downloads or news
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub file_url: String,
    pub file_type: MediaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub category: MediaCategory,
    #[serde(with = "crate::timestamp")]
    pub created_at: OffsetDateTime,
}

impl Media {
    pub fn from_draft(draft: MediaDraft, id: String, now: OffsetDateTime) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            file_url: draft.file_url,
            file_type: draft.file_type,
            file_size: draft.file_size,
            mime_type: draft.mime_type,
            category: draft.category,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Pdf,
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Gallery,
    Downloads,
    News,
    General,
}

/// Media fields supplied by the caller on creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDraft {
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub file_type: MediaType,
    pub file_size: Option<u64>,
    pub mime_type: Option<String>,
    pub category: MediaCategory,
}

impl MediaDraft {
    pub fn new(
        title: impl Into<String>,
        file_url: impl Into<String>,
        file_type: MediaType,
        category: MediaCategory,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            file_url: file_url.into(),
            file_type,
            file_size: None,
            mime_type: None,
            category,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_file_size(mut self, bytes: u64) -> Self {
        self.file_size = Some(bytes);
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&MediaType::Pdf).unwrap(), "\"pdf\"");
        assert_eq!(
            serde_json::to_string(&MediaCategory::Downloads).unwrap(),
            "\"downloads\""
        );
    }

    #[test]
    fn test_unknown_file_type_is_rejected() {
        let json = r#"{
            "id": "1",
            "title": "Clip",
            "fileUrl": "/clip.gif",
            "fileType": "gif",
            "category": "gallery",
            "createdAt": "2024-09-01T08:00:00Z"
        }"#;
        assert!(serde_json::from_str::<Media>(json).is_err());
    }
}
