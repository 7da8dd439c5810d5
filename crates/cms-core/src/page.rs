//! Page domain model

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::slug::slugify;

/// A standalone content page (About, etc.)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub title: String,
    pub slug: String,
    /// Body text, may embed lightweight markup (see [`crate::markup`])
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub published: bool,
    #[serde(with = "crate::timestamp")]
    pub created_at: OffsetDateTime,
    #[serde(with = "crate::timestamp")]
    pub updated_at: OffsetDateTime,
}

impl Page {
    /// Build a page from a draft with store-assigned id and timestamp
    pub fn from_draft(draft: PageDraft, id: String, now: OffsetDateTime) -> Self {
        Self {
            id,
            title: draft.title,
            slug: draft.slug,
            content: draft.content,
            featured_image: draft.featured_image,
            published: draft.published,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the set fields of `patch` and stamp `updated_at`
    pub fn apply(&mut self, patch: PagePatch, now: OffsetDateTime) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(slug) = patch.slug {
            self.slug = slug;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(featured_image) = patch.featured_image {
            self.featured_image = featured_image;
        }
        if let Some(published) = patch.published {
            self.published = published;
        }
        self.updated_at = now;
    }
}

/// Page fields supplied by the caller on creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDraft {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub published: bool,
}

impl PageDraft {
    /// New published draft with the slug derived from the title
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            slug: slugify(&title),
            title,
            content: content.into(),
            featured_image: None,
            published: true,
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn with_featured_image(mut self, url: impl Into<String>) -> Self {
        self.featured_image = Some(url.into());
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }
}

/// Partial page update. `None` leaves a field untouched;
/// `featured_image: Some(None)` clears the image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagePatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<Option<String>>,
    pub published: Option<bool>,
}
