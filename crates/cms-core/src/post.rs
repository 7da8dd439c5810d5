//! News post domain model

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::slug::slugify;

/// A dated news post, listed newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub published: bool,
    #[serde(with = "crate::timestamp")]
    pub published_at: OffsetDateTime,
    #[serde(with = "crate::timestamp")]
    pub created_at: OffsetDateTime,
    #[serde(with = "crate::timestamp")]
    pub updated_at: OffsetDateTime,
}

impl Post {
    /// Build a post from a draft. `published_at` falls back to `now`.
    pub fn from_draft(draft: PostDraft, id: String, now: OffsetDateTime) -> Self {
        Self {
            id,
            title: draft.title,
            slug: draft.slug,
            content: draft.content,
            excerpt: draft.excerpt,
            featured_image: draft.featured_image,
            published: draft.published,
            published_at: draft.published_at.unwrap_or(now),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the set fields of `patch` and stamp `updated_at`
    pub fn apply(&mut self, patch: PostPatch, now: OffsetDateTime) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(slug) = patch.slug {
            self.slug = slug;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(excerpt) = patch.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(featured_image) = patch.featured_image {
            self.featured_image = featured_image;
        }
        if let Some(published) = patch.published {
            self.published = published;
        }
        if let Some(published_at) = patch.published_at {
            self.published_at = published_at;
        }
        self.updated_at = now;
    }
}

/// Post fields supplied by the caller on creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: Option<String>,
    pub published: bool,
    /// Defaults to the creation time when unset
    pub published_at: Option<OffsetDateTime>,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        excerpt: impl Into<String>,
    ) -> Self {
        let title = title.into();
        Self {
            slug: slugify(&title),
            title,
            content: content.into(),
            excerpt: excerpt.into(),
            featured_image: None,
            published: true,
            published_at: None,
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

    pub fn with_published_at(mut self, at: OffsetDateTime) -> Self {
        self.published_at = Some(at);
        self
    }
}

/// Partial post update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub featured_image: Option<Option<String>>,
    pub published: Option<bool>,
    pub published_at: Option<OffsetDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_published_at_defaults_to_creation_time() {
        let now = datetime!(2024-09-01 08:00 UTC);
        let post = Post::from_draft(PostDraft::new("Fair", "...", "..."), "7".into(), now);

        assert_eq!(post.slug, "fair");
        assert_eq!(post.published_at, now);
        assert_eq!(post.created_at, now);
        assert_eq!(post.updated_at, now);
    }

    #[test]
    fn test_explicit_published_at_is_kept() {
        let at = datetime!(2024-08-31 12:00 UTC);
        let now = datetime!(2024-09-01 08:00 UTC);
        let post = Post::from_draft(
            PostDraft::new("Fair", "...", "...").with_published_at(at),
            "7".into(),
            now,
        );

        assert_eq!(post.published_at, at);
        assert_eq!(post.created_at, now);
    }

    #[test]
    fn test_unpublish_via_patch() {
        let now = datetime!(2024-09-01 08:00 UTC);
        let mut post = Post::from_draft(PostDraft::new("Fair", "...", "..."), "7".into(), now);

        post.apply(
            PostPatch {
                published: Some(false),
                ..Default::default()
            },
            datetime!(2024-09-01 09:00 UTC),
        );

        assert!(!post.published);
        assert_eq!(post.published_at, now);
        assert!(post.updated_at > post.created_at);
    }

    #[test]
    fn test_deserialize_browser_timestamps() {
        let json = r#"{
            "id": "1",
            "title": "Welcome",
            "slug": "welcome",
            "content": "Hello",
            "excerpt": "Hi",
            "published": true,
            "publishedAt": "2024-09-01T08:00:00.123Z",
            "createdAt": "2024-09-01T08:00:00.123Z",
            "updatedAt": "2024-09-01T08:00:00.123Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.featured_image, None);
        assert_eq!(post.created_at.millisecond(), 123);
    }
}
