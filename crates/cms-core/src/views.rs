//! Public read views over the collections
//!
//! The store keeps unpublished records; every public page goes through these
//! filters. All views preserve collection order.

use crate::{ContactMessage, Media, MediaCategory, Page, Post};

/// Slug of the page shown on the About view
pub const ABOUT_SLUG: &str = "about";

/// Number of posts shown on the home page
pub const HOME_POST_COUNT: usize = 3;

/// Records gated by a published flag
pub trait Publishable {
    fn is_published(&self) -> bool;
}

impl Publishable for Page {
    fn is_published(&self) -> bool {
        self.published
    }
}

impl Publishable for Post {
    fn is_published(&self) -> bool {
        self.published
    }
}

pub fn published<T: Publishable>(items: &[T]) -> impl Iterator<Item = &T> {
    items.iter().filter(|item| item.is_published())
}

pub fn published_pages(pages: &[Page]) -> Vec<&Page> {
    published(pages).collect()
}

pub fn published_posts(posts: &[Post]) -> Vec<&Post> {
    published(posts).collect()
}

/// First published page with the given slug
pub fn page_by_slug<'a>(pages: &'a [Page], slug: &str) -> Option<&'a Page> {
    published(pages).find(|page| page.slug == slug)
}

/// Newest `n` published posts (the collection is kept newest first)
pub fn latest_posts(posts: &[Post], n: usize) -> Vec<&Post> {
    published(posts).take(n).collect()
}

/// A published post by id. Unpublished posts are not found.
pub fn published_post<'a>(posts: &'a [Post], id: &str) -> Option<&'a Post> {
    published(posts).find(|post| post.id == id)
}

pub fn media_in_category(media: &[Media], category: MediaCategory) -> Vec<&Media> {
    media.iter().filter(|m| m.category == category).collect()
}

pub fn unread_count(messages: &[ContactMessage]) -> usize {
    messages.iter().filter(|m| !m.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MediaDraft, MediaType, MessageDraft, PageDraft, PostDraft};
    use time::macros::datetime;

    fn posts() -> Vec<Post> {
        let now = datetime!(2024-09-01 08:00 UTC);
        [("5", true), ("4", false), ("3", true), ("2", true), ("1", true)]
            .into_iter()
            .map(|(id, published)| {
                Post::from_draft(
                    PostDraft::new(format!("Post {id}"), "...", "...")
                        .with_published(published),
                    id.to_string(),
                    now,
                )
            })
            .collect()
    }

    #[test]
    fn test_published_posts_keep_order() {
        let posts = posts();
        let ids: Vec<&str> = published_posts(&posts)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["5", "3", "2", "1"]);
    }

    #[test]
    fn test_latest_posts_skips_drafts() {
        let posts = posts();
        let ids: Vec<&str> = latest_posts(&posts, HOME_POST_COUNT)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["5", "3", "2"]);
    }

    #[test]
    fn test_unpublished_post_is_not_found() {
        let posts = posts();
        assert!(published_post(&posts, "4").is_none());
        assert!(published_post(&posts, "missing").is_none());
        assert_eq!(
            published_post(&posts, "3").map(|p| p.title.as_str()),
            Some("Post 3")
        );
    }

    #[test]
    fn test_page_by_slug_requires_published() {
        let now = datetime!(2024-09-01 08:00 UTC);
        let pages = vec![
            Page::from_draft(
                PageDraft::new("Old About", "")
                    .with_slug(ABOUT_SLUG)
                    .with_published(false),
                "1".into(),
                now,
            ),
            Page::from_draft(
                PageDraft::new("About", "").with_slug(ABOUT_SLUG),
                "2".into(),
                now,
            ),
        ];

        assert_eq!(
            page_by_slug(&pages, ABOUT_SLUG).map(|p| p.id.as_str()),
            Some("2")
        );
        assert_eq!(published_pages(&pages).len(), 1);
        assert!(page_by_slug(&pages, "admissions").is_none());
    }

    #[test]
    fn test_media_in_category() {
        let now = datetime!(2024-09-01 08:00 UTC);
        let media = vec![
            Media::from_draft(
                MediaDraft::new(
                    "Lab",
                    "/lab.jpg",
                    MediaType::Image,
                    MediaCategory::Gallery,
                ),
                "1".into(),
                now,
            ),
            Media::from_draft(
                MediaDraft::new(
                    "Handbook",
                    "/h.pdf",
                    MediaType::Pdf,
                    MediaCategory::Downloads,
                ),
                "2".into(),
                now,
            ),
        ];

        let downloads = media_in_category(&media, MediaCategory::Downloads);
        assert_eq!(downloads.len(), 1);
        assert_eq!(downloads[0].title, "Handbook");
        assert!(media_in_category(&media, MediaCategory::News).is_empty());
    }

    #[test]
    fn test_unread_count() {
        let now = datetime!(2024-09-01 08:00 UTC);
        let mut messages: Vec<ContactMessage> = (1..=3)
            .map(|i| {
                ContactMessage::from_draft(
                    MessageDraft::new("A", "a@b.com", "hi"),
                    i.to_string(),
                    now,
                )
            })
            .collect();
        messages[1].read = true;

        assert_eq!(unread_count(&messages), 2);
    }
}
