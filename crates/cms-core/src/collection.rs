//! Named record collections and their blob keys

use std::fmt;

/// Key prefix used when none is configured
pub const DEFAULT_KEY_PREFIX: &str = "school_cms";

/// One of the four record sets owned by the content store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Pages,
    Posts,
    Media,
    Messages,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Pages,
        Collection::Posts,
        Collection::Media,
        Collection::Messages,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Collection::Pages => "pages",
            Collection::Posts => "posts",
            Collection::Media => "media",
            Collection::Messages => "messages",
        }
    }

    /// Blob key for this collection, e.g. `school_cms_pages`
    pub fn key(self, prefix: &str) -> String {
        format!("{}_{}", prefix, self.name())
    }

    /// Whether built-in seed records exist for this collection
    pub fn has_seed(self) -> bool {
        !matches!(self, Collection::Messages)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let keys: Vec<String> = Collection::ALL
            .iter()
            .map(|c| c.key(DEFAULT_KEY_PREFIX))
            .collect();
        assert_eq!(
            keys,
            vec![
                "school_cms_pages",
                "school_cms_posts",
                "school_cms_media",
                "school_cms_messages",
            ]
        );
    }

    #[test]
    fn test_messages_have_no_seed() {
        assert!(Collection::Pages.has_seed());
        assert!(Collection::Media.has_seed());
        assert!(!Collection::Messages.has_seed());
    }
}
