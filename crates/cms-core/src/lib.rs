//! Core domain models and logic for the school site
//!
//! This crate contains:
//! - Domain models (Page, Post, Media, ContactMessage) with their drafts and patches
//! - Collection names and the blob codec
//! - Content markup parser
//! - Public read views (published filters, category lookups)

pub mod codec;
pub mod collection;
pub mod error;
pub mod markup;
pub mod media;
pub mod message;
pub mod page;
pub mod post;
pub mod slug;
pub mod timestamp;
pub mod views;

pub use collection::Collection;
pub use error::{Error, Result};
pub use markup::{Block, parse_content};
pub use media::{Media, MediaCategory, MediaDraft, MediaType};
pub use message::{ContactMessage, MessageDraft};
pub use page::{Page, PageDraft, PagePatch};
pub use post::{Post, PostDraft, PostPatch};
pub use slug::slugify;
