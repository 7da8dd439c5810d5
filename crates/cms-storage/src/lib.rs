//! Storage layer for the school site
//!
//! This crate provides:
//! - The durable blob store seam (in-memory and file-backed)
//! - The content store owning Pages, Posts, Media and Messages
//! - Built-in seed data and id generation

pub mod blob;
pub mod clock;
pub mod error;
pub mod id;
pub mod seed;
pub mod store;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Result, StorageError};
pub use store::{ContentStore, StoreOptions};
