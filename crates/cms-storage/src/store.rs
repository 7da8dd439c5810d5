//! Content store
//!
//! Single source of truth for the four collections during the process
//! lifetime. Every mutation is written back to the blob store as the whole
//! affected collection.

use cms_config::{Config, DecodePolicy, StorageConfig, WriteBackPolicy};
use cms_core::codec::{decode_collection, encode_collection};
use cms_core::collection::DEFAULT_KEY_PREFIX;
use cms_core::{
    Collection, ContactMessage, Media, MediaDraft, MessageDraft, Page, PageDraft, PagePatch, Post,
    PostDraft, PostPatch,
};
use serde::de::DeserializeOwned;
use std::path::Path;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::blob::{BlobStore, FileBlobStore};
use crate::clock::{Clock, SystemClock};
use crate::id::IdGenerator;
use crate::{Result, StorageError, seed};

/// Options controlling keys and persistence behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    pub key_prefix: String,
    pub write_back: WriteBackPolicy,
    pub on_decode_error: DecodePolicy,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            write_back: WriteBackPolicy::default(),
            on_decode_error: DecodePolicy::default(),
        }
    }
}

impl From<&StorageConfig> for StoreOptions {
    fn from(config: &StorageConfig) -> Self {
        Self {
            key_prefix: config.key_prefix.clone(),
            write_back: config.write_back,
            on_decode_error: config.on_decode_error,
        }
    }
}

/// Owns Pages, Posts, Media and Messages and mirrors them to a [`BlobStore`]
pub struct ContentStore<B: BlobStore> {
    blobs: B,
    options: StoreOptions,
    clock: Box<dyn Clock>,
    ids: IdGenerator,
    pages: Vec<Page>,
    posts: Vec<Post>,
    media: Vec<Media>,
    messages: Vec<ContactMessage>,
}

impl ContentStore<FileBlobStore> {
    /// Open a file-backed store in the configured data directory
    pub fn open_with_config(config: &Config) -> Result<Self> {
        let blobs = FileBlobStore::new(config.storage.resolved_data_dir())?;
        Self::open_with(blobs, StoreOptions::from(&config.storage), SystemClock)
    }

    /// Read `config.toml` at `path`, then open as [`Self::open_with_config`]
    pub fn open_from_config_file(path: &Path) -> Result<Self> {
        let config = Config::load_from(path)?;
        Self::open_with_config(&config)
    }
}

impl<B: BlobStore> ContentStore<B> {
    /// Open with default options and the system clock
    pub fn open(blobs: B) -> Result<Self> {
        Self::open_with(blobs, StoreOptions::default(), SystemClock)
    }

    /// Load every collection from `blobs`, installing seeds where no durable
    /// copy exists. The store is fully initialized when this returns.
    pub fn open_with(blobs: B, options: StoreOptions, clock: impl Clock + 'static) -> Result<Self> {
        let now = clock.now();
        let loader = Loader {
            blobs: &blobs,
            options: &options,
        };

        let pages: Vec<Page> = loader.load(Collection::Pages, || seed::pages(now))?;
        let posts: Vec<Post> = loader.load(Collection::Posts, || seed::posts(now))?;
        let media: Vec<Media> = loader.load(Collection::Media, || seed::media(now))?;
        let messages: Vec<ContactMessage> = loader.load(Collection::Messages, Vec::new)?;

        let mut ids = IdGenerator::new();
        for id in pages
            .iter()
            .map(|p| &p.id)
            .chain(posts.iter().map(|p| &p.id))
            .chain(media.iter().map(|m| &m.id))
            .chain(messages.iter().map(|m| &m.id))
        {
            ids.observe(id);
        }

        info!(
            pages = pages.len(),
            posts = posts.len(),
            media = media.len(),
            messages = messages.len(),
            "Content store opened"
        );

        Ok(Self {
            blobs,
            options,
            clock: Box::new(clock),
            ids,
            pages,
            posts,
            media,
            messages,
        })
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn media(&self) -> &[Media] {
        &self.media
    }

    pub fn messages(&self) -> &[ContactMessage] {
        &self.messages
    }

    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn message(&self, id: &str) -> Option<&ContactMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn blob_store(&self) -> &B {
        &self.blobs
    }

    pub fn into_blob_store(self) -> B {
        self.blobs
    }

    // ------------------------------------------------------------------
    // Pages (appended)
    // ------------------------------------------------------------------

    pub fn add_page(&mut self, draft: PageDraft) -> Result<Page> {
        let (id, now) = self.stamp();
        let page = Page::from_draft(draft, id, now);
        self.pages.push(page.clone());
        self.write_back(Collection::Pages)?;
        Ok(page)
    }

    /// Merge `patch` into the page with `id`. Returns `false` and leaves
    /// storage untouched if no such page exists.
    pub fn update_page(&mut self, id: &str, patch: PagePatch) -> Result<bool> {
        let now = self.clock.now();
        let Some(page) = self.pages.iter_mut().find(|p| p.id == id) else {
            return Ok(miss(Collection::Pages, id));
        };
        page.apply(patch, now);
        self.write_back(Collection::Pages)?;
        Ok(true)
    }

    pub fn delete_page(&mut self, id: &str) -> Result<bool> {
        if !remove_by_id(&mut self.pages, id, |p| &p.id) {
            return Ok(miss(Collection::Pages, id));
        }
        self.write_back(Collection::Pages)?;
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Posts (newest first)
    // ------------------------------------------------------------------

    pub fn add_post(&mut self, draft: PostDraft) -> Result<Post> {
        let (id, now) = self.stamp();
        let post = Post::from_draft(draft, id, now);
        self.posts.insert(0, post.clone());
        self.write_back(Collection::Posts)?;
        Ok(post)
    }

    pub fn update_post(&mut self, id: &str, patch: PostPatch) -> Result<bool> {
        let now = self.clock.now();
        let Some(post) = self.posts.iter_mut().find(|p| p.id == id) else {
            return Ok(miss(Collection::Posts, id));
        };
        post.apply(patch, now);
        self.write_back(Collection::Posts)?;
        Ok(true)
    }

    pub fn delete_post(&mut self, id: &str) -> Result<bool> {
        if !remove_by_id(&mut self.posts, id, |p| &p.id) {
            return Ok(miss(Collection::Posts, id));
        }
        self.write_back(Collection::Posts)?;
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Media (appended, no update)
    // ------------------------------------------------------------------

    pub fn add_media(&mut self, draft: MediaDraft) -> Result<Media> {
        let (id, now) = self.stamp();
        let item = Media::from_draft(draft, id, now);
        self.media.push(item.clone());
        self.write_back(Collection::Media)?;
        Ok(item)
    }

    pub fn delete_media(&mut self, id: &str) -> Result<bool> {
        if !remove_by_id(&mut self.media, id, |m| &m.id) {
            return Ok(miss(Collection::Media, id));
        }
        self.write_back(Collection::Media)?;
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Messages (newest first)
    // ------------------------------------------------------------------

    pub fn add_message(&mut self, draft: MessageDraft) -> Result<ContactMessage> {
        let (id, now) = self.stamp();
        let message = ContactMessage::from_draft(draft, id, now);
        self.messages.insert(0, message.clone());
        self.write_back(Collection::Messages)?;
        Ok(message)
    }

    pub fn mark_message_read(&mut self, id: &str) -> Result<bool> {
        let Some(message) = self.messages.iter_mut().find(|m| m.id == id) else {
            return Ok(miss(Collection::Messages, id));
        };
        message.read = true;
        self.write_back(Collection::Messages)?;
        Ok(true)
    }

    pub fn delete_message(&mut self, id: &str) -> Result<bool> {
        if !remove_by_id(&mut self.messages, id, |m| &m.id) {
            return Ok(miss(Collection::Messages, id));
        }
        self.write_back(Collection::Messages)?;
        Ok(true)
    }

    fn stamp(&mut self) -> (String, OffsetDateTime) {
        let now = self.clock.now();
        (self.ids.next(now), now)
    }

    fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Pages => self.pages.len(),
            Collection::Posts => self.posts.len(),
            Collection::Media => self.media.len(),
            Collection::Messages => self.messages.len(),
        }
    }

    fn write_back(&mut self, collection: Collection) -> Result<()> {
        let records = self.len(collection);
        if records == 0
            && collection.has_seed()
            && self.options.write_back == WriteBackPolicy::SkipEmptySeeded
        {
            debug!(%collection, "Skipping write-back of empty collection");
            return Ok(());
        }

        let blob = match collection {
            Collection::Pages => encode_collection(&self.pages)?,
            Collection::Posts => encode_collection(&self.posts)?,
            Collection::Media => encode_collection(&self.media)?,
            Collection::Messages => encode_collection(&self.messages)?,
        };
        let key = collection.key(&self.options.key_prefix);
        self.blobs.set(&key, &blob)?;

        debug!(%collection, records, key = %key, "Collection written back");
        Ok(())
    }
}

struct Loader<'a, B> {
    blobs: &'a B,
    options: &'a StoreOptions,
}

impl<B: BlobStore> Loader<'_, B> {
    fn load<T: DeserializeOwned>(
        &self,
        collection: Collection,
        seed: impl FnOnce() -> Vec<T>,
    ) -> Result<Vec<T>> {
        let key = collection.key(&self.options.key_prefix);

        let Some(blob) = self.blobs.get(&key)? else {
            debug!(%collection, "No durable copy, installing seed");
            return Ok(seed());
        };

        match decode_collection(&blob) {
            Ok(records) => {
                debug!(%collection, "Loaded durable copy");
                Ok(records)
            }
            Err(source) => match self.options.on_decode_error {
                DecodePolicy::FallbackToSeed => {
                    warn!(
                        %collection,
                        key = %key,
                        error = %source,
                        "Stored collection is malformed, installing seed"
                    );
                    Ok(seed())
                }
                DecodePolicy::Fail => Err(StorageError::Decode { key, source }),
            },
        }
    }
}

fn remove_by_id<T>(records: &mut Vec<T>, id: &str, id_of: impl Fn(&T) -> &String) -> bool {
    let before = records.len();
    records.retain(|record| id_of(record) != id);
    records.len() != before
}

fn miss(collection: Collection, id: &str) -> bool {
    debug!(%collection, id, "No record with this id, ignoring");
    false
}
