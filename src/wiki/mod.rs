//! The wiki service: page lifecycle over the storage and cache
//! collaborators, the transform chain, and the diff engine.

mod errors;

pub use errors::{WikiError, WikiResult};

use std::sync::Arc;

use chrono::Utc;

use crate::diff::{DiffError, PageDiff, VersionDiffer};
use crate::history::{Author, EntryId, HistoryEntry, NewEntry};
use crate::observability::{Logger, Severity};
use crate::page::{Page, WikiName};
use crate::store::{PageRecord, PageStore, RenderCache};
use crate::transform::{LinkExistenceOracle, OracleError, TransformPipeline};

/// Default redirect indirection endpoint used by the referrer-hiding
/// rewrite.
pub const DEFAULT_GOTO_PATH: &str = "/goto";

/// Existence oracle backed by the page store.
struct StoreOracle<'a> {
    store: &'a dyn PageStore,
}

impl LinkExistenceOracle for StoreOracle<'_> {
    fn exists(&self, name: &WikiName) -> Result<bool, OracleError> {
        match self.store.current(name) {
            Ok(record) => Ok(record.is_some()),
            Err(e) => Err(OracleError::Unavailable(e.to_string())),
        }
    }
}

/// One wiki over a storage and cache collaborator pair.
///
/// All methods except [`Wiki::save`] are pure readers. Concurrent saves of
/// the same page are last-writer-wins; there is no conflict resolution.
pub struct Wiki {
    store: Arc<dyn PageStore>,
    cache: Arc<dyn RenderCache>,
    goto_path: String,
}

impl Wiki {
    pub fn new(store: Arc<dyn PageStore>, cache: Arc<dyn RenderCache>) -> Self {
        Self {
            store,
            cache,
            goto_path: DEFAULT_GOTO_PATH.to_string(),
        }
    }

    /// Override the indirection endpoint path.
    pub fn with_goto_path(mut self, path: impl Into<String>) -> Self {
        self.goto_path = path.into();
        self
    }

    fn record_cache_key(name: &WikiName) -> String {
        format!("page_{}", name)
    }

    fn content_cache_key(name: &WikiName) -> String {
        format!("content_{}", name)
    }

    /// Load the page: current state if present, synthesized default content
    /// otherwise.
    pub fn load(&self, name: &WikiName) -> WikiResult<Page> {
        let record_key = Self::record_cache_key(name);
        if let Some(raw) = self.cache.get(&record_key) {
            match serde_json::from_str::<PageRecord>(&raw) {
                Ok(record) => return Ok(Page::present(record)),
                // An unreadable cache value falls through to the store.
                Err(_) => self.cache.invalidate(&record_key),
            }
        }
        match self.store.current(name)? {
            Some(record) => {
                if let Ok(raw) = serde_json::to_string(&record) {
                    self.cache.put(&record_key, raw);
                }
                Ok(Page::present(record))
            }
            None => Ok(Page::absent(name.clone(), Utc::now())),
        }
    }

    /// Save new content for the page, appending one immutable history
    /// entry. This is the only mutator; there is no delete.
    ///
    /// Cache invalidation happens after the store write commits, so a
    /// reader can never observe a stale cached value alongside a newer
    /// persisted entry.
    pub fn save(
        &self,
        name: &WikiName,
        content: impl Into<String>,
        author: Option<Author>,
        remote_addr: impl Into<String>,
        comment: impl Into<String>,
    ) -> WikiResult<EntryId> {
        let entry = NewEntry {
            name: name.clone(),
            content: content.into(),
            author,
            remote_addr: remote_addr.into(),
            comment: comment.into(),
            created: Utc::now(),
        };
        let id = self.store.append_history(entry)?;
        self.cache.invalidate(&Self::record_cache_key(name));
        self.cache.invalidate(&Self::content_cache_key(name));

        let id_text = id.to_string();
        Logger::log(
            Severity::Info,
            "page_saved",
            &[("name", name.as_str()), ("entry_id", &id_text)],
        );
        Ok(id)
    }

    /// Run the content transform chain over the page's current content.
    ///
    /// Recomputed on every call: caching transformed content would require
    /// tracking inbound links between pages to invalidate dependents.
    pub fn render(&self, name: &WikiName) -> WikiResult<String> {
        let page = self.load(name)?;
        let oracle = StoreOracle {
            store: self.store.as_ref(),
        };
        let pipeline = TransformPipeline::standard(&oracle, &self.goto_path);
        Ok(pipeline.run(page.content())?)
    }

    /// History entries for the page, newest first.
    pub fn history(&self, name: &WikiName) -> WikiResult<Vec<HistoryEntry>> {
        Ok(self.store.history(name)?)
    }

    /// Diff two saved versions of the page, columns in argument order.
    pub fn diff(&self, name: &WikiName, v1: &str, v2: &str) -> WikiResult<PageDiff> {
        let left = self.resolve_entry(name, v1)?;
        let right = self.resolve_entry(name, v2)?;
        Ok(VersionDiffer::diff(&left, &right))
    }

    fn resolve_entry(&self, name: &WikiName, raw_id: &str) -> WikiResult<HistoryEntry> {
        let id = EntryId::parse(raw_id).map_err(DiffError::from)?;
        self.store.history_entry(name, id)?.ok_or_else(|| {
            DiffError::EntryNotFound {
                name: name.to_string(),
                id: raw_id.to_string(),
            }
            .into()
        })
    }
}
