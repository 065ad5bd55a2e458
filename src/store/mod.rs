//! Storage and cache collaborators.
//!
//! The engine treats storage as an external document store: current page
//! state keyed by name, plus an append-only history log. Implementations
//! must make [`PageStore::append_history`] atomic: either the entry lands
//! and the current pointer moves, or nothing is visible.

mod cache;
mod errors;
mod json_file;
mod memory;

pub use cache::{MemoryCache, NoopCache, RenderCache};
pub use errors::{StoreError, StoreResult};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::history::{Author, EntryId, HistoryEntry, NewEntry};
use crate::page::WikiName;

/// Current state of one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub name: WikiName,
    pub content: String,
    pub author: Option<Author>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// The page and history storage collaborator.
pub trait PageStore: Send + Sync {
    /// Current state of the page, if any save has ever happened.
    fn current(&self, name: &WikiName) -> StoreResult<Option<PageRecord>>;

    /// Append one history entry and move the current pointer, atomically.
    fn append_history(&self, entry: NewEntry) -> StoreResult<EntryId>;

    /// History entries for a page, newest first, capped at
    /// [`HISTORY_FETCH_LIMIT`](crate::history::HISTORY_FETCH_LIMIT).
    fn history(&self, name: &WikiName) -> StoreResult<Vec<HistoryEntry>>;

    /// A single history entry by id, if one exists for this page.
    fn history_entry(&self, name: &WikiName, id: EntryId) -> StoreResult<Option<HistoryEntry>>;
}
