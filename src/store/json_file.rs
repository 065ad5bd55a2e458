//! Single-file JSON store used by the CLI.
//!
//! The whole store is one JSON document, rewritten on every append: the new
//! state is serialized to a sibling temp file and renamed over the
//! original, then swapped into memory. A failed persist leaves both the
//! file and the in-memory state untouched, which satisfies the
//! no-partial-writes contract for a single-process CLI. This is an
//! adapter, not a database.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::history::{EntryId, HistoryEntry, NewEntry, HISTORY_FETCH_LIMIT};
use crate::page::WikiName;

use super::{PageRecord, PageStore, StoreError, StoreResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FileState {
    pages: HashMap<String, PageRecord>,
    history: HashMap<String, Vec<HistoryEntry>>,
}

/// Stores pages and history in one JSON file.
pub struct JsonFileStore {
    path: PathBuf,
    state: RwLock<FileState>,
}

impl JsonFileStore {
    /// Open an existing store file, or start empty if none exists yet.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let state = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt(e.to_string()))?
        } else {
            FileState::default()
        };
        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    /// Create a fresh store file; fails if one is already there.
    pub fn create(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if path.exists() {
            return Err(StoreError::Unavailable(format!(
                "store file already exists: {}",
                path.display()
            )));
        }
        let store = Self {
            path,
            state: RwLock::new(FileState::default()),
        };
        store.persist(&FileState::default())?;
        Ok(store)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, FileState>> {
        self.state
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, FileState>> {
        self.state
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    fn persist(&self, state: &FileState) -> StoreResult<()> {
        let raw =
            serde_json::to_string_pretty(state).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PageStore for JsonFileStore {
    fn current(&self, name: &WikiName) -> StoreResult<Option<PageRecord>> {
        Ok(self.read()?.pages.get(name.as_str()).cloned())
    }

    fn append_history(&self, entry: NewEntry) -> StoreResult<EntryId> {
        let mut state = self.write()?;
        let id = EntryId::generate();

        // Stage the mutation and persist it before making it visible.
        let mut next = state.clone();
        let created = next
            .pages
            .get(entry.name.as_str())
            .map(|record| record.created)
            .unwrap_or(entry.created);
        let record = PageRecord {
            name: entry.name.clone(),
            content: entry.content.clone(),
            author: entry.author.clone(),
            created,
            modified: entry.created,
        };
        let key = entry.name.as_str().to_string();
        next.pages.insert(key.clone(), record);
        next.history
            .entry(key)
            .or_default()
            .push(HistoryEntry::new(id, entry));

        self.persist(&next)?;
        *state = next;
        Ok(id)
    }

    fn history(&self, name: &WikiName) -> StoreResult<Vec<HistoryEntry>> {
        let state = self.read()?;
        let mut entries = state
            .history
            .get(name.as_str())
            .cloned()
            .unwrap_or_default();
        entries.reverse();
        entries.truncate(HISTORY_FETCH_LIMIT);
        Ok(entries)
    }

    fn history_entry(&self, name: &WikiName, id: EntryId) -> StoreResult<Option<HistoryEntry>> {
        let state = self.read()?;
        Ok(state
            .history
            .get(name.as_str())
            .and_then(|entries| entries.iter().find(|entry| entry.id() == id))
            .cloned())
    }
}
