//! In-memory store for tests and embedders.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::history::{EntryId, HistoryEntry, NewEntry, HISTORY_FETCH_LIMIT};
use crate::page::WikiName;

use super::{PageRecord, PageStore, StoreError, StoreResult};

#[derive(Default)]
struct State {
    pages: HashMap<String, PageRecord>,
    // Entries in append order; append order is creation order.
    history: HashMap<String, Vec<HistoryEntry>>,
}

/// Keeps everything in process memory behind one lock.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }
}

impl PageStore for MemoryStore {
    fn current(&self, name: &WikiName) -> StoreResult<Option<PageRecord>> {
        Ok(self.read()?.pages.get(name.as_str()).cloned())
    }

    fn append_history(&self, entry: NewEntry) -> StoreResult<EntryId> {
        let mut state = self.write()?;
        let id = EntryId::generate();
        let created = state
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
        state.pages.insert(key.clone(), record);
        state
            .history
            .entry(key)
            .or_default()
            .push(HistoryEntry::new(id, entry));
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

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::history::Author;

    use super::*;

    fn snapshot(name: &str, content: &str) -> NewEntry {
        NewEntry {
            name: WikiName::parse(name).unwrap(),
            content: content.to_string(),
            author: Some(Author::new("alice")),
            remote_addr: "10.0.0.1".to_string(),
            comment: String::new(),
            created: Utc::now(),
        }
    }

    #[test]
    fn test_current_is_none_before_any_save() {
        let store = MemoryStore::new();
        let name = WikiName::parse("FooBar").unwrap();
        assert!(store.current(&name).unwrap().is_none());
    }

    #[test]
    fn test_append_updates_current_and_history() {
        let store = MemoryStore::new();
        let name = WikiName::parse("FooBar").unwrap();
        store.append_history(snapshot("FooBar", "v1")).unwrap();
        store.append_history(snapshot("FooBar", "v2")).unwrap();

        let current = store.current(&name).unwrap().unwrap();
        assert_eq!(current.content, "v2");

        let history = store.history(&name).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content(), "v2");
        assert_eq!(history[1].content(), "v1");
    }

    #[test]
    fn test_created_survives_later_saves() {
        let store = MemoryStore::new();
        let name = WikiName::parse("FooBar").unwrap();
        store.append_history(snapshot("FooBar", "v1")).unwrap();
        let first = store.current(&name).unwrap().unwrap();
        store.append_history(snapshot("FooBar", "v2")).unwrap();
        let second = store.current(&name).unwrap().unwrap();
        assert_eq!(second.created, first.created);
        assert!(second.modified >= first.modified);
    }

    #[test]
    fn test_history_entry_lookup_by_id() {
        let store = MemoryStore::new();
        let name = WikiName::parse("FooBar").unwrap();
        let id = store.append_history(snapshot("FooBar", "v1")).unwrap();
        let entry = store.history_entry(&name, id).unwrap().unwrap();
        assert_eq!(entry.content(), "v1");
        assert_eq!(entry.id(), id);
    }

    #[test]
    fn test_history_entry_unknown_id_is_none() {
        let store = MemoryStore::new();
        let name = WikiName::parse("FooBar").unwrap();
        store.append_history(snapshot("FooBar", "v1")).unwrap();
        assert!(store
            .history_entry(&name, EntryId::generate())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_history_is_scoped_by_page() {
        let store = MemoryStore::new();
        store.append_history(snapshot("FooBar", "foo")).unwrap();
        store.append_history(snapshot("BazQux", "baz")).unwrap();

        let foo = WikiName::parse("FooBar").unwrap();
        assert_eq!(store.history(&foo).unwrap().len(), 1);
    }

    #[test]
    fn test_history_listing_is_capped() {
        let store = MemoryStore::new();
        let name = WikiName::parse("FooBar").unwrap();
        for i in 0..(HISTORY_FETCH_LIMIT + 5) {
            store
                .append_history(snapshot("FooBar", &format!("v{}", i)))
                .unwrap();
        }
        let history = store.history(&name).unwrap();
        assert_eq!(history.len(), HISTORY_FETCH_LIMIT);
        // Newest first; the cap drops the oldest entries.
        assert_eq!(history[0].content(), format!("v{}", HISTORY_FETCH_LIMIT + 4));
    }
}
