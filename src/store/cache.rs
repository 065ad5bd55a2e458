//! Render cache collaborator.

use std::collections::HashMap;
use std::sync::RwLock;

/// Invalidate-on-write cache keyed by page name.
///
/// The service invalidates after every committed save. Transformed-content
/// caching stays off until inbound links are tracked, so only current page
/// records pass through here.
pub trait RenderCache: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: String);
    fn invalidate(&self, key: &str);
}

/// A cache that never hits.
pub struct NoopCache;

impl RenderCache for NoopCache {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn put(&self, _key: &str, _value: String) {}

    fn invalidate(&self, _key: &str) {}
}

/// Process-local cache for embedders and tests.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderCache for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn put(&self, key: &str, value: String) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value);
        }
    }

    fn invalidate(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }
}
