use std::sync::Arc;

use crate::{keys, LocalStore, Result};

pub const MAX_SEARCH_HISTORY: usize = 10;

pub struct SearchHistory {
    store: Arc<dyn LocalStore>,
}

impl SearchHistory {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }

    /// Most recent first.
    pub fn entries(&self) -> Result<Vec<String>> {
        Ok(self
            .store
            .get::<Vec<String>>(keys::SEARCH_HISTORY)?
            .unwrap_or_default())
    }

    pub fn add(&self, keyword: &str) -> Result<()> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(());
        }
        let mut entries = self.entries()?;
        entries.retain(|e| e != keyword);
        entries.insert(0, keyword.to_string());
        entries.truncate(MAX_SEARCH_HISTORY);
        self.store.set(keys::SEARCH_HISTORY, &entries)
    }

    pub fn remove(&self, keyword: &str) -> Result<()> {
        let mut entries = self.entries()?;
        entries.retain(|e| e != keyword);
        self.store.set(keys::SEARCH_HISTORY, &entries)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(keys::SEARCH_HISTORY)
    }
}
