use web_sys::window;

use crate::models::SearchItem;

pub const SEARCH_RESULTS_KEY: &str = "searchResults";

/// Single-slot persisted mirror of the last successful result list. The
/// trait keeps the storage backend behind a narrow seam; the app uses
/// `localStorage`, tests use an in-memory slot.
pub trait ResultsCache {
    fn load(&self) -> Option<Vec<SearchItem>>;
    fn store(&self, items: &[SearchItem]) -> Result<(), String>;
    fn clear(&self) -> Result<(), String>;
}

pub struct LocalStorageCache;

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

impl ResultsCache for LocalStorageCache {
    fn load(&self) -> Option<Vec<SearchItem>> {
        let raw = local_storage()?.get_item(SEARCH_RESULTS_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }

    fn store(&self, items: &[SearchItem]) -> Result<(), String> {
        let storage = local_storage().ok_or_else(|| "localStorage is unavailable".to_string())?;
        let serialized = serde_json::to_string(items)
            .map_err(|e| format!("Failed to serialize search results: {}", e))?;
        storage
            .set_item(SEARCH_RESULTS_KEY, &serialized)
            .map_err(|_| "Failed to store search results".to_string())
    }

    fn clear(&self) -> Result<(), String> {
        if let Some(storage) = local_storage() {
            storage
                .remove_item(SEARCH_RESULTS_KEY)
                .map_err(|_| "Failed to remove search results".to_string())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryCache(std::cell::RefCell<Option<String>>);

#[cfg(test)]
impl MemoryCache {
    pub fn raw(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

#[cfg(test)]
impl ResultsCache for MemoryCache {
    fn load(&self) -> Option<Vec<SearchItem>> {
        let raw = self.0.borrow().clone()?;
        serde_json::from_str(&raw).ok()
    }

    fn store(&self, items: &[SearchItem]) -> Result<(), String> {
        let serialized = serde_json::to_string(items)
            .map_err(|e| format!("Failed to serialize search results: {}", e))?;
        *self.0.borrow_mut() = Some(serialized);
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        *self.0.borrow_mut() = None;
        Ok(())
    }
}
