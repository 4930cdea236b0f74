//! Persistence Adapter
//!
//! Mirrors the item list into browser local storage as a JSON array.
//! Every write is a full read-modify-write of that array.

use crate::error::{StorageError, StorageResult};
use crate::models::Item;

/// Key/value medium the adapter persists into
pub trait StorageBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// `window.localStorage`, looked up on every call
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("local storage disabled".to_string()))
    }
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Item collection persisted under one storage key
#[derive(Clone, Debug)]
pub struct Persistence<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> Persistence<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored items, empty when the key is absent
    pub fn get_items_from_storage(&self) -> StorageResult<Vec<Item>> {
        match self.backend.get(&self.key)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn store_item(&self, item: &Item) -> StorageResult<()> {
        let mut items = self.get_items_from_storage()?;
        items.push(item.clone());
        self.write_items(&items)
    }

    /// Replace the entry with the same ID
    pub fn update_item_storage(&self, updated: &Item) -> StorageResult<()> {
        let mut items = self.get_items_from_storage()?;
        items
            .iter_mut()
            .filter(|item| item.id == updated.id)
            .for_each(|item| *item = updated.clone());
        self.write_items(&items)
    }

    pub fn delete_item_from_storage(&self, id: u32) -> StorageResult<()> {
        let mut items = self.get_items_from_storage()?;
        items.retain(|item| item.id != id);
        self.write_items(&items)
    }

    /// Drop the storage key entirely
    pub fn clear_items_from_storage(&self) -> StorageResult<()> {
        self.backend.remove(&self.key)
    }

    fn write_items(&self, items: &[Item]) -> StorageResult<()> {
        let json = serde_json::to_string(items)?;
        self.backend.set(&self.key, &json)
    }
}
