//! To-do Storage
//!
//! The whole list is one JSON array under a single key.
//! There is no per-item persistence and no schema version.

use std::cell::RefCell;

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::models::Todo;

/// Local storage key holding the list
pub const STORAGE_KEY: &str = "todos";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Local storage is unavailable")]
    Unavailable,
    #[error("Stored to-do list is corrupt: {0}")]
    Corrupt(serde_json::Error),
    #[error("Failed to serialize to-do list: {0}")]
    Serialize(serde_json::Error),
    #[error("Failed to write local storage: {0}")]
    Write(String),
}

/// Persistence backend for the list
pub trait TodoStore {
    /// Read the saved list; a missing entry is an empty list
    fn load(&self) -> Result<Vec<Todo>, StorageError>;

    /// Replace the saved list
    fn save(&self, todos: &[Todo]) -> Result<(), StorageError>;
}

/// Decode a stored value; `null` reads as empty
pub fn decode(json: &str) -> Result<Vec<Todo>, StorageError> {
    serde_json::from_str::<Option<Vec<Todo>>>(json)
        .map(Option::unwrap_or_default)
        .map_err(StorageError::Corrupt)
}

pub fn encode(todos: &[Todo]) -> Result<String, StorageError> {
    serde_json::to_string(todos).map_err(StorageError::Serialize)
}

/// `window.localStorage` backend
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageStore {
    key: &'static str,
}

impl LocalStorageStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(STORAGE_KEY)
    }
}

impl TodoStore for LocalStorageStore {
    fn load(&self) -> Result<Vec<Todo>, StorageError> {
        match Self::storage()?.get_item(self.key) {
            Ok(Some(json)) => decode(&json),
            Ok(None) => Ok(Vec::new()),
            Err(_) => Err(StorageError::Unavailable),
        }
    }

    fn save(&self, todos: &[Todo]) -> Result<(), StorageError> {
        let json = encode(todos)?;
        Self::storage()?
            .set_item(self.key, &json)
            .map_err(|e: JsValue| StorageError::Write(e.as_string().unwrap_or_else(|| format!("{:?}", e))))
    }
}

/// In-memory backend holding the serialized value, used by tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn with_value(json: &str) -> Self {
        Self { value: RefCell::new(Some(json.to_string())) }
    }

    /// Raw stored string, as local storage would hold it
    pub fn raw(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl TodoStore for MemoryStore {
    fn load(&self) -> Result<Vec<Todo>, StorageError> {
        match self.value.borrow().as_deref() {
            Some(json) => decode(json),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, todos: &[Todo]) -> Result<(), StorageError> {
        *self.value.borrow_mut() = Some(encode(todos)?);
        Ok(())
    }
}

impl<S: TodoStore> TodoStore for &S {
    fn load(&self) -> Result<Vec<Todo>, StorageError> {
        (**self).load()
    }

    fn save(&self, todos: &[Todo]) -> Result<(), StorageError> {
        (**self).save(todos)
    }
}
