//! Key-value persistence seam.
//!
//! In the browser this is `window.localStorage`; tests use [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

pub trait KeyValueStore {
    /// `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, String>;

    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// Single-threaded in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
