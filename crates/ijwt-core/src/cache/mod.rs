//! Namespaced cache over a [`Store`]
//!
//! Every key is written as `<prefix>_<name>`. [`Cache::clear`] only removes
//! keys under the cache's own prefix, so a store shared with unrelated data
//! keeps that data.

pub mod file;
pub mod store;

pub use file::FileStore;
pub use store::{MemoryStore, Store};

use crate::error::Result;

#[derive(Debug)]
pub struct Cache<S> {
    store: S,
    prefix: String,
}

impl<S: Store> Cache<S> {
    pub fn new(store: S, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Store `data` under `name`, overwriting any previous value
    pub fn set(&self, name: &str, data: &str) -> Result<()> {
        self.store.set(&self.key(name), data)
    }

    pub fn get(&self, name: &str) -> Result<Option<String>> {
        self.store.get(&self.key(name))
    }

    /// Remove `name`; removing an absent entry is a no-op
    pub fn delete(&self, name: &str) -> Result<()> {
        self.store.remove(&self.key(name))
    }

    /// Remove every entry under this cache's prefix
    pub fn clear(&self) -> Result<usize> {
        let namespace = format!("{}_", self.prefix);
        let keys: Vec<String> = self
            .store
            .keys()?
            .into_iter()
            .filter(|key| key.starts_with(&namespace))
            .collect();
        self.store.remove_all(&keys)?;
        tracing::debug!(removed = keys.len(), prefix = %self.prefix, "cleared cache");
        Ok(keys.len())
    }

    fn key(&self, name: &str) -> String {
        format!("{}_{}", self.prefix, name)
    }
}
