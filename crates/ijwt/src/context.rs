//! Global context for CLI commands

use anyhow::{Context as _, Result};
use ijwt_core::cache::file::default_store_path;
use ijwt_core::config::consts::CONFIG_FILE;
use ijwt_core::{Cache, Config, DirFetcher, Engine, Fetch, FileStore, HttpFetcher};
use std::path::Path;
use std::time::Duration;

/// Loaded configuration and the persistent store
pub struct Context {
    pub config: Config,
    pub store: FileStore,
}

impl Context {
    /// Load config and open the store
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit config file is missing or invalid
    /// - `./ijwt.toml` exists but is invalid
    /// - The store file cannot be read or parsed
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => Config::from_file_or_default(CONFIG_FILE)?,
        };

        let store_path = match &config.cache.path {
            Some(path) => path.clone(),
            None => default_store_path()?,
        };
        tracing::debug!(store = %store_path.display(), "opening store");
        let store = FileStore::open(store_path)?;

        Ok(Self { config, store })
    }

    pub fn cache(&self) -> Cache<&FileStore> {
        Cache::new(&self.store, self.config.engine.prefix.clone())
    }

    /// Engine over `fetcher` backed by the persistent store
    pub fn engine<F: Fetch>(&self, fetcher: F) -> Result<Engine<F, &FileStore>> {
        Ok(Engine::new(self.config.clone(), fetcher, &self.store)?)
    }

    pub fn http_fetcher(&self) -> Result<HttpFetcher> {
        let timeout = Duration::from_secs(self.config.network.timeout_secs);
        Ok(HttpFetcher::new(timeout)?)
    }

    pub fn dir_fetcher(&self, root: &Path) -> Result<DirFetcher> {
        DirFetcher::new(root, self.config.site_base()?)
            .with_context(|| format!("Cannot serve {}", root.display()))
    }
}
