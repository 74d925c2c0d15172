//! File resolution across the ordered include directories
//!
//! ```text
//! fetch(file_name)
//!     ↓
//! 1. production mode: cache hit → return cached text
//!     ↓ (miss)
//! 2. for directory in directories (in order):
//!      GET {site_base} ⨝ "{directory}/{file_name}"
//!      2xx → cache (production) and return
//!      otherwise → log, try next directory
//!     ↓ (exhausted)
//! 3. None
//! ```

use crate::cache::{Cache, Store};
use crate::config::{Config, Mode};
use crate::error::Result;
use crate::fetch::{Fetch, is_success};
use url::Url;

#[derive(Debug)]
pub struct FileResolver<F, S> {
    fetcher: F,
    cache: Cache<S>,
    directories: Vec<String>,
    site_base: Url,
    mode: Mode,
}

impl<F: Fetch, S: Store> FileResolver<F, S> {
    pub fn new(fetcher: F, store: S, config: &Config) -> Result<Self> {
        Ok(Self {
            fetcher,
            cache: Cache::new(store, config.engine.prefix.clone()),
            directories: config.site.directories.clone(),
            site_base: config.site_base()?,
            mode: config.site.mode,
        })
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn cache(&self) -> &Cache<S> {
        &self.cache
    }

    pub fn site_base(&self) -> &Url {
        &self.site_base
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Candidate URLs for `file_name`, in search order.
    ///
    /// Each candidate is `"{directory}/{file_name}"` resolved against the
    /// site base with standard URL resolution, so the empty directory gives
    /// `/{file_name}` at the origin root.
    pub fn candidates(&self, file_name: &str) -> Vec<Url> {
        self.directories
            .iter()
            .filter_map(|directory| {
                let relative = format!("{}/{}", directory, file_name);
                match self.site_base.join(&relative) {
                    Ok(url) => Some(url),
                    Err(e) => {
                        tracing::info!(%relative, error = %e, "skipping unparsable candidate");
                        None
                    }
                }
            })
            .collect()
    }

    /// Content of `file_name`, or `None` when no directory has it
    pub async fn fetch(&self, file_name: &str) -> Option<String> {
        if self.mode.is_production() {
            match self.cache.get(file_name) {
                Ok(Some(data)) if !data.is_empty() => {
                    tracing::debug!(file_name, "cache hit");
                    return Some(data);
                }
                Ok(_) => {}
                Err(e) => tracing::warn!(file_name, error = %e, "cache read failed"),
            }
        }

        for url in self.candidates(file_name) {
            match self.fetcher.get(&url).await {
                Ok(response) if response.is_success() => {
                    if self.mode.is_production() {
                        if let Err(e) = self.cache.set(file_name, &response.body) {
                            tracing::warn!(file_name, error = %e, "cache write failed");
                        }
                    }
                    tracing::debug!(%url, "fetched");
                    return Some(response.body);
                }
                Ok(response) => {
                    tracing::info!(%url, status = response.status, "File not found");
                }
                Err(e) => {
                    tracing::info!(%url, error = %e, "Fetch failed");
                }
            }
        }

        tracing::debug!(file_name, "not found in any directory");
        None
    }

    /// URL of the first directory holding `file_name`, checked with HEAD
    pub async fn search(&self, file_name: &str) -> Option<Url> {
        for url in self.candidates(file_name) {
            match self.fetcher.head(&url).await {
                Ok(status) if is_success(status) => return Some(url),
                Ok(status) => tracing::info!(%url, status, "File not found"),
                Err(e) => tracing::info!(%url, error = %e, "HEAD failed"),
            }
        }
        None
    }
}
