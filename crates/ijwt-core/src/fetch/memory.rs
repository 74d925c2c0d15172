//! In-memory site, keyed by URL path (the host is ignored)

use super::{Fetch, FetchError, Response};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
}

#[derive(Debug, Default)]
pub struct MemoryFetcher {
    files: BTreeMap<String, String>,
    refused: BTreeSet<String>,
    requests: Mutex<Vec<(Method, String)>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` at URL path `path` (e.g. `/partials/header.html`)
    pub fn insert(&mut self, path: impl Into<String>, body: impl Into<String>) -> &mut Self {
        self.files.insert(path.into(), body.into());
        self
    }

    /// Make requests for `path` fail at the transport level
    pub fn refuse(&mut self, path: impl Into<String>) -> &mut Self {
        self.refused.insert(path.into());
        self
    }

    /// Every request made so far, in order
    pub fn requests(&self) -> Vec<(Method, String)> {
        self.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Method, String)>> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record<'a>(&self, method: Method, url: &'a Url) -> Result<&'a str, FetchError> {
        let path = url.path();
        self.lock().push((method, path.to_string()));
        if self.refused.contains(path) {
            return Err(FetchError::Refused(url.to_string()));
        }
        Ok(path)
    }
}

impl Fetch for MemoryFetcher {
    async fn get(&self, url: &Url) -> Result<Response, FetchError> {
        let path = self.record(Method::Get, url)?;
        Ok(match self.files.get(path) {
            Some(body) => Response::ok(body.clone()),
            None => Response::not_found(),
        })
    }

    async fn head(&self, url: &Url) -> Result<u16, FetchError> {
        let path = self.record(Method::Head, url)?;
        Ok(if self.files.contains_key(path) { 200 } else { 404 })
    }
}
