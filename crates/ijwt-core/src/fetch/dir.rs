//! Serves a site straight from a local directory
//!
//! The directory is mounted at the site base: `http://host/site/pages/a.html`
//! maps to `{root}/pages/a.html`. URLs on the same origin but outside the
//! site path (the empty include directory resolves against the origin root)
//! are mapped relative to the origin instead. Other origins are never served,
//! and neither is anything outside the directory, including paths that only
//! escape it after percent-decoding (`..%2Fsecret.txt`).

use super::{Fetch, FetchError, Response};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use url::Url;

#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: Url,
    root_dir: PathBuf,
    site_base: Url,
}

impl DirFetcher {
    /// # Errors
    ///
    /// Returns error if `root` cannot be canonicalized
    pub fn new(root: impl AsRef<Path>, site_base: Url) -> Result<Self, FetchError> {
        let canonical = root.as_ref().canonicalize()?;
        let root = Url::from_directory_path(&canonical)
            .map_err(|_| FetchError::UnsupportedUrl(canonical.display().to_string()))?;
        Ok(Self {
            root,
            root_dir: canonical,
            site_base,
        })
    }

    /// Filesystem path for `url`, or `None` when it is outside the site
    pub fn local_path(&self, url: &Url) -> Option<PathBuf> {
        if url.origin() != self.site_base.origin() {
            return None;
        }

        let path = url.path();
        let relative = path
            .strip_prefix(self.site_base.path())
            .unwrap_or_else(|| path.trim_start_matches('/'));

        // Percent-decoding happens in to_file_path
        let local = self.root.join(relative).ok()?.to_file_path().ok()?;
        let inside = local
            .strip_prefix(&self.root_dir)
            .ok()?
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if !inside {
            tracing::warn!(%url, "refusing path outside the site directory");
            return None;
        }
        Some(local)
    }

    fn read(&self, url: &Url) -> Result<Option<String>, FetchError> {
        let Some(path) = self.local_path(url) else {
            return Ok(None);
        };
        if path.is_dir() {
            return Ok(None);
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FetchError::Io(e)),
        }
    }
}

impl Fetch for DirFetcher {
    async fn get(&self, url: &Url) -> Result<Response, FetchError> {
        Ok(match self.read(url)? {
            Some(body) => Response::ok(body),
            None => Response::not_found(),
        })
    }

    async fn head(&self, url: &Url) -> Result<u16, FetchError> {
        Ok(match self.local_path(url) {
            Some(path) if path.is_file() => 200,
            _ => 404,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("partials")).unwrap();
        std::fs::write(temp.path().join("index.html"), "<p>index</p>").unwrap();
        std::fs::write(temp.path().join("partials/header.html"), "<nav></nav>").unwrap();
        std::fs::write(temp.path().join("partials/with space.html"), "spaced").unwrap();
        temp
    }

    #[tokio::test]
    async fn test_serves_files_under_site_base() {
        let temp = site();
        let base = Url::parse("http://localhost/D00264604/website/").unwrap();
        let fetcher = DirFetcher::new(temp.path(), base.clone()).unwrap();

        let response = fetcher
            .get(&base.join("partials/header.html").unwrap())
            .await
            .unwrap();
        assert_eq!(response, Response::ok("<nav></nav>"));

        // Origin-root URLs map onto the directory root too
        let response = fetcher
            .get(&Url::parse("http://localhost/index.html").unwrap())
            .await
            .unwrap();
        assert_eq!(response, Response::ok("<p>index</p>"));
    }

    #[tokio::test]
    async fn test_missing_and_directories_are_not_found() {
        let temp = site();
        let base = Url::parse("http://localhost/").unwrap();
        let fetcher = DirFetcher::new(temp.path(), base.clone()).unwrap();

        let missing = fetcher.get(&base.join("nope.html").unwrap()).await.unwrap();
        assert_eq!(missing.status, 404);

        let dir = fetcher.get(&base.join("partials/").unwrap()).await.unwrap();
        assert_eq!(dir.status, 404);
    }

    #[tokio::test]
    async fn test_other_origins_are_not_served() {
        let temp = site();
        let fetcher = DirFetcher::new(temp.path(), Url::parse("http://localhost/").unwrap()).unwrap();

        let url = Url::parse("http://example.org/index.html").unwrap();
        assert_eq!(fetcher.get(&url).await.unwrap().status, 404);
        assert_eq!(fetcher.head(&url).await.unwrap(), 404);
    }

    #[tokio::test]
    async fn test_percent_encoded_names_and_head() {
        let temp = site();
        let base = Url::parse("http://localhost/").unwrap();
        let fetcher = DirFetcher::new(temp.path(), base.clone()).unwrap();

        let url = base.join("partials/with space.html").unwrap();
        assert_eq!(fetcher.get(&url).await.unwrap(), Response::ok("spaced"));
        assert_eq!(fetcher.head(&url).await.unwrap(), 200);
        assert_eq!(fetcher.head(&base.join("x.html").unwrap()).await.unwrap(), 404);
    }

    #[test]
    fn test_dot_segments_cannot_escape_root() {
        let temp = site();
        let base = Url::parse("http://localhost/").unwrap();
        let fetcher = DirFetcher::new(temp.path(), base.clone()).unwrap();

        let url = base.join("../../etc/passwd").unwrap();
        let path = fetcher.local_path(&url).unwrap();
        assert!(path.starts_with(temp.path().canonicalize().unwrap()));
    }

    #[tokio::test]
    async fn test_encoded_separator_cannot_escape_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("site");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(temp.path().join("secret.txt"), "TOP SECRET").unwrap();

        let base = Url::parse("http://localhost/").unwrap();
        let fetcher = DirFetcher::new(&root, base.clone()).unwrap();

        for name in ["..%2Fsecret.txt", "partials/..%2F..%2Fsecret.txt", "%2E%2E%2Fsecret.txt"] {
            let url = base.join(name).unwrap();
            assert!(fetcher.local_path(&url).is_none(), "{}", url);
            assert_eq!(fetcher.get(&url).await.unwrap().status, 404);
            assert_eq!(fetcher.head(&url).await.unwrap(), 404);
        }
    }
}
