//! Network facility consumed by the file resolver
//!
//! The engine never talks to a transport directly; it goes through [`Fetch`]:
//!
//! - [`HttpFetcher`]: real HTTP(S) via reqwest
//! - [`DirFetcher`]: serves a local site directory
//! - [`MemoryFetcher`]: in-memory site, records every request

pub mod dir;
pub mod http;
pub mod memory;

pub use dir::DirFetcher;
pub use http::{DEFAULT_TIMEOUT, HttpFetcher, USER_AGENT, build_client};
pub use memory::{MemoryFetcher, Method};

use thiserror::Error;
use url::Url;

/// Status and body of a GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: 404,
            body: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        is_success(self.status)
    }
}

/// 2xx check shared by GET responses and HEAD checks
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Transport failures (as opposed to non-2xx answers)
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported URL: {0}")]
    UnsupportedUrl(String),

    #[error("Connection refused: {0}")]
    Refused(String),
}

/// URL → status + body, plus an existence check
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn get(&self, url: &Url) -> Result<Response, FetchError>;

    /// Lightweight existence check, returns the status code only
    async fn head(&self, url: &Url) -> Result<u16, FetchError>;
}

impl<F: Fetch> Fetch for &F {
    async fn get(&self, url: &Url) -> Result<Response, FetchError> {
        (**self).get(url).await
    }

    async fn head(&self, url: &Url) -> Result<u16, FetchError> {
        (**self).head(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(is_success(200));
        assert!(is_success(204));
        assert!(!is_success(199));
        assert!(!is_success(301));
        assert!(!is_success(404));
        assert!(!is_success(501));
    }

    #[test]
    fn test_response_constructors() {
        assert!(Response::ok("x").is_success());
        assert!(!Response::not_found().is_success());
    }
}
