//! HTTP transport built on reqwest

use super::{Fetch, FetchError, Response, is_success};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Default timeout for partial requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request
pub const USER_AGENT: &str = "ijwt";

/// Builds HTTP client with appropriate settings for fetching partials
///
/// # Arguments
///
/// * `timeout` - Request timeout duration
///
/// # Errors
///
/// Returns error if client construction fails
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(timeout)?,
        })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    async fn get(&self, url: &Url) -> Result<Response, FetchError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        if !is_success(status) {
            return Ok(Response {
                status,
                body: String::new(),
            });
        }

        let body = response.text().await?;
        Ok(Response { status, body })
    }

    async fn head(&self, url: &Url) -> Result<u16, FetchError> {
        let response = self.client.head(url.clone()).send().await?;
        Ok(response.status().as_u16())
    }
}
