//! Client for the external posts service.
//!
//! DESIGN
//! ======
//! `PostsUpstream` is the seam between `/api/posts` and the real service so
//! handlers can be exercised with in-process fakes.

use std::time::Duration;

use async_trait::async_trait;
use client::net::types::Post;

/// Errors produced while fetching posts from the upstream service.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The HTTP request could not be completed.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The upstream answered with a non-success status.
    #[error("upstream response error: status {status}")]
    Status { status: u16 },

    /// The body was not a JSON post array.
    #[error("upstream response parse failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

#[async_trait]
pub trait PostsUpstream: Send + Sync {
    async fn get_posts(&self) -> Result<Vec<Post>, UpstreamError>;
}

/// `reqwest`-backed upstream issuing `GET {url}`.
pub struct HttpPostsUpstream {
    http: reqwest::Client,
    url: String,
}

impl HttpPostsUpstream {
    /// # Errors
    ///
    /// Returns `UpstreamError::ClientBuild` if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::ClientBuild(e.to_string()))?;
        Ok(Self { http, url: url.into() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PostsUpstream for HttpPostsUpstream {
    async fn get_posts(&self) -> Result<Vec<Post>, UpstreamError> {
        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { status: status.as_u16() });
        }
        resp.json::<Vec<Post>>()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;
