//! HTTP access to the posts actor.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the actor is unreachable and calls return
//! `ApiError::Unavailable`, since posts are only fetched from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure surfaces as an `ApiError` so the view controller can collapse
//! it into its single error slot without panicking during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Post;

/// Path of the posts passthrough served by the host.
pub const DEFAULT_POSTS_ENDPOINT: &str = "/api/posts";

/// Errors produced while talking to the posts actor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("posts request failed: {0}")]
    Request(String),

    #[error("posts request failed: {0}")]
    Status(u16),

    #[error("posts response decode failed: {0}")]
    Decode(String),

    #[error("posts actor not available on server")]
    Unavailable,
}

/// Data collaborator: anything that can produce the post collection.
#[allow(async_fn_in_trait)]
pub trait PostsActor {
    async fn get_posts(&self) -> Result<Vec<Post>, ApiError>;
}

/// Posts actor reached through a plain `GET` returning a JSON array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpPostsActor {
    endpoint: String,
}

impl HttpPostsActor {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpPostsActor {
    fn default() -> Self {
        Self::new(DEFAULT_POSTS_ENDPOINT)
    }
}

impl PostsActor for HttpPostsActor {
    async fn get_posts(&self) -> Result<Vec<Post>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint)
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            check_status(resp.status())?;
            resp.json::<Vec<Post>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}
