//! Posts passthrough.
//!
//! ERROR HANDLING
//! ==============
//! Upstream detail is logged, never forwarded: the browser only sees `503`
//! (no upstream configured) or `502` (upstream failed).

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use client::net::types::Post;

use crate::state::AppState;

/// `GET /api/posts` — fetch the post collection from the upstream service.
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, StatusCode> {
    let Some(upstream) = state.upstream.as_ref() else {
        tracing::warn!("posts requested but no upstream configured");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    match upstream.get_posts().await {
        Ok(posts) => {
            tracing::debug!(count = posts.len(), "posts fetched");
            Ok(Json(posts))
        }
        Err(e) => {
            tracing::error!(error = %e, "posts upstream failed");
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

#[cfg(test)]
#[path = "posts_test.rs"]
mod tests;
