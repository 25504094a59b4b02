mod config;
mod routes;
mod state;
mod upstream;

use std::sync::Arc;

use crate::upstream::{HttpPostsUpstream, PostsUpstream};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;

    let upstream: Option<Arc<dyn PostsUpstream>> = match config.posts_upstream_url.as_deref() {
        Some(url) => {
            let client = HttpPostsUpstream::new(url, config.upstream_timeout())?;
            tracing::info!(url = client.url(), timeout_secs = config.upstream_timeout_secs, "posts upstream configured");
            Some(Arc::new(client))
        }
        None => {
            tracing::warn!("POSTS_UPSTREAM_URL not set; /api/posts will answer 503");
            None
        }
    };

    let app = routes::app(state::AppState::new(upstream))?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "postboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
