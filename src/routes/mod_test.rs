use std::sync::Arc;

use async_trait::async_trait;
use client::net::types::{Post, Principal};

use super::*;
use crate::upstream::{PostsUpstream, UpstreamError};

struct OnePost;

#[async_trait]
impl PostsUpstream for OnePost {
    async fn get_posts(&self) -> Result<Vec<Post>, UpstreamError> {
        Ok(vec![Post { author: Principal::new("aaaaa-aa"), content: "hello".into() }])
    }
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind should succeed");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_is_ok() {
    let base = serve(api_routes(AppState::default())).await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
}

#[tokio::test]
async fn api_posts_serves_upstream_json() {
    let base = serve(api_routes(AppState::new(Some(Arc::new(OnePost))))).await;
    let resp = reqwest::get(format!("{base}/api/posts")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let posts: Vec<Post> = resp.json().await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].author.to_string(), "aaaaa-aa");
}

#[tokio::test]
async fn api_posts_without_upstream_is_503() {
    let base = serve(api_routes(AppState::default())).await;
    let resp = reqwest::get(format!("{base}/api/posts")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 503);
}
