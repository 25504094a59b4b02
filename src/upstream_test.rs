use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::net::types::Principal;

use super::*;

/// Serve `router` on an ephemeral local port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind should succeed");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

fn upstream(url: String) -> HttpPostsUpstream {
    HttpPostsUpstream::new(url, Duration::from_secs(2)).expect("client should build")
}

#[tokio::test]
async fn get_posts_decodes_json_array() {
    let base = serve(Router::new().route(
        "/posts",
        get(|| async {
            axum::Json(serde_json::json!([
                { "author": "aaaaa-aa", "content": "first" },
                { "author": "2vxsx-fae", "content": "second" }
            ]))
        }),
    ))
    .await;

    let posts = upstream(format!("{base}/posts")).get_posts().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].author, Principal::new("aaaaa-aa"));
    assert_eq!(posts[1].content, "second");
}

#[tokio::test]
async fn get_posts_maps_error_status() {
    let base = serve(Router::new().route("/posts", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))).await;

    let err = upstream(format!("{base}/posts")).get_posts().await.unwrap_err();
    assert!(matches!(err, UpstreamError::Status { status: 500 }));
}

#[tokio::test]
async fn get_posts_rejects_wrong_shape() {
    let base = serve(Router::new().route("/posts", get(|| async { axum::Json(serde_json::json!({ "posts": [] })) }))).await;

    let err = upstream(format!("{base}/posts")).get_posts().await.unwrap_err();
    assert!(matches!(err, UpstreamError::Decode(_)));
}

#[tokio::test]
async fn get_posts_reports_unreachable_host() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = upstream(format!("http://{addr}/posts")).get_posts().await.unwrap_err();
    assert!(matches!(err, UpstreamError::Request(_)));
}

#[test]
fn url_is_kept_verbatim() {
    let u = upstream("http://posts.internal/v1/posts".to_owned());
    assert_eq!(u.url(), "http://posts.internal/v1/posts");
}
