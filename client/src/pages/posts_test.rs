use super::*;
use crate::net::types::Principal;
use crate::state::posts::LoadError;

#[test]
fn status_text_for_loading() {
    assert_eq!(status_text(PostsView::Loading).as_deref(), Some("Loading..."));
}

#[test]
fn status_text_prefixes_errors() {
    assert_eq!(
        status_text(PostsView::Error(LoadError::AuthInit)).as_deref(),
        Some("Error: Error initializing authentication.")
    );
    assert_eq!(
        status_text(PostsView::Error(LoadError::FetchPosts)).as_deref(),
        Some("Error: Error fetching posts.")
    );
}

#[test]
fn status_text_for_login_gate() {
    assert_eq!(status_text(PostsView::LoginPrompt).as_deref(), Some("Please login to see content.."));
}

#[test]
fn status_text_absent_when_posts_render() {
    let posts = vec![Post { author: Principal::new("aaaaa-aa"), content: "hi".to_owned() }];
    assert_eq!(status_text(PostsView::Posts(&posts)), None);
    assert_eq!(status_text(PostsView::Posts(&[])), None);
}

// =============================================================
// Rendered HTML
// =============================================================

#[cfg(feature = "ssr")]
fn render(current: PostsView<'_>) -> String {
    Owner::new().with(|| render_view(current).to_html())
}

#[cfg(feature = "ssr")]
#[test]
fn renders_one_item_per_post_in_order() {
    let posts: Vec<Post> = (0..3)
        .map(|i| Post { author: Principal::new(format!("author-{i}")), content: format!("body {i}") })
        .collect();
    let html = render(PostsView::Posts(&posts));

    assert_eq!(html.matches(r#"class="post-item""#).count(), 3);
    let positions: Vec<usize> = (0..3).map(|i| html.find(&format!("body {i}")).expect("content rendered")).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    for i in 0..3 {
        assert!(html.contains(&format!("author-{i}")));
    }
    assert!(!html.contains(LOADING_TEXT));
}

#[cfg(feature = "ssr")]
#[test]
fn renders_empty_list_without_items() {
    let html = render(PostsView::Posts(&[]));
    assert!(html.contains("posts-page__list"));
    assert_eq!(html.matches(r#"class="post-item""#).count(), 0);
}

#[cfg(feature = "ssr")]
#[test]
fn renders_loading_text_only() {
    let html = render(PostsView::Loading);
    assert!(html.contains("Loading..."));
    assert!(!html.contains("post-item"));
}

#[cfg(feature = "ssr")]
#[test]
fn renders_error_text() {
    let html = render(PostsView::Error(LoadError::FetchPosts));
    assert!(html.contains("Error: Error fetching posts."));
    assert!(!html.contains("post-item"));
}

#[cfg(feature = "ssr")]
#[test]
fn renders_login_prompt() {
    let html = render(PostsView::LoginPrompt);
    assert!(html.contains("Please login to see content.."));
    assert!(!html.contains("post-item"));
}
