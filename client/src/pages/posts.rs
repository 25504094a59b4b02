//! Posts page: gated list of posts from the posts actor.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use leptos::prelude::*;

use crate::components::post_item::PostItem;
use crate::net::types::Post;
use crate::state::posts::{PostsView, PostsViewState};

pub(crate) const LOADING_TEXT: &str = "Loading...";
pub(crate) const LOGIN_PROMPT_TEXT: &str = "Please login to see content..";

/// Text shown for every non-content state; `None` when posts render.
pub(crate) fn status_text(view: PostsView<'_>) -> Option<String> {
    match view {
        PostsView::Loading => Some(LOADING_TEXT.to_owned()),
        PostsView::Error(e) => Some(format!("Error: {e}")),
        PostsView::LoginPrompt => Some(LOGIN_PROMPT_TEXT.to_owned()),
        PostsView::Posts(_) => None,
    }
}

/// Posts page. Kicks off session auth-init and the posts fetch on mount.
#[component]
pub fn PostsPage() -> impl IntoView {
    let state = RwSignal::new(PostsViewState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let factory = crate::auth::session::StoredSessionFactory::browser();
        let actor = crate::net::api::HttpPostsActor::default();
        crate::state::posts::mount_posts_view(&factory, &actor, move |ev| {
            // The page may already be gone; late results are dropped.
            let _ = state.try_update(|s| s.apply(ev));
        })
        .await;
    });

    view! {
        <div class="posts-page">
            {move || state.with(|s| render_view(s.view()))}
        </div>
    }
}

fn render_view(current: PostsView<'_>) -> AnyView {
    match current {
        PostsView::Posts(posts) => {
            let items: Vec<(usize, Post)> = posts.iter().cloned().enumerate().collect();
            view! {
                <div class="posts-page__list">
                    <For
                        each=move || items.clone()
                        key=|(index, _): &(usize, Post)| *index
                        children=|(_, post): (usize, Post)| {
                            view! { <PostItem author=post.author.to_string() content=post.content/> }
                        }
                    />
                </div>
            }
            .into_any()
        }
        other => {
            let text = status_text(other).unwrap_or_default();
            view! { <div class="posts-page__status">{text}</div> }.into_any()
        }
    }
}
