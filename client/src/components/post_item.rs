//! Single post entry in the posts list.

use leptos::prelude::*;

/// Author principal as heading, body underneath.
#[component]
pub fn PostItem(author: String, content: String) -> impl IntoView {
    view! {
        <div class="post-item">
            <h3 class="post-item__author">{author}</h3>
            <p class="post-item__content">{content}</p>
        </div>
    }
}
