//! Posts view controller state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PostsPage` owns one `PostsViewState`. Two independent loads feed it on
//! mount: session auth-init and the posts fetch. Each outcome is applied the
//! moment it resolves, in whatever order the two finish.
//!
//! Only the posts fetch drives `loading`. An auth-init failure records its
//! error but leaves the page in the loading state until posts resolve.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use crate::auth::session::{AuthSession, SessionFactory};
use crate::net::api::PostsActor;
use crate::net::types::Post;

/// User-visible load failures. Both share a single error slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("Error initializing authentication.")]
    AuthInit,

    #[error("Error fetching posts.")]
    FetchPosts,
}

/// Outcome of one of the two mount-time loads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostsEvent {
    Auth(Result<bool, LoadError>),
    Posts(Result<Vec<Post>, LoadError>),
}

/// What the page should render right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostsView<'a> {
    Loading,
    Error(LoadError),
    LoginPrompt,
    Posts(&'a [Post]),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostsViewState {
    pub authenticated: bool,
    pub posts: Vec<Post>,
    pub loading: bool,
    pub error: Option<LoadError>,
}

impl Default for PostsViewState {
    fn default() -> Self {
        Self { authenticated: false, posts: Vec::new(), loading: true, error: None }
    }
}

impl PostsViewState {
    /// Fold a load outcome into the state. Errors overwrite the slot.
    pub fn apply(&mut self, event: PostsEvent) {
        match event {
            PostsEvent::Auth(Ok(authenticated)) => self.authenticated = authenticated,
            PostsEvent::Auth(Err(e)) => self.error = Some(e),
            PostsEvent::Posts(Ok(posts)) => {
                self.posts = posts;
                self.loading = false;
            }
            PostsEvent::Posts(Err(e)) => {
                self.error = Some(e);
                self.loading = false;
            }
        }
    }

    /// Resolve the render state: loading, then error, then login gate,
    /// then content.
    #[must_use]
    pub fn view(&self) -> PostsView<'_> {
        if self.loading {
            return PostsView::Loading;
        }
        if let Some(e) = self.error {
            return PostsView::Error(e);
        }
        if !self.authenticated {
            return PostsView::LoginPrompt;
        }
        PostsView::Posts(&self.posts)
    }
}

/// Create a session and ask whether it is authenticated.
///
/// # Errors
///
/// Returns `LoadError::AuthInit` if the session client cannot be created.
pub async fn init_auth<F: SessionFactory>(factory: &F) -> Result<bool, LoadError> {
    match factory.create().await {
        Ok(session) => Ok(session.is_authenticated()),
        Err(e) => {
            leptos::logging::error!("authentication error: {e}");
            Err(LoadError::AuthInit)
        }
    }
}

/// Fetch the post collection from the actor.
///
/// # Errors
///
/// Returns `LoadError::FetchPosts` on any actor failure.
pub async fn fetch_posts<A: PostsActor>(actor: &A) -> Result<Vec<Post>, LoadError> {
    match actor.get_posts().await {
        Ok(posts) => {
            leptos::logging::log!("fetched {} posts", posts.len());
            Ok(posts)
        }
        Err(e) => {
            leptos::logging::error!("error fetching posts: {e}");
            Err(LoadError::FetchPosts)
        }
    }
}

/// Run both mount-time loads concurrently, handing each outcome to `apply`
/// as soon as it resolves.
pub async fn mount_posts_view<F, A, H>(factory: &F, actor: &A, apply: H)
where
    F: SessionFactory,
    A: PostsActor,
    H: Fn(PostsEvent),
{
    let auth = async { apply(PostsEvent::Auth(init_auth(factory).await)) };
    let posts = async { apply(PostsEvent::Posts(fetch_posts(actor).await)) };
    futures::join!(auth, posts);
}
