//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It only carries the optional posts upstream; the host keeps no posts of
//! its own.

use std::sync::Arc;

use crate::upstream::PostsUpstream;

/// Clone is required by Axum; the upstream is Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    pub upstream: Option<Arc<dyn PostsUpstream>>,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: Option<Arc<dyn PostsUpstream>>) -> Self {
        Self { upstream }
    }
}
