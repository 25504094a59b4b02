//! Wire DTOs for the posts actor.
//!
//! DESIGN
//! ======
//! The host server re-exports these so the `/api/posts` passthrough and the
//! browser decode exactly the same schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Textual form of the anonymous identity. Sessions bound to it are never
/// considered authenticated.
pub const ANONYMOUS_PRINCIPAL: &str = "2vxsx-fae";

/// Opaque principal identifier of a post author or session holder.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self(ANONYMOUS_PRINCIPAL.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.0 == ANONYMOUS_PRINCIPAL
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single post as returned by the posts actor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Principal that authored the post.
    pub author: Principal,
    /// Free-form post body.
    pub content: String,
}
