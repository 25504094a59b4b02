//! Reusable UI component modules.

pub mod post_item;
