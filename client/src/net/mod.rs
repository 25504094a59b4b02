//! Networking modules for the posts service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` reaches the external posts actor over HTTP, and `types` defines the
//! wire schema shared with the host server.

pub mod api;
pub mod types;
