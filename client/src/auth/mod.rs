//! Browser-session authentication.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider writes a delegation record into browser storage
//! after login. This module only reads that record back; it never talks to
//! the provider itself.

pub mod session;
