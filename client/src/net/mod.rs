//! Networking modules for the session endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the external identity service, and `types` defines the
//! session payloads it returns.

pub mod api;
pub mod types;
