//! Networking modules for the external auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the login/signup calls and interprets their replies, and
//! `types` defines the JSON shapes on the wire.

pub mod api;
pub mod types;
