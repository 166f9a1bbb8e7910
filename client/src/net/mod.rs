//! Networking modules for the activities REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the three HTTP calls and `types` defines the wire schema they
//! decode into.

pub mod api;
pub mod types;
