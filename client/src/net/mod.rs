//! Networking modules for the marketplace REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns HTTP transport and bearer-token attachment, `resources` defines
//! the per-collection contract, `error` normalizes failures, and `types`
//! defines the wire schema.

pub mod api;
pub mod error;
pub mod resources;
pub mod types;
