//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, session
//! storage, token payloads) from page and component logic to improve reuse
//! and testability.

pub mod auth;
pub mod clock;
pub mod session_storage;
pub mod token;
