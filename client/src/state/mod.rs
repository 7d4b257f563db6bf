//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `resource`, `toast`) so components can
//! depend on small focused models. Each model is a plain struct with pure
//! transition methods, wrapped in a signal by whoever owns it.

pub mod auth;
pub mod resource;
pub mod toast;
