//! Reusable UI components shared by pages.
//!
//! ARCHITECTURE
//! ============
//! Components render state and forward user intent. Network calls and state
//! transitions stay in `state` and `pages`.

pub mod decor;
pub mod landing;
pub mod list_status;
pub mod portal_shell;
pub mod route_guard;
pub mod toast_stack;
