//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both portals gate their routes identically: wait while the session is
//! resolving, bounce to the portal's own login page otherwise, render once
//! authenticated. The guard holds no state; it is a projection of
//! `AuthState`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthContext, AuthState};

/// A protected area of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Portal {
    Admin,
    Support,
}

impl Portal {
    pub fn title(self) -> &'static str {
        match self {
            Self::Admin => "Admin Portal",
            Self::Support => "Support Portal",
        }
    }

    pub fn home_path(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Support => "/support",
        }
    }

    pub fn login_path(self) -> &'static str {
        match self {
            Self::Admin => "/admin/login",
            Self::Support => "/support/login",
        }
    }

    /// Sidebar entries: (label, path).
    pub fn nav_links(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Admin => &[
                ("Overview", "/admin"),
                ("Services", "/admin/services"),
                ("Categories", "/admin/categories"),
                ("Payouts", "/admin/payouts"),
                ("Activity", "/admin/activity"),
            ],
            Self::Support => &[("Overview", "/support"), ("Disputes", "/support/disputes")],
        }
    }
}

/// What a protected route should do for the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Loading,
    Redirect(&'static str),
    Render,
}

pub fn guard_outcome(state: &AuthState, portal: Portal) -> GuardOutcome {
    match state {
        AuthState::Authenticating => GuardOutcome::Loading,
        AuthState::Unauthenticated | AuthState::Error(_) => GuardOutcome::Redirect(portal.login_path()),
        AuthState::Authenticated(_) => GuardOutcome::Render,
    }
}

/// Redirect to the portal's login page whenever the guard says so.
pub fn install_unauth_redirect<F>(auth: AuthContext, portal: Portal, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let state = auth.state();
    Effect::new(move || {
        if let GuardOutcome::Redirect(path) = state.with(|s| guard_outcome(s, portal)) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
