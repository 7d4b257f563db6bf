//! Gate for portal routes.
//!
//! DESIGN
//! ======
//! Renders children only for an authenticated session. The redirect itself is
//! an effect so it fires again if the session ends while the page is open.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth;
use crate::util::auth::{GuardOutcome, Portal, guard_outcome, install_unauth_redirect};

#[component]
pub fn ProtectedRoute(portal: Portal, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    install_unauth_redirect(auth, portal, use_navigate());

    let state = auth.state();
    let outcome = move || state.with(|s| guard_outcome(s, portal));

    view! {
        <Show
            when=move || outcome() == GuardOutcome::Render
            fallback=move || {
                view! {
                    <div class="guard-placeholder" role="status">
                        <p>
                            {move || {
                                if outcome() == GuardOutcome::Loading { "Loading..." } else { "Redirecting to sign in..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
