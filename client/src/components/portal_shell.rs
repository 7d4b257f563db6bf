//! Chrome shared by every protected portal page: sidebar, identity, sign-out.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::route_guard::ProtectedRoute;
use crate::state::auth::use_auth;
use crate::util::auth::Portal;
use crate::util::session_storage::BrowserSessionStore;

#[component]
pub fn PortalShell(portal: Portal, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    // The route guard notices the state change and redirects to login.
    let on_logout = move |_| auth.logout(&BrowserSessionStore);

    let display_name = move || auth.user().map(|u| u.name).unwrap_or_default();
    let email = move || auth.user().map(|u| u.email).unwrap_or_default();
    let role = move || auth.role().unwrap_or_else(|| "no role".to_owned());

    view! {
        <ProtectedRoute portal=portal>
            <div class="portal">
                <aside class="portal__sidebar">
                    <h2 class="portal__title">{portal.title()}</h2>
                    <nav class="portal__nav">
                        {portal
                            .nav_links()
                            .iter()
                            .map(|(label, path)| view! { <A href=*path>{*label}</A> })
                            .collect_view()}
                    </nav>
                </aside>
                <div class="portal__body">
                    <header class="portal__header">
                        <span class="portal__user" title=email>{display_name}</span>
                        <span class="badge portal__role">{role}</span>
                        <button class="btn portal__logout" on:click=on_logout>
                            "Sign out"
                        </button>
                    </header>
                    <main class="portal__main">{children()}</main>
                </div>
            </div>
        </ProtectedRoute>
    }
}
