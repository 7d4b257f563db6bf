//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` installs the three tab-wide contexts (auth provider, toast stack,
//! REST client) before any route renders, so guards and pages can assume
//! they exist. Session restore and periodic revalidation only run after
//! hydration; server rendering always sees the initial `Authenticating`
//! state and emits the guard placeholder.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::portal_shell::PortalShell;
use crate::components::toast_stack::ToastStack;
use crate::i18n::Locale;
use crate::net::api::ApiClient;
use crate::pages::{
    activity::ActivityPage, categories::CategoriesPage, disputes::DisputesPage, home::HomePage, login::LoginPage,
    overview::PortalOverview, payouts::PayoutsPage, services::ServicesPage,
};
use crate::state::auth::AuthContext;
use crate::state::toast::ToastState;
use crate::util::auth::Portal;

/// How often the browser re-checks the stored session token.
pub const REVALIDATE_INTERVAL_SECS: u64 = 30;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new();
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);
    provide_context(ApiClient::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::util::session_storage::BrowserSessionStore;

        Effect::new(move || auth.restore(&BrowserSessionStore));

        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(REVALIDATE_INTERVAL_SECS)).await;
                if auth.revalidate(&BrowserSessionStore) {
                    crate::state::toast::notify(
                        toasts,
                        crate::state::toast::ToastKind::Info,
                        "Your session has ended. Please sign in again.",
                    );
                }
            }
        });
    }

    let default_home = Locale::default().home_path();

    view! {
        <Stylesheet id="leptos" href="/pkg/homefix.css"/>
        <Title text="HomeFix"/>
        <ToastStack/>

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=StaticSegment("") view=move || view! { <Redirect path=default_home.clone()/> }/>

                <Route
                    path=(StaticSegment("admin"), StaticSegment("login"))
                    view=|| view! { <LoginPage portal=Portal::Admin/> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <PortalShell portal=Portal::Admin><PortalOverview portal=Portal::Admin/></PortalShell> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("services"))
                    view=|| view! { <PortalShell portal=Portal::Admin><ServicesPage/></PortalShell> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("categories"))
                    view=|| view! { <PortalShell portal=Portal::Admin><CategoriesPage/></PortalShell> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("payouts"))
                    view=|| view! { <PortalShell portal=Portal::Admin><PayoutsPage/></PortalShell> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("activity"))
                    view=|| view! { <PortalShell portal=Portal::Admin><ActivityPage/></PortalShell> }
                />

                <Route
                    path=(StaticSegment("support"), StaticSegment("login"))
                    view=|| view! { <LoginPage portal=Portal::Support/> }
                />
                <Route
                    path=StaticSegment("support")
                    view=|| view! { <PortalShell portal=Portal::Support><PortalOverview portal=Portal::Support/></PortalShell> }
                />
                <Route
                    path=(StaticSegment("support"), StaticSegment("disputes"))
                    view=|| view! { <PortalShell portal=Portal::Support><DisputesPage/></PortalShell> }
                />

                <Route path=ParamSegment("locale") view=HomePage/>
            </Routes>
        </Router>
    }
}
