//! Portal landing view after sign-in.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::state::auth::use_auth;
use crate::util::auth::Portal;

#[component]
pub fn PortalOverview(portal: Portal) -> impl IntoView {
    let auth = use_auth();
    let greeting = move || auth.user().map_or_else(|| "Welcome".to_owned(), |u| format!("Welcome, {}", u.name));

    view! {
        <Title text=portal.title()/>
        <section class="page page--overview">
            <h1>{greeting}</h1>
            <p class="page__summary">{portal.title()}</p>
            <div class="overview-grid">
                {portal
                    .nav_links()
                    .iter()
                    .filter(|(_, path)| *path != portal.home_path())
                    .map(|(label, path)| {
                        view! {
                            <div class="overview-card">
                                <A href=*path>{*label}</A>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
