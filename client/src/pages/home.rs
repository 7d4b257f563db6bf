//! Public, locale-aware landing page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::landing::{CallToAction, HowItWorks, Hero, ServicesGrid, SiteFooter, SiteHeader};
use crate::i18n::Locale;

/// Landing page for `/:locale`. Unknown locale segments render English.
#[component]
pub fn HomePage() -> impl IntoView {
    let params = use_params_map();
    let locale = Memo::new(move |_| params.with(|p| Locale::resolve(p.get("locale").as_deref())));

    view! {
        {move || {
            let locale = locale.get();
            view! {
                <Title text=locale.copy().hero_title/>
                <div class="landing" lang=locale.code()>
                    <SiteHeader locale=locale/>
                    <main>
                        <Hero locale=locale/>
                        <ServicesGrid locale=locale/>
                        <HowItWorks locale=locale/>
                        <CallToAction locale=locale/>
                    </main>
                    <SiteFooter locale=locale/>
                </div>
            }
        }}
    }
}
