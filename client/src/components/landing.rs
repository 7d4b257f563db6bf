//! Public landing-page sections.
//!
//! Each section takes the active locale and reads its strings from
//! `i18n::LandingCopy`, so adding a locale never touches markup.

use leptos::prelude::*;

use crate::components::decor::{FloatingCube, GlowBlob};
use crate::i18n::Locale;

#[component]
pub fn SiteHeader(locale: Locale) -> impl IntoView {
    let copy = locale.copy();
    view! {
        <header class="site-header">
            <a href=locale.home_path() class="site-header__brand">
                "HomeFix"
            </a>
            <nav class="site-header__nav">
                <a href="#services">{copy.nav_services}</a>
                <a href="#how">{copy.nav_how}</a>
                <a href="#join">{copy.nav_join}</a>
            </nav>
            <div class="site-header__locales">
                {Locale::ALL
                    .iter()
                    .map(|other| {
                        let active = *other == locale;
                        view! {
                            <a href=other.home_path() class="locale" class:locale--active=active>
                                {other.code().to_uppercase()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </header>
    }
}

#[component]
pub fn Hero(locale: Locale) -> impl IntoView {
    let copy = locale.copy();
    view! {
        <section class="hero">
            <GlowBlob/>
            <div class="hero__text">
                <h1>{copy.hero_title}</h1>
                <p>{copy.hero_subtitle}</p>
                <a class="btn btn--primary" href="#services">
                    {copy.hero_cta}
                </a>
            </div>
            <FloatingCube label="🔧"/>
        </section>
    }
}

#[component]
pub fn ServicesGrid(locale: Locale) -> impl IntoView {
    let copy = locale.copy();
    view! {
        <section id="services" class="services-grid">
            <h2>{copy.services_title}</h2>
            <div class="services-grid__cards">
                {copy
                    .services
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <article class="service-card">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn HowItWorks(locale: Locale) -> impl IntoView {
    let copy = locale.copy();
    view! {
        <section id="how" class="how-it-works">
            <h2>{copy.how_title}</h2>
            <ol class="how-it-works__steps">
                {copy
                    .steps
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <li class="step">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
pub fn CallToAction(locale: Locale) -> impl IntoView {
    let copy = locale.copy();
    view! {
        <section id="join" class="cta">
            <GlowBlob tone="accent"/>
            <h2>{copy.cta_title}</h2>
            <p>{copy.cta_body}</p>
            <a class="btn btn--primary" href="mailto:pros@homefix.example">
                {copy.cta_button}
            </a>
        </section>
    }
}

#[component]
pub fn SiteFooter(locale: Locale) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span>{locale.copy().footer}</span>
            <span class="site-footer__portals">
                <a href="/admin">"Admin"</a>
                " · "
                <a href="/support">"Support"</a>
            </span>
        </footer>
    }
}
