//! Email + password sign-in shared by both portals.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page only collects credentials. `AuthContext::login` owns the request,
//! token validation and storage; this page reacts to the resulting state by
//! redirecting to the portal home or showing the normalized error.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginRequest;
use crate::state::auth::use_auth;
use crate::util::auth::Portal;

/// Trim the email and require both fields before anything hits the network.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage(portal: Portal) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let local_error = RwSignal::new(None::<&'static str>);
    #[cfg(feature = "hydrate")]
    let api = StoredValue::new(crate::state::resource::use_api_client());

    // Already signed in, or just finished signing in.
    Effect::new(move || {
        if auth.is_authenticated() {
            navigate(portal.home_path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let busy = move || auth.is_loading();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let credentials = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                local_error.set(Some(message));
                return;
            }
        };
        local_error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                if auth.login(&api, &crate::util::session_storage::BrowserSessionStore, credentials).await {
                    password.set(String::new());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
        }
    };

    let on_edit = move || {
        local_error.set(None);
        auth.clear_error();
    };

    let message = move || local_error.get().map(str::to_owned).or_else(|| auth.error());

    view! {
        <Title text=format!("Sign in | {}", portal.title())/>
        <div class="login-page">
            <div class="login-card">
                <h1>"HomeFix"</h1>
                <p class="login-card__subtitle">{portal.title()}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="you@homefix.com"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            on_edit();
                        }
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            on_edit();
                        }
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || message().is_some()>
                    <p class="login-message login-message--error" role="alert">
                        {move || message().unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </div>
    }
}
