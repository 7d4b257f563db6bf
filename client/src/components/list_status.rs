//! Loading / error / empty banner shown above every resource table.

use leptos::prelude::*;

#[component]
pub fn ListStatus(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] empty: Signal<bool>,
    empty_text: &'static str,
) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <p class="list-status list-status--loading" role="status">
                "Loading..."
            </p>
        </Show>
        <Show when=move || error.get().is_some()>
            <p class="list-status list-status--error" role="alert">
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
        <Show when=move || !loading.get() && error.get().is_none() && empty.get()>
            <p class="list-status list-status--empty">{empty_text}</p>
        </Show>
    }
}
