//! Fixed-position stack rendering `ToastState`.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=format!("toast {}", toast.kind.css_class()) role="status">
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__dismiss"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
