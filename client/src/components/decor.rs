//! Decorative CSS 3D elements for the landing page. Purely presentational.

use leptos::prelude::*;

/// Slowly rotating cube built from six transformed faces.
#[component]
pub fn FloatingCube(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    const FACES: [&str; 6] = ["front", "back", "right", "left", "top", "bottom"];

    view! {
        <div class="cube-scene" aria-hidden="true">
            <div class="cube">
                {FACES
                    .iter()
                    .map(|face| {
                        view! { <div class=format!("cube__face cube__face--{face}")>{label.unwrap_or("")}</div> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Blurred gradient blob behind hero content.
#[component]
pub fn GlowBlob(#[prop(default = "primary")] tone: &'static str) -> impl IntoView {
    view! { <div class=format!("glow-blob glow-blob--{tone}") aria-hidden="true"></div> }
}
