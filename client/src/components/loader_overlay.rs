//! Global loading overlay driven by [`LoaderState`].

use leptos::prelude::*;

use crate::state::loader::LoaderState;

#[component]
pub fn LoaderOverlay() -> impl IntoView {
    let loader = expect_context::<RwSignal<LoaderState>>();

    view! {
        <Show when=move || loader.get().visible>
            <div class="loader-overlay" role="status" aria-live="polite">
                <span class="loader-overlay__spinner" aria-hidden="true"></span>
                <span class="loader-overlay__label">"Carregando..."</span>
            </div>
        </Show>
    }
}
