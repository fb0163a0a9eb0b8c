//! `/chat` entry point reached after sign-in.
//!
//! The chat workspace itself lives elsewhere. This route completes the loader
//! hand-off: the landing page leaves the overlay up after a successful
//! sign-in, and the destination hides it once mounted.

use std::sync::Arc;

use leptos::prelude::*;

use crate::util::capability::LoaderCapability;

#[component]
pub fn ChatPage() -> impl IntoView {
    let loader = expect_context::<Arc<dyn LoaderCapability>>();
    Effect::new(move || loader.hide_loader());

    view! {
        <div class="chat-page">
            <p class="chat-page__status">"Preparando seu espaço de trabalho..."</p>
        </div>
    }
}
