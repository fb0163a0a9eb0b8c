//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::loader_overlay::LoaderOverlay;
use crate::pages::{chat::ChatPage, landing::LandingPage};
use crate::state::{auth::AuthState, loader::LoaderState};
use crate::util::capability::{AuthCapability, LoaderCapability, SessionAuth, SignalLoader};

/// Root application component.
///
/// Provides the session and loader state plus the capabilities built on them,
/// probes the current session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The overlay starts visible; the first page to mount hides it.
    let auth = RwSignal::new(AuthState::probing());
    let loader = RwSignal::new(LoaderState { visible: true });

    provide_context(auth);
    provide_context(loader);
    provide_context::<Arc<dyn AuthCapability>>(Arc::new(SessionAuth::new(auth)));
    provide_context::<Arc<dyn LoaderCapability>>(Arc::new(SignalLoader::new(loader)));

    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        if let Some(user) = &user {
            log::debug!("session active for {}", user.id);
        }
        auth.set(AuthState::resolved(user));
    });

    view! {
        <Title text="Tarsila"/>
        <Meta
            name="description"
            content="Transforme suas ideias em projetos culturais profissionais com o poder da inteligência artificial"
        />

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
            </Routes>
        </Router>
        <LoaderOverlay/>
    }
}
