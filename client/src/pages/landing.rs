//! Public landing page: hero, plans, call-to-action and footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/`. Every CTA runs the same sign-in handler from
//! [`LandingFlow`]; once the session reports a signed-in user the page hands
//! over to `/chat`.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::button::{Button, ButtonSize};
use crate::components::pricing_card::PricingCard;
use crate::components::timestamp::Timestamp;
use crate::pages::landing_flow::{CtaWiring, LandingFlow, PageState, wire_ctas};
use crate::state::plans::PLANS;
use crate::util::capability::{AuthCapability, LoaderCapability, Navigator, RouterNavigator};

pub const SIGN_IN_LABEL: &str = "Entrar com Google";
pub const LOGO_PATH: &str = "/logo.png";
pub const LOGO_SIZE: u32 = 120;

/// Error line shown under a CTA, if any.
pub fn cta_error_text(state: &PageState) -> Option<String> {
    state.error_msg.clone().filter(|msg| !msg.is_empty())
}

/// Landing page. Auth and loader capabilities come from context; the
/// navigator does too when provided, otherwise the router's is used.
#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<Arc<dyn AuthCapability>>();
    let loader = expect_context::<Arc<dyn LoaderCapability>>();
    let navigator = use_context::<Arc<dyn Navigator>>().unwrap_or_else(|| RouterNavigator::shared(use_navigate()));
    let flow = LandingFlow::new(auth, loader, navigator);
    let page = RwSignal::new(PageState::default());

    // Mount: hide the inherited overlay, then redirect on every signed-in transition.
    let sync_flow = flow.clone();
    Effect::new(move |previous: Option<bool>| sync_flow.sync(previous));

    let CtaWiring { on_login, disabled } = wire_ctas(flow, page, |task| leptos::task::spawn_local(task));

    let cards = PLANS
        .iter()
        .map(|plan| view! { <PricingCard plan=plan on_login=on_login disabled=disabled/> })
        .collect::<Vec<_>>();

    view! {
        <div class="landing-page">
            <main class="landing-page__main">
                <section class="hero">
                    <img
                        class="hero__logo"
                        src=LOGO_PATH
                        alt="Logo Tarsila"
                        width=LOGO_SIZE.to_string()
                        height=LOGO_SIZE.to_string()
                    />
                    <h1 class="hero__title">
                        "Seu projeto cultural"
                        <br class="hero__break"/>
                        <span class="hero__accent">"em um novo patamar"</span>
                    </h1>
                    <p class="hero__lead">
                        "Transforme suas ideias em projetos culturais profissionais com o poder da inteligência artificial"
                    </p>
                    <div class="hero__cta">
                        <Button size=ButtonSize::Lg disabled=disabled on_click=on_login>
                            {SIGN_IN_LABEL}
                        </Button>
                        <CtaError page=page/>
                    </div>
                </section>

                <section class="pricing">
                    <div class="pricing__intro">
                        <h2 class="pricing__title">"Planos Tarsila"</h2>
                        <p class="pricing__lead">
                            "Escolha o plano ideal para transformar suas ideias em projetos culturais"
                        </p>
                    </div>
                    <div class="pricing__grid">{cards}</div>
                </section>

                <section class="cta">
                    <h2 class="cta__title">"Vamos transformar suas ideias em projetos?"</h2>
                    <p class="cta__lead">
                        "Amplie, diversifique e fortaleça sua comunidade com a Tarsila. "
                        "Comece a criar projetos culturais de forma colaborativa hoje mesmo."
                    </p>
                    <div class="cta__action">
                        <Button size=ButtonSize::Lg disabled=disabled on_click=on_login>
                            {SIGN_IN_LABEL}
                        </Button>
                        <CtaError page=page/>
                    </div>
                </section>
            </main>

            <footer class="landing-footer">
                <p class="landing-footer__copy">
                    "© "
                    <Timestamp/>
                    " Tarsila. Democratizando o acesso à elaboração de projetos culturais."
                </p>
            </footer>
        </div>
    }
}

#[component]
fn CtaError(page: RwSignal<PageState>) -> impl IntoView {
    view! {
        <Show when=move || page.with(|state| cta_error_text(state).is_some())>
            <p class="cta-error" role="alert">
                {move || page.with(cta_error_text).unwrap_or_default()}
            </p>
        </Show>
    }
}
