//! Pricing card for one commercial plan.
//!
//! DESIGN
//! ======
//! The card is a pure function of its [`Plan`]. It never decides whether
//! sign-in is possible: the action button forwards to the parent's `on_login`
//! and mirrors the parent's `disabled` signal, so every card behaves exactly
//! like the hero and bottom CTAs.

#[cfg(test)]
#[path = "pricing_card_test.rs"]
mod pricing_card_test;

use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::state::plans::Plan;

pub const START_NOW_LABEL: &str = "Começar Agora";

pub fn card_class(plan: &Plan) -> &'static str {
    if plan.highlighted { "pricing-card pricing-card--highlighted" } else { "pricing-card" }
}

/// Highlighted plans get the solid button; the others the outline one.
pub fn card_button_variant(plan: &Plan) -> ButtonVariant {
    if plan.highlighted { ButtonVariant::Primary } else { ButtonVariant::Outline }
}

pub fn installments_line(plan: &Plan) -> String {
    format!("ou {}", plan.installments)
}

#[component]
pub fn PricingCard(
    plan: &'static Plan,
    on_login: Callback<()>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let features = plan
        .features
        .iter()
        .map(|feature| {
            view! {
                <li class="pricing-card__feature">
                    <span class="pricing-card__check" aria-hidden="true">"✓"</span>
                    <span class="pricing-card__feature-text">{*feature}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=card_class(plan)>
            {plan.badge.map(|badge| view! { <div class="pricing-card__badge">{badge}</div> })}

            <div class="pricing-card__header">
                <h3 class="pricing-card__title">{plan.title}</h3>
                {plan.subtitle.map(|subtitle| view! { <p class="pricing-card__subtitle">{subtitle}</p> })}
            </div>

            <div class="pricing-card__price-block">
                <div class="pricing-card__price">{plan.price}</div>
                <div class="pricing-card__upfront">"à vista"</div>
                <div class="pricing-card__installments">{installments_line(plan)}</div>
            </div>

            <p class="pricing-card__description">{plan.description}</p>

            <ul class="pricing-card__features">{features}</ul>

            <div class="pricing-card__note">
                <p>{plan.note}</p>
            </div>

            <Button
                variant=card_button_variant(plan)
                size=ButtonSize::Lg
                full_width=true
                disabled=disabled
                on_click=on_login
            >
                {START_NOW_LABEL}
            </Button>
        </div>
    }
}
