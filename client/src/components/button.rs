//! Shared call-to-action button.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Md,
    Lg,
}

/// BEM class list for a button variant/size combination.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, full_width: bool) -> String {
    let mut class = String::from("btn");
    class.push_str(match variant {
        ButtonVariant::Primary => " btn--primary",
        ButtonVariant::Outline => " btn--outline",
    });
    if size == ButtonSize::Lg {
        class.push_str(" btn--lg");
    }
    if full_width {
        class.push_str(" btn--block");
    }
    class
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
    #[prop(into)] disabled: Signal<bool>,
    on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_class(variant, size, full_width)
            disabled=move || disabled.get()
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}
