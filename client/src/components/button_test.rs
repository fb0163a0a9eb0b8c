use super::*;

#[test]
fn default_button_is_primary_medium() {
    assert_eq!(
        button_class(ButtonVariant::default(), ButtonSize::default(), false),
        "btn btn--primary"
    );
}

#[test]
fn large_outline_block_button() {
    assert_eq!(
        button_class(ButtonVariant::Outline, ButtonSize::Lg, true),
        "btn btn--outline btn--lg btn--block"
    );
}

#[test]
fn large_primary_button() {
    assert_eq!(button_class(ButtonVariant::Primary, ButtonSize::Lg, false), "btn btn--primary btn--lg");
}
