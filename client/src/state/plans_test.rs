use super::*;

#[test]
fn three_plans_in_display_order() {
    let titles: Vec<_> = PLANS.iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["Do Sonho ao Projeto", "Portfólio", "Trupe"]);
}

#[test]
fn exactly_one_plan_is_highlighted() {
    assert_eq!(PLANS.iter().filter(|p| p.highlighted).count(), 1);
    assert_eq!(PLANS.iter().filter(|p| p.badge.is_some()).count(), 1);
}

#[test]
fn highlighted_plan_is_the_middle_portfolio_plan() {
    let plan = highlighted_plan().unwrap();
    assert_eq!(plan.title, "Portfólio");
    assert_eq!(plan.price, "R$ 1.212,30");
    assert_eq!(plan.badge, Some("Popular"));
    assert_eq!(PLANS[1], *plan);
}

#[test]
fn feature_lists_keep_their_order_and_length() {
    assert_eq!(DREAM_TO_PROJECT.features.len(), 14);
    assert_eq!(DREAM_TO_PROJECT.features[0], "Nome do Projeto");
    assert_eq!(DREAM_TO_PROJECT.features[13], "1 guia de orientação");
    assert_eq!(PORTFOLIO.features.len(), 6);
    assert_eq!(TROUPE.features.len(), 7);
    assert_eq!(TROUPE.features[6], "Suporte humanizado por projeto");
}

#[test]
fn every_plan_has_subtitle_and_installments() {
    for plan in &PLANS {
        assert!(plan.subtitle.is_some(), "{} lacks a subtitle", plan.title);
        assert!(plan.installments.starts_with("12x de R$ "));
        assert!(plan.note.starts_with("Valor à vista pode ser dividido"));
    }
}
