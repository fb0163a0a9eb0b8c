//! Commercial plans shown on the landing page.
//!
//! Plans are `'static` data: they never change during a session and every
//! "Começar Agora" button funnels into the same sign-in action, so there is no
//! selection state to carry.

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

/// One commercial offering rendered by `PricingCard`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    /// Display string for the upfront price.
    pub price: &'static str,
    /// Display string for the installment option, without the leading "ou".
    pub installments: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub note: &'static str,
    pub highlighted: bool,
    pub badge: Option<&'static str>,
}

pub const DREAM_TO_PROJECT: Plan = Plan {
    title: "Do Sonho ao Projeto",
    subtitle: Some("Porta de entrada"),
    price: "R$ 449",
    installments: "12x de R$ 39,92",
    description: "1 projeto cultural completo",
    features: &[
        "Nome do Projeto",
        "Proponente",
        "Segmento Cultural",
        "Resumo do Projeto",
        "Justificativa",
        "Objetivos (geral e específicos)",
        "Contrapartidas Sociais",
        "Acessibilidade",
        "Estrutura de Execução",
        "Cronograma de Realização",
        "Orçamento Detalhado",
        "5 interações adicionais",
        "1 portfólio individual",
        "1 guia de orientação",
    ],
    note: "Valor à vista pode ser dividido entre até 5 usuários (R$ 89,80/cada)",
    highlighted: false,
    badge: None,
};

pub const PORTFOLIO: Plan = Plan {
    title: "Portfólio",
    subtitle: Some("Mais projetos, mais colaboração"),
    price: "R$ 1.212,30",
    installments: "12x de R$ 113,75",
    description: "3 projetos culturais completos",
    features: &[
        "Tudo do plano anterior",
        "3 projetos completos",
        "10 interações adicionais por projeto",
        "1 painel de projetos",
        "1 portfólio individual",
        "1 guia de orientação para todos os projetos",
    ],
    note: "Valor à vista pode ser dividido entre até 5 usuários (R$ 242,46/cada)",
    highlighted: true,
    badge: Some("Popular"),
};

pub const TROUPE: Plan = Plan {
    title: "Trupe",
    subtitle: Some("Para grupos e coletivos"),
    price: "R$ 1.745",
    installments: "12x de R$ 162,00",
    description: "5 projetos culturais completos",
    features: &[
        "Tudo do plano anterior",
        "5 projetos completos",
        "20 interações adicionais por projeto",
        "1 painel de projetos",
        "5 portfólios individuais",
        "1 guia de orientação",
        "Suporte humanizado por projeto",
    ],
    note: "Valor à vista pode ser dividido entre até 5 usuários (R$ 349/cada)",
    highlighted: false,
    badge: None,
};

/// Plans in display order.
pub static PLANS: [Plan; 3] = [DREAM_TO_PROJECT, PORTFOLIO, TROUPE];

/// The single recommended plan, if any.
pub fn highlighted_plan() -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.highlighted)
}
