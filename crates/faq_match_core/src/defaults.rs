//! Built-in Portuguese dataset for the chopp-shop assistant.

use crate::model::{DefaultSuggestions, IntentEntry};

pub const DEFAULT_STOPWORDS: &str = "de a o que do da em um para é com no na uma os no e as dos \
    das por eu voce ele ela eles elas nos voces";

const WELCOME_SUGGESTIONS: &[&str] = &[
    "Onde fica a loja?",
    "Qual o horário de funcionamento?",
    "Ver Cardápio",
    "Quais os tipos de chopp?",
];

const GREETING_TRIGGERS: &[&str] = &[
    "oi", "ola", "olá", "bom dia", "boa tarde", "boa noite", "tudo bem",
];

const LITER_SUGGESTIONS: &[&str] = &[
    "Quantos litros de chopp vocês têm?",
    "Qual o valor do litro de chopp?",
    "Vocês vendem barril de 50 litros?",
];

const MENU_SUGGESTIONS: &[&str] = &["Ver Cardápio", "Onde posso ver o cardápio completo?"];

/// Intent table in match order; greetings come first.
pub fn builtin_intents() -> Vec<IntentEntry> {
    let mut intents: Vec<IntentEntry> = GREETING_TRIGGERS
        .iter()
        .map(|t| IntentEntry::greeting(*t, WELCOME_SUGGESTIONS.iter().copied()))
        .collect();

    intents.push(IntentEntry::new("saudacao", WELCOME_SUGGESTIONS.iter().copied()));
    intents.push(IntentEntry::new(
        "chopp",
        [
            "Quantos litros de chopp vocês têm?",
            "Quais tipos de chopp vocês oferecem?",
            "Como faço para pedir chopp em casa?",
            "Qual o preço do chopp?",
        ],
    ));
    intents.push(IntentEntry::new("litro", LITER_SUGGESTIONS.iter().copied()));
    intents.push(IntentEntry::new(
        "preco",
        [
            "Qual o preço do chopp?",
            "Valor do litro de chopp?",
            "Existe promoção de chopp?",
        ],
    ));
    intents.push(IntentEntry::new(
        "local",
        ["Qual o endereço da loja?", "Vocês entregam chopp em casa?"],
    ));
    intents.push(IntentEntry::new(
        "horario",
        [
            "Qual o horário de funcionamento da loja?",
            "Atendem de final de semana?",
        ],
    ));
    intents.push(IntentEntry::new("litros", LITER_SUGGESTIONS.iter().copied()));
    intents.push(IntentEntry::new("cardapio", MENU_SUGGESTIONS.iter().copied()));
    intents.push(IntentEntry::new("menu", MENU_SUGGESTIONS.iter().copied()));
    intents
}

pub fn builtin_suggestions() -> DefaultSuggestions {
    DefaultSuggestions {
        no_match: [
            "Onde fica a loja?",
            "Qual o horário de funcionamento?",
            "Ver Cardápio",
            "Quais os tipos de chopp?",
            "Falar com humano",
        ]
        .map(String::from)
        .to_vec(),
        no_related: [
            "Onde fica a loja?",
            "Qual o horário de funcionamento?",
            "Ver Cardápio",
        ]
        .map(String::from)
        .to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greetings_lead_the_table() {
        let intents = builtin_intents();
        assert_eq!(intents.len(), 16);
        assert!(intents[..7].iter().all(|i| i.greeting));
        assert!(intents[7..].iter().all(|i| !i.greeting));
        assert_eq!(intents[7].trigger, "saudacao");
    }

    #[test]
    fn defaults_are_not_empty() {
        let defaults = builtin_suggestions();
        assert_eq!(defaults.no_match.len(), 5);
        assert_eq!(defaults.no_related.len(), 3);
    }
}
