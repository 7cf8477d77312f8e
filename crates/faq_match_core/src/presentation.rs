use serde::{Deserialize, Serialize};

/// A welcome button and the fixed text shown when it is pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    #[serde(alias = "chave")]
    pub key: String,
    #[serde(alias = "rotulo")]
    pub label: String,
    #[serde(alias = "resposta")]
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    #[serde(alias = "introducao")]
    pub introduction: String,
    #[serde(default, alias = "opcoes")]
    pub options: Vec<QuickReply>,
}

impl Presentation {
    pub fn builtin() -> Self {
        let options = [
            (
                "local",
                "📍 Onde fica?",
                "Estamos localizados na Rua das Cervejas, 123 - Centro, Cervejópolis.",
            ),
            (
                "horario",
                "🕒 Horário",
                "Nosso horário de funcionamento é de Terça a Domingo, das 18h às 23h.",
            ),
            (
                "litros",
                "🍻 Quantos litros?",
                "Oferecemos chopp em growlers de 1 Litro e 2 Litros. Também temos pacotes para eventos maiores!",
            ),
            (
                "cardapio",
                "📋 Cardápio",
                "Para ver nosso cardápio completo, acesse: [Link para o Cardápio]",
            ),
        ]
        .into_iter()
        .map(|(key, label, answer)| QuickReply {
            key: key.to_string(),
            label: label.to_string(),
            answer: answer.to_string(),
        })
        .collect();

        Self {
            introduction: "Olá! Como posso ajudar?".to_string(),
            options,
        }
    }

    pub fn introduction(&self) -> &str {
        &self.introduction
    }

    pub fn options(&self) -> &[QuickReply] {
        &self.options
    }

    /// Fixed answer for a quick-reply key; keys compare exactly.
    pub fn answer_for(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|opt| opt.key == key)
            .map(|opt| opt.answer.as_str())
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_the_four_welcome_buttons() {
        let p = Presentation::builtin();
        let keys: Vec<&str> = p.options().iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["local", "horario", "litros", "cardapio"]);
        assert!(p.introduction().starts_with("Olá"));
    }

    #[test]
    fn answer_for_known_and_unknown_keys() {
        let p = Presentation::builtin();
        assert!(p.answer_for("horario").expect("horario").contains("18h"));
        assert_eq!(p.answer_for("delivery"), None);
    }

    #[test]
    fn parses_portuguese_field_names() {
        let raw = r#"{
            "introducao": "Bem-vindo!",
            "opcoes": [{"chave": "local", "rotulo": "Onde?", "resposta": "Centro"}]
        }"#;
        let p: Presentation = serde_json::from_str(raw).expect("parse");
        assert_eq!(p.introduction(), "Bem-vindo!");
        assert_eq!(p.answer_for("local"), Some("Centro"));
    }
}
