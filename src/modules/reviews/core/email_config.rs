// Email template configuration shared by every year.
//
// Stored configurations missing fields fall back to the defaults field by field.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SUBJECT_TEMPLATE: &str = "Recensione del mese di {{Mese}} – {{Titolo}}";

pub const DEFAULT_BODY_TEMPLATE: &str = "Ciao {{Nome}},\n\n\
ti confermiamo la recensione del libro \"{{Titolo}}\" per il mese di {{Mese}}.\n\n\
Ecco le principali scadenze:\n\
- Invio info redazione: {{DataInvioInfo}}\n\
- Invio recensione: {{DataInvioRecensione}}\n\
- Invio commenti: {{DataInvioCommenti}}\n\
- Pubblicazione: {{DataPubblicazione}}\n\n\
Grazie per la collaborazione!\nLa redazione";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailTemplateConfig {
    pub subject_template: String,
    pub body_template: String,
    pub fixed_recipients: Vec<String>,
    pub review_template_url: String,
    pub privacy_template_url: String,
}

impl Default for EmailTemplateConfig {
    fn default() -> Self {
        Self {
            subject_template: DEFAULT_SUBJECT_TEMPLATE.to_string(),
            body_template: DEFAULT_BODY_TEMPLATE.to_string(),
            fixed_recipients: Vec::new(),
            review_template_url: String::new(),
            privacy_template_url: String::new(),
        }
    }
}

impl EmailTemplateConfig {
    /// Fixed recipients without blanks, trimmed.
    pub fn recipients(&self) -> Vec<String> {
        self.fixed_recipients
            .iter()
            .flat_map(|r| r.split(','))
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod email_config_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_merge_stored_fields_over_defaults() {
        let stored = r#"{"review_template_url":"https://example.com/template.pdf"}"#;
        let config: EmailTemplateConfig = serde_json::from_str(stored).unwrap();
        assert_eq!(config.review_template_url, "https://example.com/template.pdf");
        assert_eq!(config.subject_template, DEFAULT_SUBJECT_TEMPLATE);
        assert!(config.body_template.contains("{{DataPubblicazione}}"));
    }

    #[rstest]
    fn it_should_normalize_recipient_lists() {
        let config = EmailTemplateConfig {
            fixed_recipients: vec![
                "redazione@example.com, coordinatore@example.com".into(),
                "  ".into(),
                "archivio@example.com".into(),
            ],
            ..EmailTemplateConfig::default()
        };
        assert_eq!(
            config.recipients(),
            vec![
                "redazione@example.com",
                "coordinatore@example.com",
                "archivio@example.com"
            ]
        );
    }
}
