use crate::modules::reviews::core::email_config::EmailTemplateConfig;
use crate::modules::reviews::errors::{ApplicationError, require_admin};
use crate::shared::core::primitives::SessionContext;
use crate::shared::infrastructure::preference_store::PreferenceStore;
use std::sync::Arc;

pub const EMAIL_CONFIG_KEY: &str = "email_config";
pub const BACKGROUND_IMAGE_KEY: &str = "background_image";

fn unavailable(err: anyhow::Error) -> ApplicationError {
    ApplicationError::StoreUnavailable(format!("{err:#}"))
}

pub struct Preferences<TPrefs>
where
    TPrefs: PreferenceStore + Send + Sync + 'static,
{
    store: Arc<TPrefs>,
}

impl<TPrefs> Preferences<TPrefs>
where
    TPrefs: PreferenceStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TPrefs>) -> Self {
        Self { store }
    }

    /// Stored configuration merged over the defaults. Unreadable JSON falls back to defaults.
    pub async fn email_config(&self) -> Result<EmailTemplateConfig, ApplicationError> {
        let Some(raw) = self.store.get(EMAIL_CONFIG_KEY).await.map_err(unavailable)? else {
            return Ok(EmailTemplateConfig::default());
        };
        match serde_json::from_str(&raw) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!(error = %err, "stored email config is not valid JSON, using defaults");
                Ok(EmailTemplateConfig::default())
            }
        }
    }

    pub async fn save_email_config(
        &self,
        session: &SessionContext,
        config: EmailTemplateConfig,
    ) -> Result<EmailTemplateConfig, ApplicationError> {
        require_admin(session)?;
        let raw = serde_json::to_string(&config)
            .map_err(|err| ApplicationError::StoreUnavailable(err.to_string()))?;
        self.store
            .set(EMAIL_CONFIG_KEY, &raw)
            .await
            .map_err(unavailable)?;
        tracing::info!("email config saved");
        Ok(config)
    }

    pub async fn background_image(&self) -> Result<Option<String>, ApplicationError> {
        let value = self
            .store
            .get(BACKGROUND_IMAGE_KEY)
            .await
            .map_err(unavailable)?;
        Ok(value.filter(|url| !url.trim().is_empty()))
    }

    /// An empty url clears the background.
    pub async fn set_background_image(
        &self,
        session: &SessionContext,
        url: &str,
    ) -> Result<(), ApplicationError> {
        require_admin(session)?;
        self.store
            .set(BACKGROUND_IMAGE_KEY, url.trim())
            .await
            .map_err(unavailable)?;
        tracing::info!("background image updated");
        Ok(())
    }
}

#[cfg(test)]
mod preferences_tests {
    use super::*;
    use crate::modules::reviews::core::email_config::DEFAULT_SUBJECT_TEMPLATE;
    use crate::shared::infrastructure::preference_store::in_memory::InMemoryPreferenceStore;
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (Arc<InMemoryPreferenceStore>, Preferences<InMemoryPreferenceStore>);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let store = Arc::new(InMemoryPreferenceStore::new());
        (store.clone(), Preferences::new(store))
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_defaults_when_nothing_is_stored(before_each: BeforeEachReturn) {
        let (_, prefs) = before_each;
        assert_eq!(prefs.email_config().await.unwrap(), EmailTemplateConfig::default());
        assert_eq!(prefs.background_image().await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_merge_partial_stored_config_over_defaults(before_each: BeforeEachReturn) {
        let (store, prefs) = before_each;
        store
            .set(EMAIL_CONFIG_KEY, r#"{"fixed_recipients":["redazione@example.com"]}"#)
            .await
            .unwrap();
        let config = prefs.email_config().await.unwrap();
        assert_eq!(config.fixed_recipients, vec!["redazione@example.com"]);
        assert_eq!(config.subject_template, DEFAULT_SUBJECT_TEMPLATE);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fall_back_to_defaults_on_corrupt_config(before_each: BeforeEachReturn) {
        let (store, prefs) = before_each;
        store.set(EMAIL_CONFIG_KEY, "{not json").await.unwrap();
        assert_eq!(prefs.email_config().await.unwrap(), EmailTemplateConfig::default());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_save_config_and_background_as_admin(before_each: BeforeEachReturn) {
        let (_, prefs) = before_each;
        let admin = SessionContext::admin(2026);
        let config = EmailTemplateConfig {
            subject_template: "Promemoria {{Titolo}}".into(),
            ..EmailTemplateConfig::default()
        };
        prefs.save_email_config(&admin, config.clone()).await.unwrap();
        assert_eq!(prefs.email_config().await.unwrap(), config);

        prefs
            .set_background_image(&admin, " https://img.example.com/bg.jpg ")
            .await
            .unwrap();
        assert_eq!(
            prefs.background_image().await.unwrap().as_deref(),
            Some("https://img.example.com/bg.jpg")
        );
        prefs.set_background_image(&admin, "").await.unwrap();
        assert_eq!(prefs.background_image().await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_reviewer_writes(before_each: BeforeEachReturn) {
        let (_, prefs) = before_each;
        let reviewer = SessionContext::reviewer(2026);
        assert_eq!(
            prefs
                .save_email_config(&reviewer, EmailTemplateConfig::default())
                .await,
            Err(ApplicationError::Forbidden)
        );
        assert_eq!(
            prefs.set_background_image(&reviewer, "x").await,
            Err(ApplicationError::Forbidden)
        );
    }
}
