// Templated reviewer notification.
//
// One call renders subject and body for one record and hands exactly one message to the
// channel. A failed send is reported, never retried, and never touches the assignment.

use crate::modules::reviews::adapters::outbound::book_store::BookStore;
use crate::modules::reviews::core::book::{BookRecord, BookView};
use crate::modules::reviews::core::email_config::EmailTemplateConfig;
use crate::modules::reviews::core::template::render;
use crate::modules::reviews::errors::{ApplicationError, require_admin};
use crate::modules::reviews::use_cases::preferences::handler::Preferences;
use crate::shared::core::primitives::SessionContext;
use crate::shared::infrastructure::notification_channel::{NotificationChannel, OutboundMessage};
use crate::shared::infrastructure::preference_store::PreferenceStore;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Every placeholder value for `record`. Unassigned records yield empty reviewer and date fields.
pub fn placeholder_fields(
    record: &BookRecord,
    config: &EmailTemplateConfig,
) -> HashMap<String, String> {
    let view = BookView::from(record.clone());
    [
        ("Nome", view.reviewer_given_name),
        ("Cognome", view.reviewer_family_name),
        ("NomeCompleto", view.reviewer_full_name),
        ("Titolo", view.title),
        ("Autore", view.author),
        ("Mese", view.assigned_month),
        ("DataPubblicazione", view.publication_date),
        ("DataInvioInfo", view.info_dispatch_date),
        ("DataInvioRecensione", view.review_submission_date),
        ("DataInvioCommenti", view.comments_submission_date),
        (
            "DataInvioRecensioneConCommenti",
            view.revised_review_submission_date,
        ),
        ("DataPreparazionePubblicazione", view.pre_publication_prep_date),
        ("LinkAcquisto", view.purchase_link),
        ("UrlTemplateRecensione", config.review_template_url.clone()),
        ("UrlInformativaPrivacy", config.privacy_template_url.clone()),
        ("Anno", view.year.to_string()),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect()
}

pub struct NotifyReviewerHandler<TStore, TChannel, TPrefs>
where
    TStore: BookStore + Send + Sync + 'static,
    TChannel: NotificationChannel + Send + Sync + ?Sized + 'static,
    TPrefs: PreferenceStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    channel: Arc<TChannel>,
    preferences: Arc<Preferences<TPrefs>>,
}

impl<TStore, TChannel, TPrefs> NotifyReviewerHandler<TStore, TChannel, TPrefs>
where
    TStore: BookStore + Send + Sync + 'static,
    TChannel: NotificationChannel + Send + Sync + ?Sized + 'static,
    TPrefs: PreferenceStore + Send + Sync + 'static,
{
    pub fn new(
        store: Arc<TStore>,
        channel: Arc<TChannel>,
        preferences: Arc<Preferences<TPrefs>>,
    ) -> Self {
        Self {
            store,
            channel,
            preferences,
        }
    }

    pub async fn notify(
        &self,
        record: &BookRecord,
        config: &EmailTemplateConfig,
        override_recipient: Option<&str>,
    ) -> Result<(), ApplicationError> {
        if !self.channel.is_configured() {
            return Err(ApplicationError::MisconfiguredChannel);
        }

        let assignment = record.assignment.as_ref();
        let recipient = override_recipient
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .or_else(|| assignment.map(|a| a.email.trim().to_string()))
            .unwrap_or_default();
        if recipient.is_empty() {
            return Err(ApplicationError::RecipientMissing);
        }

        let fields = placeholder_fields(record, config);
        let to_name = assignment
            .map(|a| {
                if a.given_name.is_empty() {
                    a.full_name.clone()
                } else {
                    a.given_name.clone()
                }
            })
            .unwrap_or_default();
        let mut params: BTreeMap<String, String> = fields
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        params.extend([
            (
                "review_template_url".to_string(),
                config.review_template_url.clone(),
            ),
            (
                "privacy_template_url".to_string(),
                config.privacy_template_url.clone(),
            ),
            (
                "cover_image".to_string(),
                record.details.cover_image_ref.clone(),
            ),
        ]);
        let message = OutboundMessage {
            to_email: recipient,
            to_name,
            subject: render(&config.subject_template, &fields),
            body: render(&config.body_template, &fields),
            secondary_recipients: config.recipients(),
            params,
        };

        match self.channel.send(message).await {
            Ok(()) => {
                tracing::info!(book_id = %record.id, "reviewer notified");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(book_id = %record.id, error = %err, "notification failed");
                Err(err.into())
            }
        }
    }

    pub async fn notify_book(
        &self,
        session: &SessionContext,
        book_id: &str,
        override_recipient: Option<&str>,
    ) -> Result<(), ApplicationError> {
        require_admin(session)?;
        let record = self.store.get(session.year, book_id).await?;
        let config = self.preferences.email_config().await?;
        self.notify(&record, &config, override_recipient).await
    }
}
