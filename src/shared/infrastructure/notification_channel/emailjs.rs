// EmailJS REST adapter for the NotificationChannel port.
//
// Sends through `POST {endpoint}/api/v1.0/email/send`. The EmailJS template receives the
// rendered subject and body plus the raw parameters of the message.

use crate::shared::infrastructure::notification_channel::{
    ChannelError, NotificationChannel, OutboundMessage,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailJsSettings {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub endpoint: String,
}

#[derive(Serialize)]
struct EmailJsSendBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: BTreeMap<String, String>,
}

pub struct EmailJsChannel {
    settings: EmailJsSettings,
    client: Client,
}

impl EmailJsChannel {
    pub fn new(settings: EmailJsSettings) -> Self {
        Self {
            settings,
            client: Client::new(),
        }
    }

    fn send_url(&self) -> String {
        let endpoint = if self.settings.endpoint.trim().is_empty() {
            DEFAULT_ENDPOINT
        } else {
            self.settings.endpoint.trim_end_matches('/')
        };
        format!("{endpoint}/api/v1.0/email/send")
    }

    fn template_params(message: OutboundMessage) -> BTreeMap<String, String> {
        let mut params = message.params;
        params.insert("to_email".into(), message.to_email);
        params.insert("to_name".into(), message.to_name);
        params.insert("subject".into(), message.subject);
        params.insert("message_html".into(), message.body);
        params.insert(
            "fixed_recipients".into(),
            message.secondary_recipients.join(", "),
        );
        params
    }
}

#[async_trait]
impl NotificationChannel for EmailJsChannel {
    fn is_configured(&self) -> bool {
        [
            &self.settings.service_id,
            &self.settings.template_id,
            &self.settings.public_key,
        ]
        .iter()
        .all(|v| !v.trim().is_empty())
    }

    async fn send(&self, message: OutboundMessage) -> Result<(), ChannelError> {
        if !self.is_configured() {
            return Err(ChannelError::NotConfigured);
        }
        let body = EmailJsSendBody {
            service_id: &self.settings.service_id,
            template_id: &self.settings.template_id,
            user_id: &self.settings.public_key,
            access_token: self.settings.private_key.as_deref(),
            template_params: Self::template_params(message),
        };

        let response = self
            .client
            .post(self.send_url())
            .json(&body)
            .send()
            .await
            .map_err(|err| ChannelError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let text = response.text().await.unwrap_or_default();
        Err(ChannelError::Rejected {
            status: status.as_u16(),
            body: text,
        })
    }
}
