// Notification channel port.
//
// One `send` is one outbound message with its own outcome. Callers never retry.

pub mod emailjs;
pub mod in_memory;

use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    pub to_email: String,
    pub to_name: String,
    pub subject: String,
    pub body: String,
    pub secondary_recipients: Vec<String>,
    /// Extra template parameters forwarded to the channel as-is.
    pub params: BTreeMap<String, String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChannelError {
    #[error("channel is not configured")]
    NotConfigured,

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("channel rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait NotificationChannel: Send + Sync {
    fn is_configured(&self) -> bool;

    async fn send(&self, message: OutboundMessage) -> Result<(), ChannelError>;
}
