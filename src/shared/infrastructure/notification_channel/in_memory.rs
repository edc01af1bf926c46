use crate::shared::infrastructure::notification_channel::{
    ChannelError, NotificationChannel, OutboundMessage,
};
use tokio::sync::Mutex;

/// Records every message instead of sending it.
pub struct InMemoryNotificationChannel {
    pub sent: Mutex<Vec<OutboundMessage>>,
    is_configured: bool,
    is_offline: bool,
}

impl Default for InMemoryNotificationChannel {
    fn default() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            is_configured: true,
            is_offline: false,
        }
    }
}

impl InMemoryNotificationChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unconfigured() -> Self {
        Self {
            is_configured: false,
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait::async_trait]
impl NotificationChannel for InMemoryNotificationChannel {
    fn is_configured(&self) -> bool {
        self.is_configured
    }

    async fn send(&self, message: OutboundMessage) -> Result<(), ChannelError> {
        if !self.is_configured {
            return Err(ChannelError::NotConfigured);
        }
        if self.is_offline {
            return Err(ChannelError::Transport("Notification channel offline".into()));
        }
        self.sent.lock().await.push(message);
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_notification_channel_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::BTreeMap;

    fn message() -> OutboundMessage {
        OutboundMessage {
            to_email: "mario@example.com".into(),
            to_name: "Mario".into(),
            subject: "Ciao".into(),
            body: "Corpo".into(),
            secondary_recipients: vec![],
            params: BTreeMap::new(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_record_sent_messages() {
        let channel = InMemoryNotificationChannel::new();
        channel.send(message()).await.unwrap();
        assert_eq!(channel.sent_count().await, 1);
        assert_eq!(channel.sent.lock().await[0].to_email, "mario@example.com");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_offline_or_unconfigured() {
        let mut channel = InMemoryNotificationChannel::new();
        channel.toggle_offline();
        assert!(matches!(
            channel.send(message()).await,
            Err(ChannelError::Transport(_))
        ));

        let channel = InMemoryNotificationChannel::unconfigured();
        assert!(!channel.is_configured());
        assert_eq!(channel.send(message()).await, Err(ChannelError::NotConfigured));
        assert_eq!(channel.sent_count().await, 0);
    }
}
