// Process configuration read from the environment (a `.env` file is loaded first by main).

use crate::modules::reviews::adapters::inbound::session::SessionSettings;
use crate::modules::reviews::core::ledger::DEFAULT_CAPACITY;
use crate::shared::infrastructure::notification_channel::emailjs::{DEFAULT_ENDPOINT, EmailJsSettings};
use anyhow::{Context as _, bail};
use std::net::SocketAddr;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin2026";
pub const DEFAULT_YEAR: i32 = 2026;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub session: SessionSettings,
    pub capacity: usize,
    pub emailjs: EmailJsSettings,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let addr = value("REVIEWS_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("parse REVIEWS_ADDR")?;
        let default_year = match value("REVIEWS_DEFAULT_YEAR") {
            Some(raw) => raw.parse::<i32>().context("parse REVIEWS_DEFAULT_YEAR")?,
            None => DEFAULT_YEAR,
        };
        let capacity = match value("REVIEWS_CAPACITY") {
            Some(raw) => raw.parse::<usize>().context("parse REVIEWS_CAPACITY")?,
            None => DEFAULT_CAPACITY,
        };
        if capacity == 0 {
            bail!("REVIEWS_CAPACITY must be at least 1");
        }

        Ok(Self {
            addr,
            session: SessionSettings {
                admin_password: value("REVIEWS_ADMIN_PASSWORD")
                    .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()),
                default_year,
            },
            capacity,
            emailjs: EmailJsSettings {
                service_id: value("EMAILJS_SERVICE_ID").unwrap_or_default(),
                template_id: value("EMAILJS_TEMPLATE_ID").unwrap_or_default(),
                public_key: value("EMAILJS_PUBLIC_KEY").unwrap_or_default(),
                private_key: value("EMAILJS_PRIVATE_KEY"),
                endpoint: value("EMAILJS_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            },
        })
    }
}
