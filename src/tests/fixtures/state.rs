// AppState wiring for inbound adapter tests.

use crate::modules::reviews::adapters::inbound::session::SessionSettings;
use crate::modules::reviews::use_cases::manage_books::command::BookChanges;
use crate::shared::core::primitives::SessionContext;
use crate::shared::infrastructure::notification_channel::in_memory::InMemoryNotificationChannel;
use crate::shell::state::AppState;
use std::sync::Arc;

pub const TEST_YEAR: i32 = 2026;
pub const TEST_PASSWORD: &str = "admin2026";

pub fn test_settings() -> SessionSettings {
    SessionSettings {
        admin_password: TEST_PASSWORD.to_string(),
        default_year: TEST_YEAR,
    }
}

pub fn make_test_state() -> AppState {
    make_test_state_with_channel(Arc::new(InMemoryNotificationChannel::new()))
}

pub fn make_test_state_with_channel(channel: Arc<InMemoryNotificationChannel>) -> AppState {
    AppState::in_memory(test_settings(), 12, channel)
}

/// Creates one titled book per entry through the admin ledger and returns the ids.
pub async fn seed_titles(state: &AppState, titles: &[&str]) -> Vec<String> {
    let admin = SessionContext::admin(TEST_YEAR);
    let mut ids = Vec::new();
    for title in titles {
        let record = state.ledger.create(&admin).await.expect("create failed");
        let changes = BookChanges {
            title: Some(title.to_string()),
            ..BookChanges::default()
        };
        state
            .ledger
            .update(&admin, &record.id, changes)
            .await
            .expect("update failed");
        ids.push(record.id);
    }
    ids
}
