//! Common test utilities for integration tests.

use signal_client::{Attachment, BotMessage, SignalClient};
use spell_api_client::SpellApiClient;
use spell_bot::Dispatcher;
use std::sync::Arc;
use std::time::Duration;
use wiremock::MockServer;

pub const BOT_NUMBER: &str = "+987654321";
pub const USER_NUMBER: &str = "+123456789";

/// Wire a dispatcher to mock Spell API and Signal servers.
pub fn test_dispatcher(spell_api: &MockServer, signal: &MockServer) -> (Dispatcher, Arc<SignalClient>) {
    let api = SpellApiClient::new(
        spell_api.uri(),
        Duration::from_secs(5),
        Duration::from_secs(20),
    )
    .unwrap();
    let signal = Arc::new(SignalClient::new(signal.uri(), BOT_NUMBER).unwrap());

    (Dispatcher::new("?", Arc::new(api), signal.clone()), signal)
}

/// A direct message from the test user.
pub fn user_message(text: &str, attachments: Vec<Attachment>) -> BotMessage {
    BotMessage {
        source: USER_NUMBER.to_string(),
        text: text.to_string(),
        timestamp: 123456789,
        is_group: false,
        group_id: None,
        attachments,
        receiving_account: BOT_NUMBER.to_string(),
    }
}
