//! Outbound side of the bot.

use crate::presentation::Reply;
use async_trait::async_trait;
use signal_client::{SignalClient, SignalError};

/// Something that can deliver replies to a chat.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send_reply(&self, target: &str, reply: &Reply) -> Result<(), SignalError>;
}

#[async_trait]
impl ReplySink for SignalClient {
    async fn send_reply(&self, target: &str, reply: &Reply) -> Result<(), SignalError> {
        match reply {
            Reply::Text(text) => self.send(target, text).await,
            Reply::Card(card) => self.send_styled(target, &card.to_styled_text()).await,
            Reply::Table(table) => self.send_styled(target, table).await,
        }
    }
}
