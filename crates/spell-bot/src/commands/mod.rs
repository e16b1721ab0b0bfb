//! Bot command handlers.

mod help;
mod metadata;
mod spell;

pub use help::HelpHandler;
pub use metadata::MetadataHandler;
pub use spell::SpellHandler;

use crate::error::AppResult;
use crate::presentation::Reply;
use async_trait::async_trait;
use signal_client::BotMessage;

/// A tokenized command: `?spell fireball level=3` has name `spell` and
/// argument `fireball level=3`.
#[derive(Debug, Clone, Copy)]
pub struct Command<'a> {
    /// Lower-cased command word.
    pub name: &'a str,
    /// Everything after the command word.
    pub argument: &'a str,
    /// The message the command arrived in.
    pub message: &'a BotMessage,
}

/// Command handler trait.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name (e.g., "help", "spell").
    fn name(&self) -> &str;

    /// Execute the command.
    async fn execute(&self, command: &Command<'_>) -> AppResult<Vec<Reply>>;
}
