//! Spell command - looks up spells, or adds one with `spell add`.

use crate::commands::{Command, CommandHandler};
use crate::error::AppResult;
use crate::presentation::{render, Reply, NOT_FOUND};
use async_trait::async_trait;
use signal_client::{BotMessage, SignalClient};
use spell_api_client::SpellApiClient;
use std::sync::Arc;
use tracing::{error, info, instrument};

const ADD_KEYWORD: &str = "add";

pub struct SpellHandler {
    spell_api: Arc<SpellApiClient>,
    signal: Arc<SignalClient>,
}

impl SpellHandler {
    pub fn new(spell_api: Arc<SpellApiClient>, signal: Arc<SignalClient>) -> Self {
        Self { spell_api, signal }
    }

    #[instrument(skip(self))]
    async fn lookup(&self, query: &str) -> Vec<Reply> {
        match self.spell_api.lookup(query).await {
            Ok(spells) => {
                info!(count = spells.len(), "Spell lookup succeeded");
                render(&spells)
            }
            Err(e) => {
                error!(error = %e, "Spell lookup failed");
                vec![Reply::text(NOT_FOUND)]
            }
        }
    }

    #[instrument(skip(self, inline, message), fields(attachments = message.attachments.len()))]
    async fn add(&self, inline: &str, message: &BotMessage) -> AppResult<Vec<Reply>> {
        let payload = match message.attachments.first() {
            Some(attachment) => self.signal.download_attachment(attachment).await?,
            None => inline.as_bytes().to_vec(),
        };

        let response = self.spell_api.create(&payload).await?;
        info!("Spell created");
        Ok(vec![Reply::Text(response)])
    }
}

/// The creation payload if the argument starts with the word `add`.
fn add_payload(argument: &str) -> Option<&str> {
    let rest = argument.strip_prefix(ADD_KEYWORD)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

#[async_trait]
impl CommandHandler for SpellHandler {
    fn name(&self) -> &str {
        "spell"
    }

    async fn execute(&self, command: &Command<'_>) -> AppResult<Vec<Reply>> {
        match add_payload(command.argument) {
            Some(inline) => self.add(inline, command.message).await,
            None => Ok(self.lookup(command.argument).await),
        }
    }
}
