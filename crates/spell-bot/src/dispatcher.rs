//! Routing of chat messages to command handlers.

use crate::commands::{Command, CommandHandler, HelpHandler, MetadataHandler, SpellHandler};
use crate::presentation::Reply;
use crate::reply::ReplySink;
use signal_client::{BotMessage, SignalClient};
use spell_api_client::SpellApiClient;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Routes prefixed messages to the fixed set of command handlers.
pub struct Dispatcher {
    prefix: String,
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl Dispatcher {
    pub fn new(
        prefix: impl Into<String>,
        spell_api: Arc<SpellApiClient>,
        signal: Arc<SignalClient>,
    ) -> Self {
        let prefix = prefix.into();
        let handlers: Vec<Box<dyn CommandHandler>> = vec![
            Box::new(HelpHandler::new(&prefix)),
            Box::new(SpellHandler::new(spell_api.clone(), signal)),
            Box::new(MetadataHandler::new(spell_api)),
        ];

        Self { prefix, handlers }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Split a message into a command, or `None` if the bot should stay quiet.
    pub fn tokenize<'a>(&self, message: &'a BotMessage) -> Option<(String, &'a str)> {
        if message.is_from_self() {
            return None;
        }
        split_command(&message.text, &self.prefix)
    }

    /// Run the matching handler and collect its replies.
    ///
    /// Handler errors become a reply carrying the error text.
    #[instrument(skip(self, message), fields(source = %message.source))]
    pub async fn dispatch(&self, message: &BotMessage) -> Vec<Reply> {
        let Some((name, argument)) = self.tokenize(message) else {
            return Vec::new();
        };

        let Some(handler) = self.handlers.iter().find(|h| h.name() == name) else {
            debug!(command = %name, "Ignoring unknown command");
            return Vec::new();
        };

        info!(command = %name, argument = %argument, "Handling command");
        let command = Command {
            name: &name,
            argument,
            message,
        };

        match handler.execute(&command).await {
            Ok(replies) => replies,
            Err(e) => {
                error!(command = %name, error = %e, "Handler error");
                vec![Reply::Text(e.to_string())]
            }
        }
    }

    /// Dispatch a message and send every reply back to where it came from.
    pub async fn handle(&self, message: &BotMessage, sink: &dyn ReplySink) {
        for reply in self.dispatch(message).await {
            if let Err(e) = sink.send_reply(message.reply_target(), &reply).await {
                error!(error = %e, "Failed to send reply");
            }
        }
    }
}

/// Strip `prefix` and split the first whitespace-delimited word off as a
/// lower-cased command name.
pub fn split_command<'a>(text: &'a str, prefix: &str) -> Option<(String, &'a str)> {
    let body = text.strip_prefix(prefix)?;

    let (name, rest) = match body.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim_start()),
        None => (body, ""),
    };

    Some((name.trim().to_lowercase(), rest))
}
