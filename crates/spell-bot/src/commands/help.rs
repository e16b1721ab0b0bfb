//! Help command - displays available commands.

use crate::commands::{Command, CommandHandler};
use crate::error::AppResult;
use crate::presentation::Reply;
use async_trait::async_trait;

pub struct HelpHandler {
    text: String,
}

impl HelpHandler {
    /// Build the usage text for the configured trigger prefix.
    pub fn new(prefix: &str) -> Self {
        let text = format!(
            r#"Commands available:
{p}spell <Spell Name> - Finds the spell specified if possible.
    When there are multiple spells matching you can narrow it down
    using filters like "system=dnd" or "level: 2".
{p}spell add - Adds a new spell, either from the rest of the message or from an attached file.
    The spell can be written as JSON or YAML with name, description, spelldata and metadata.
{p}metadata - Lists the metadata fields spells can be filtered on.
{p}metadata <field> - Lists the known values for a metadata field."#,
            p = prefix
        );

        Self { text }
    }
}

#[async_trait]
impl CommandHandler for HelpHandler {
    fn name(&self) -> &str {
        "help"
    }

    async fn execute(&self, _command: &Command<'_>) -> AppResult<Vec<Reply>> {
        Ok(vec![Reply::Text(self.text.clone())])
    }
}
