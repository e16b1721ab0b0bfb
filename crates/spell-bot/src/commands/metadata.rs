//! Metadata command - lists filterable fields and their values.

use crate::commands::{Command, CommandHandler};
use crate::error::AppResult;
use crate::presentation::Reply;
use async_trait::async_trait;
use spell_api_client::SpellApiClient;
use std::sync::Arc;

pub struct MetadataHandler {
    spell_api: Arc<SpellApiClient>,
}

impl MetadataHandler {
    pub fn new(spell_api: Arc<SpellApiClient>) -> Self {
        Self { spell_api }
    }
}

#[async_trait]
impl CommandHandler for MetadataHandler {
    fn name(&self) -> &str {
        "metadata"
    }

    async fn execute(&self, command: &Command<'_>) -> AppResult<Vec<Reply>> {
        let user_id = command.message.source.as_str();
        let field = command.argument.trim();

        // `?metadata metadata` lists names too.
        let text = if field.is_empty() || field == self.name() {
            let names = self.spell_api.metadata_names(user_id).await?;
            listing("Found the following possible metadata names:", &names)
        } else {
            let values = self.spell_api.metadata_values(user_id, field).await?;
            listing(
                &format!("Found the following possible metadata values for {}:", field),
                &values,
            )
        };

        Ok(vec![Reply::Text(text)])
    }
}

fn listing(heading: &str, items: &[String]) -> String {
    let mut out = format!("{}\n", heading);
    for item in items {
        out.push_str(item);
        out.push('\n');
    }
    out
}
