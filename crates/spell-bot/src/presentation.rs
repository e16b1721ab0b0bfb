//! Turning spells into chat replies.

use serde_json::Value;
use spell_api_client::Spell;

/// Below this many results each spell gets its own card.
pub const CARD_LIMIT: usize = 4;

pub const NOT_FOUND: &str = "Spell not found";

/// A single outbound chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Card(SpellCard),
    /// Name/system listing in Signal text-style markup.
    Table(String),
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// Rich display of one spell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellCard {
    pub title: String,
    pub description: String,
    pub fields: Vec<CardField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    pub name: String,
    pub value: String,
}

impl SpellCard {
    pub fn from_spell(spell: &Spell) -> Self {
        let fields = spell
            .spell_data
            .iter()
            .map(|(key, value)| CardField {
                name: title_case(key),
                value: display_value(value),
            })
            .collect();

        Self {
            title: spell.name.clone(),
            description: spell.description.clone(),
            fields,
        }
    }

    /// Render with Signal text-style markup.
    pub fn to_styled_text(&self) -> String {
        let mut out = format!("**{}**", self.title);
        if !self.description.is_empty() {
            out.push_str("\n\n");
            out.push_str(&self.description);
        }
        if !self.fields.is_empty() {
            out.push('\n');
            for field in &self.fields {
                out.push_str(&format!("\n**{}:** {}", field.name, field.value));
            }
        }
        out
    }
}

/// Render lookup results.
///
/// A handful of spells become one card each; larger result sets collapse
/// into a single name/system table so the channel is not flooded.
pub fn render(spells: &[Spell]) -> Vec<Reply> {
    if spells.is_empty() {
        return vec![Reply::text(NOT_FOUND)];
    }

    if spells.len() < CARD_LIMIT {
        spells
            .iter()
            .map(|spell| Reply::Card(SpellCard::from_spell(spell)))
            .collect()
    } else {
        vec![Reply::Table(render_table(spells))]
    }
}

/// Header in bold, one monospace row per spell.
fn render_table(spells: &[Spell]) -> String {
    let mut table = String::from("**Spell Name** | **System**");
    for spell in spells {
        table.push_str(&format!("\n`{} | {}`", spell.name, spell.metadata.system));
    }
    table
}

/// Attribute values without JSON quoting for strings.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Upper-case the first letter of every word.
fn title_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut at_word_start = true;
    for c in key.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}
