//! Spell API types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A spell as returned by the Spell API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Free-form attributes (level, school, range, ...).
    #[serde(default, rename = "spelldata", skip_serializing_if = "BTreeMap::is_empty")]
    pub spell_data: BTreeMap<String, Value>,

    #[serde(default)]
    pub metadata: SpellMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpellMetadata {
    /// Game system tag, e.g. "dnd".
    #[serde(default)]
    pub system: String,
}

/// Known values per metadata field, keyed by field name.
pub type MetadataValues = BTreeMap<String, Vec<String>>;
