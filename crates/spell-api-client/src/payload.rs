//! Spell creation payloads.
//!
//! Users submit new spells either as JSON or as YAML (inline after
//! `?spell add` or as an attached file). The API only accepts JSON.

use crate::error::SpellApiError;
use serde_json::{Map, Value};

/// Normalize a user-supplied spell definition into a JSON body.
///
/// Input starting with `{` is passed through untouched; anything else is
/// read as a YAML mapping and re-serialized as JSON.
pub fn to_json_body(raw: &[u8]) -> Result<Vec<u8>, SpellApiError> {
    let first = raw
        .iter()
        .copied()
        .find(|b| !b.is_ascii_whitespace())
        .ok_or(SpellApiError::EmptyPayload)?;

    if first == b'{' {
        return Ok(raw.to_vec());
    }

    let mapping: Map<String, Value> = serde_yaml::from_slice(raw)?;
    Ok(serde_json::to_vec(&mapping)?)
}
