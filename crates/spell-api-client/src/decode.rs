//! Normalization of lookup responses.
//!
//! The lookup endpoint answers an exact match with a single object and
//! anything else with an array. Callers always get a `Vec<Spell>`.

use crate::error::DecodeError;
use crate::types::Spell;

/// Shape of a lookup response body.
#[derive(Debug, Clone, PartialEq)]
pub enum SpellResponse {
    Single(Spell),
    Many(Vec<Spell>),
}

impl SpellResponse {
    /// Decode a body, choosing the shape from its first non-whitespace byte.
    pub fn from_slice(body: &[u8]) -> Result<Self, DecodeError> {
        let first = body
            .iter()
            .copied()
            .find(|b| !b.is_ascii_whitespace())
            .ok_or(DecodeError::EmptyPayload)?;

        match first {
            b'{' => Ok(Self::Single(serde_json::from_slice(body)?)),
            b'[' => Ok(Self::Many(serde_json::from_slice(body)?)),
            other => Err(DecodeError::UnrecognizedShape(char::from(other))),
        }
    }

    pub fn into_spells(self) -> Vec<Spell> {
        match self {
            Self::Single(spell) => vec![spell],
            Self::Many(spells) => spells,
        }
    }
}

/// Decode a lookup body into a list of spells.
pub fn decode(body: &[u8]) -> Result<Vec<Spell>, DecodeError> {
    SpellResponse::from_slice(body).map(SpellResponse::into_spells)
}
