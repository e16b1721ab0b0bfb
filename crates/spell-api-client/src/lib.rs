//! Client for the Spell API.
//!
//! Turns chat command text into lookup URLs, normalizes the API's
//! single-or-many responses, and converts YAML spell definitions for
//! creation.

mod client;
mod decode;
mod endpoint;
mod error;
mod payload;
mod query;
mod types;

pub use client::{SpellApiClient, USER_ID_HEADER};
pub use decode::{decode, SpellResponse};
pub use endpoint::{encode_filters, lookup_url, metadata_url, query_url};
pub use error::{DecodeError, SpellApiError};
pub use payload::to_json_body;
pub use query::{FilterSet, Query};
pub use types::*;
