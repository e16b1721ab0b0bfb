//! Request URL construction for the Spell API.

use crate::query::{FilterSet, Query};
use urlencoding::encode;

/// Collection path for spells.
pub const SPELLS_PATH: &str = "spells";

/// Collection path for spell metadata.
pub const METADATA_PATH: &str = "spellmetadata";

/// Build a lookup URL: `{base}/spells[/{term}][?k=v&...]`.
///
/// The search term becomes a single encoded path segment. Filters are
/// appended as a query string with keys in ascending order.
pub fn lookup_url(base_url: &str, remainder: &str, filters: &FilterSet) -> String {
    let mut url = collection_url(base_url, SPELLS_PATH);

    if !remainder.is_empty() {
        url.push('/');
        url.push_str(&encode(remainder));
    }

    if !filters.is_empty() {
        url.push('?');
        url.push_str(&encode_filters(filters));
    }

    url
}

/// Lookup URL for an already parsed query.
pub fn query_url(base_url: &str, query: &Query) -> String {
    lookup_url(base_url, &query.remainder, &query.filters)
}

/// `{base}/spellmetadata[/{field}]`.
pub fn metadata_url(base_url: &str, field: Option<&str>) -> String {
    let mut url = collection_url(base_url, METADATA_PATH);
    if let Some(field) = field {
        url.push('/');
        url.push_str(&encode(field));
    }
    url
}

/// `{base}/{collection}` with any trailing slash on the base dropped.
pub fn collection_url(base_url: &str, collection: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), collection)
}

/// Encode filters as `k1=v1&k2=v2`, sorted by key.
pub fn encode_filters(filters: &FilterSet) -> String {
    // FilterSet is a BTreeMap, so iteration is already key-ordered.
    filters
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
