//! Filter extraction from free-form command text.
//!
//! `?spell fireball system=dnd level: 2` carries a search term
//! (`fireball`) and two filters. Filters are `word=word` or `word:word`,
//! optionally with one space after the separator. Word characters are
//! ASCII letters, digits and `_` only.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::{debug, instrument};

static FILTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:(?P<key>\w+)[=:] ?(?P<value>\w+))").expect("FILTER_PATTERN should compile")
});

/// Filter key → value. Keys keep the case they were typed in.
pub type FilterSet = BTreeMap<String, String>;

/// A parsed lookup: leftover search text plus extracted filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub remainder: String,
    pub filters: FilterSet,
}

impl Query {
    /// Parse raw command text into search text and filters.
    ///
    /// Matches are taken left to right without overlap; a repeated key
    /// keeps the last value.
    #[instrument(level = "debug")]
    pub fn parse(raw: &str) -> Self {
        let mut filters = FilterSet::new();
        for caps in FILTER_PATTERN.captures_iter(raw) {
            filters.insert(caps["key"].to_string(), caps["value"].to_string());
        }

        let remainder = FILTER_PATTERN.replace_all(raw, "").trim().to_string();

        debug!(matches = filters.len(), remainder = %remainder, "Parsed query");

        Self { remainder, filters }
    }
}
