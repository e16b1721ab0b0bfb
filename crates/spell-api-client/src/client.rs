//! Spell API HTTP client.

use crate::decode::decode;
use crate::endpoint::{collection_url, metadata_url, query_url, SPELLS_PATH};
use crate::error::SpellApiError;
use crate::payload::to_json_body;
use crate::query::Query;
use crate::types::*;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Header identifying the chat user on metadata requests.
pub const USER_ID_HEADER: &str = "X-USER-ID";

/// Spell API client.
///
/// Lookups and writes carry separate per-request timeouts; there is no
/// retry on failure.
#[derive(Clone)]
pub struct SpellApiClient {
    client: Client,
    base_url: String,
    lookup_timeout: Duration,
    write_timeout: Duration,
}

impl SpellApiClient {
    /// Create a new Spell API client.
    pub fn new(
        base_url: impl Into<String>,
        lookup_timeout: Duration,
        write_timeout: Duration,
    ) -> Result<Self, SpellApiError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            lookup_timeout,
            write_timeout,
        })
    }

    /// Look up spells matching free-form command text.
    #[instrument(skip(self))]
    pub async fn lookup(&self, raw: &str) -> Result<Vec<Spell>, SpellApiError> {
        let query = Query::parse(raw);
        self.find(&query).await
    }

    /// Look up spells for an already parsed query.
    #[instrument(skip(self), fields(url = tracing::field::Empty))]
    pub async fn find(&self, query: &Query) -> Result<Vec<Spell>, SpellApiError> {
        let url = query_url(&self.base_url, query);
        tracing::Span::current().record("url", url.as_str());

        let response = self
            .client
            .get(&url)
            .timeout(self.lookup_timeout)
            .send()
            .await?;

        let body = self.success_body(response).await?;
        let spells = decode(&body)?;
        debug!(count = spells.len(), "Decoded spells");
        Ok(spells)
    }

    /// Create a spell from a JSON or YAML definition.
    ///
    /// Returns the API's response body verbatim.
    #[instrument(skip(self, raw), fields(payload_len = raw.len()))]
    pub async fn create(&self, raw: &[u8]) -> Result<String, SpellApiError> {
        let body = to_json_body(raw)?;

        let response = self
            .client
            .post(collection_url(&self.base_url, SPELLS_PATH))
            .header("Content-Type", "application/json")
            .timeout(self.write_timeout)
            .body(body)
            .send()
            .await?;

        let body = self.success_body(response).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// List metadata field names known to the API.
    #[instrument(skip(self))]
    pub async fn metadata_names(&self, user_id: &str) -> Result<Vec<String>, SpellApiError> {
        let body = self.get_metadata(user_id, None).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// List known values for a single metadata field.
    #[instrument(skip(self))]
    pub async fn metadata_values(
        &self,
        user_id: &str,
        field: &str,
    ) -> Result<Vec<String>, SpellApiError> {
        let body = self.get_metadata(user_id, Some(field)).await?;
        let mut values: MetadataValues = serde_json::from_slice(&body)?;
        Ok(values.remove(field).unwrap_or_default())
    }

    /// Health check - returns true if the API answers at all.
    pub async fn health_check(&self) -> bool {
        self.client
            .get(collection_url(&self.base_url, SPELLS_PATH))
            .timeout(self.lookup_timeout)
            .send()
            .await
            .is_ok()
    }

    async fn get_metadata(
        &self,
        user_id: &str,
        field: Option<&str>,
    ) -> Result<Vec<u8>, SpellApiError> {
        let response = self
            .client
            .get(metadata_url(&self.base_url, field))
            .header(USER_ID_HEADER, user_id)
            .timeout(self.write_timeout)
            .send()
            .await?;

        self.success_body(response).await
    }

    /// Read the body of a successful response, or turn the status into an error.
    async fn success_body(&self, response: reqwest::Response) -> Result<Vec<u8>, SpellApiError> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            debug!(
                "Response body: {}",
                String::from_utf8_lossy(&body[..body.len().min(200)])
            );
            Ok(body.to_vec())
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            warn!(status = status.as_u16(), "Spell API returned an error");
            Err(SpellApiError::Upstream {
                status: status.as_u16(),
                message,
            })
        }
    }
}
