//! Signal HTTP client.

use crate::error::SignalError;
use crate::types::*;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Signal CLI REST API client.
#[derive(Clone)]
pub struct SignalClient {
    client: Client,
    base_url: String,
    phone_number: String,
}

impl SignalClient {
    /// Create a new Signal client bound to the bot's registered number.
    pub fn new(
        base_url: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, SignalError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            phone_number: phone_number.into(),
        })
    }

    /// Check if the Signal API is healthy.
    pub async fn health_check(&self) -> bool {
        self.client
            .get(format!("{}/v1/health", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// Receive pending messages.
    #[instrument(skip(self))]
    pub async fn receive(&self) -> Result<Vec<IncomingMessage>, SignalError> {
        let encoded_number = encode(&self.phone_number);
        let response = self
            .client
            .get(format!("{}/v1/receive/{}", self.base_url, encoded_number))
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(SignalError::Api(msg));
        }

        let messages: Vec<IncomingMessage> = response.json().await?;
        debug!("Received {} messages", messages.len());
        Ok(messages)
    }

    /// Download the raw bytes of an attachment.
    #[instrument(skip(self, attachment), fields(id = %attachment.id, filename = ?attachment.filename))]
    pub async fn download_attachment(&self, attachment: &Attachment) -> Result<Vec<u8>, SignalError> {
        let response = self
            .client
            .get(format!(
                "{}/v1/attachments/{}",
                self.base_url,
                encode(&attachment.id)
            ))
            .send()
            .await?;

        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Attachment download failed: {}", message);
            return Err(SignalError::Attachment {
                id: attachment.id.clone(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        debug!("Downloaded {} attachment bytes", bytes.len());
        Ok(bytes.to_vec())
    }

    /// Send a plain message to a recipient.
    pub async fn send(&self, recipient: &str, message: &str) -> Result<(), SignalError> {
        self.send_with_mode(recipient, message, TextMode::Normal).await
    }

    /// Send a message whose markup should be rendered as text styles.
    pub async fn send_styled(&self, recipient: &str, message: &str) -> Result<(), SignalError> {
        self.send_with_mode(recipient, message, TextMode::Styled).await
    }

    #[instrument(skip(self, message))]
    async fn send_with_mode(
        &self,
        recipient: &str,
        message: &str,
        text_mode: TextMode,
    ) -> Result<(), SignalError> {
        let request = SendMessageRequest {
            message: message.to_string(),
            number: Some(self.phone_number.clone()),
            recipients: Some(vec![recipient.to_string()]),
            text_mode,
        };

        let response = self
            .client
            .post(format!("{}/v2/send", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            warn!("Send failed: {}", msg);
            return Err(SignalError::SendFailed(msg));
        }

        debug!("Sent message to {}", recipient);
        Ok(())
    }
}
