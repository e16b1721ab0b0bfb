//! Signal API types.

use serde::{Deserialize, Serialize};

/// Incoming Signal message.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub envelope: Envelope,
    pub account: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub source: String,
    pub timestamp: i64,
    #[serde(rename = "dataMessage")]
    pub data_message: Option<DataMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataMessage {
    pub message: Option<String>,
    pub timestamp: i64,
    #[serde(rename = "groupInfo")]
    pub group_info: Option<GroupInfo>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupInfo {
    #[serde(rename = "groupId")]
    pub group_id: String,
}

/// Attachment metadata; the bytes are fetched separately by id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Attachment {
    pub id: String,
    #[serde(rename = "contentType")]
    pub content_type: Option<String>,
    pub filename: Option<String>,
    pub size: Option<u64>,
}

/// How the Signal API should interpret the message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMode {
    Normal,
    /// `**bold**`, `*italic*`, `` `mono` `` markup is rendered.
    Styled,
}

/// Outgoing message request.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub message: String,
    pub number: Option<String>,
    pub recipients: Option<Vec<String>>,
    pub text_mode: TextMode,
}

/// Parsed message for bot processing.
#[derive(Debug, Clone)]
pub struct BotMessage {
    /// The phone number that sent the message.
    pub source: String,
    /// The message text.
    pub text: String,
    /// Message timestamp.
    pub timestamp: i64,
    /// Whether this is a group message.
    pub is_group: bool,
    /// Group ID if this is a group message.
    pub group_id: Option<String>,
    /// Files attached to the message, in the order sent.
    pub attachments: Vec<Attachment>,
    /// The bot's phone number that received this message.
    pub receiving_account: String,
}

impl BotMessage {
    /// Extract bot message from incoming envelope.
    ///
    /// A message carrying only attachments gets empty text.
    pub fn from_incoming(msg: &IncomingMessage) -> Option<Self> {
        let data = msg.envelope.data_message.as_ref()?;
        if data.message.is_none() && data.attachments.is_empty() {
            return None;
        }

        Some(Self {
            source: msg.envelope.source.clone(),
            text: data.message.clone().unwrap_or_default(),
            timestamp: msg.envelope.timestamp,
            is_group: data.group_info.is_some(),
            group_id: data.group_info.as_ref().map(|g| g.group_id.clone()),
            attachments: data.attachments.clone(),
            receiving_account: msg.account.clone(),
        })
    }

    /// Get the reply target (group ID or source number).
    pub fn reply_target(&self) -> &str {
        self.group_id.as_deref().unwrap_or(&self.source)
    }

    /// Whether the bot's own account sent this message.
    pub fn is_from_self(&self) -> bool {
        self.source == self.receiving_account
    }
}
