//! Message receiver with polling.

use crate::client::SignalClient;
use crate::types::*;
use std::time::Duration;
use tokio::time::sleep;
use tokio_stream::Stream;
use tracing::{debug, error};

/// Pause after a failed receive before polling again.
const ERROR_BACKOFF: Duration = Duration::from_secs(5);

/// Message receiver that polls for new messages.
pub struct MessageReceiver {
    client: SignalClient,
    poll_interval: Duration,
}

impl MessageReceiver {
    /// Create a new message receiver.
    pub fn new(client: SignalClient, poll_interval: Duration) -> Self {
        Self {
            client,
            poll_interval,
        }
    }

    /// Start receiving messages as an async stream.
    ///
    /// Envelopes without text or attachments (receipts, typing
    /// indicators) are dropped here.
    pub fn stream(self) -> impl Stream<Item = BotMessage> {
        async_stream::stream! {
            loop {
                match self.client.receive().await {
                    Ok(messages) => {
                        for bot_msg in messages.iter().filter_map(BotMessage::from_incoming) {
                            debug!(
                                source = %bot_msg.source,
                                attachments = bot_msg.attachments.len(),
                                "Received: {}",
                                bot_msg.text.chars().take(50).collect::<String>()
                            );
                            yield bot_msg;
                        }
                    }
                    Err(e) => {
                        error!(error = %e, "Receive error");
                        sleep(ERROR_BACKOFF).await;
                        continue;
                    }
                }

                sleep(self.poll_interval).await;
            }
        }
    }
}
