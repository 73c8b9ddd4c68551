use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, info};

use crate::{
    config::Config,
    models::{
        event::NotificationEvent,
        messaging::{EmailMessage, SendMessagesRequest},
    },
};

/// Email gateway. Sends are fire-and-forget: the response body is not
/// consumed, and sends are attempted once (the gateway owns its retry
/// policy).
pub struct MessagesClient {
    http_client: Client,
    base_url: String,
}

impl MessagesClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(base_url = %config.messages_service_url, "Messages client initialized");

        Ok(Self {
            http_client,
            base_url: config.messages_service_url.clone(),
        })
    }

    pub async fn send_message(
        &self,
        messages: &[EmailMessage],
        reseller_id: i64,
        event: NotificationEvent,
        client_id: Option<i64>,
        status_to: Option<i64>,
    ) -> Result<(), Error> {
        let url = format!("{}/api/v1/messages", self.base_url);
        let request = SendMessagesRequest {
            messages,
            reseller_id,
            event,
            client_id,
            status_to,
        };

        let response = self.http_client.post(&url).json(&request).send().await?;

        let status = response.status();

        if status.is_success() {
            debug!(reseller_id, %event, message_count = messages.len(), "Messages accepted by gateway");
            Ok(())
        } else {
            Err(anyhow!("Message gateway returned status {status}"))
        }
    }
}
