use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, info};

use crate::{
    config::Config,
    models::{
        event::NotificationEvent,
        messaging::{MessengerSendRequest, MessengerSendResponse},
        template::NotifyTemplateData,
    },
};

/// Messenger/SMS gateway. Unlike the email gateway it reports back: a
/// success flag plus an error string that travels with the flag.
pub struct MessengerClient {
    http_client: Client,
    base_url: String,
}

impl MessengerClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(base_url = %config.messenger_service_url, "Messenger client initialized");

        Ok(Self {
            http_client,
            base_url: config.messenger_service_url.clone(),
        })
    }

    pub async fn send(
        &self,
        reseller_id: i64,
        client_id: i64,
        status_to: i64,
        template_data: &NotifyTemplateData,
    ) -> Result<MessengerSendResponse, Error> {
        let url = format!("{}/api/v1/notifications", self.base_url);
        let request = MessengerSendRequest {
            reseller_id,
            client_id,
            event: NotificationEvent::ChangeReturnStatus,
            status_to,
            template_data: template_data.substitutions(),
        };

        debug!(reseller_id, client_id, status_to, "Sending messenger notification");

        let response = self.http_client.post(&url).json(&request).send().await?;

        let status = response.status();

        if !status.is_success() {
            return Err(anyhow!("Messenger gateway returned status {status}"));
        }

        Ok(response.json::<MessengerSendResponse>().await?)
    }
}
