use std::{collections::HashMap, time::Duration};

use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, info};

use crate::{
    config::Config,
    models::{
        localization::{RenderRequest, RenderedMessage},
        retry::RetryConfig,
    },
    utils::retry_with_backoff,
};

/// Renders localized message templates. Substitutions are optional; a key
/// without substitutions renders a fixed per-reseller text.
pub struct LocalizationClient {
    http_client: Client,
    base_url: String,
    retry_config: RetryConfig,
}

impl LocalizationClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(base_url = %config.localization_service_url, "Localization client initialized");

        Ok(Self {
            http_client,
            base_url: config.localization_service_url.clone(),
            retry_config: config.retry_config(),
        })
    }

    pub async fn localize(
        &self,
        key: &str,
        substitutions: Option<&HashMap<String, String>>,
        reseller_id: i64,
    ) -> Result<String, Error> {
        let url = format!("{}/api/v1/messages/{key}/render", self.base_url);

        debug!(key, reseller_id, "Rendering localized message");

        retry_with_backoff(&self.retry_config, || {
            let client = self.http_client.clone();
            let url = url.clone();
            let request = RenderRequest {
                reseller_id,
                substitutions,
            };

            async move {
                let response = client
                    .post(&url)
                    .json(&request)
                    .send()
                    .await
                    .map_err(|e| e.to_string())?;

                let status = response.status();

                if !status.is_success() {
                    return Err(format!("Localization service returned status {status}"));
                }

                response
                    .json::<RenderedMessage>()
                    .await
                    .map(|rendered| rendered.text)
                    .map_err(|e| format!("Failed to parse localization response: {e}"))
            }
        })
        .await
        .map_err(|e| anyhow!(e))
    }
}
