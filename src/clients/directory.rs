use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::{
    config::Config,
    models::{
        contractor::Contractor,
        directory::{PermittedEmails, ResellerEmailFrom, Seller, StatusRecord},
        retry::RetryConfig,
    },
    utils::retry_with_backoff,
};

/// Read-only lookups against the directory service: sellers, contractors,
/// employees, status names, and per-reseller notification settings.
pub struct DirectoryClient {
    http_client: Client,
    base_url: String,
    retry_config: RetryConfig,
}

impl DirectoryClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(base_url = %config.directory_service_url, "Directory client initialized");

        Ok(Self {
            http_client,
            base_url: config.directory_service_url.clone(),
            retry_config: config.retry_config(),
        })
    }

    pub async fn get_seller(&self, id: i64) -> Result<Option<Seller>, Error> {
        debug!(seller_id = id, "Looking up seller");
        self.fetch_optional(format!("{}/api/v1/sellers/{id}", self.base_url))
            .await
    }

    pub async fn get_contractor(&self, id: i64) -> Result<Option<Contractor>, Error> {
        debug!(contractor_id = id, "Looking up contractor");
        self.fetch_optional(format!("{}/api/v1/contractors/{id}", self.base_url))
            .await
    }

    pub async fn get_employee(&self, id: i64) -> Result<Option<Contractor>, Error> {
        debug!(employee_id = id, "Looking up employee");
        self.fetch_optional(format!("{}/api/v1/employees/{id}", self.base_url))
            .await
    }

    pub async fn get_status_name(&self, code: i64) -> Result<String, Error> {
        let record: StatusRecord = self
            .fetch_required(format!("{}/api/v1/statuses/{code}", self.base_url))
            .await?;
        Ok(record.name)
    }

    pub async fn get_emails_by_permit(
        &self,
        reseller_id: i64,
        event: &str,
    ) -> Result<Vec<String>, Error> {
        let permitted: PermittedEmails = self
            .fetch_required(format!(
                "{}/api/v1/resellers/{reseller_id}/permitted-emails?event={event}",
                self.base_url
            ))
            .await?;
        Ok(permitted.emails)
    }

    pub async fn get_reseller_email_from(&self, reseller_id: i64) -> Result<String, Error> {
        let sender: ResellerEmailFrom = self
            .fetch_required(format!(
                "{}/api/v1/resellers/{reseller_id}/email-from",
                self.base_url
            ))
            .await?;
        Ok(sender.email_from)
    }

    async fn fetch_optional<T: DeserializeOwned>(&self, url: String) -> Result<Option<T>, Error> {
        retry_with_backoff(&self.retry_config, || {
            let client = self.http_client.clone();
            let url = url.clone();

            async move {
                let response = client.get(&url).send().await.map_err(|e| e.to_string())?;

                let status = response.status();

                if status == StatusCode::NOT_FOUND {
                    return Ok(None);
                }
                if !status.is_success() {
                    return Err(format!("Directory service returned status {status}"));
                }

                response
                    .json::<T>()
                    .await
                    .map(Some)
                    .map_err(|e| format!("Failed to parse directory response: {e}"))
            }
        })
        .await
        .map_err(|e| anyhow!(e))
    }

    async fn fetch_required<T: DeserializeOwned>(&self, url: String) -> Result<T, Error> {
        self.fetch_optional(url.clone())
            .await?
            .ok_or_else(|| anyhow!("Directory service returned 404 for {url}"))
    }
}
