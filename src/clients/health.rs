use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use chrono::Utc;
use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    config::Config,
    models::health::{HealthCheckResponse, HealthStatus, ServiceHealth},
};

pub struct HealthChecker {
    config: Config,
    http_client: Client,
}

impl HealthChecker {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }

    pub async fn check_all(&self) -> HealthCheckResponse {
        let mut checks = HashMap::new();

        let directory_health = self.ping(&self.config.directory_service_url).await;
        checks.insert("directory_service".to_string(), directory_health);

        let localization_health = self.ping(&self.config.localization_service_url).await;
        checks.insert("localization_service".to_string(), localization_health);

        let messages_health = self.ping(&self.config.messages_service_url).await;
        checks.insert("messages_gateway".to_string(), messages_health);

        let messenger_health = self.ping(&self.config.messenger_service_url).await;
        checks.insert("messenger_gateway".to_string(), messenger_health);

        let overall_status = self.determine_overall_status(&checks);

        HealthCheckResponse {
            status: overall_status,
            timestamp: Utc::now(),
            checks,
        }
    }

    async fn ping(&self, base_url: &str) -> ServiceHealth {
        let start = Instant::now();
        let url = format!("{base_url}/health");

        match self
            .http_client
            .get(&url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                let elapsed = start.elapsed().as_millis() as u64;
                debug!(url, response_time_ms = elapsed, "Health check passed");
                ServiceHealth::healthy(elapsed)
            }
            Ok(response) => {
                warn!(url, status = %response.status(), "Health check returned error status");
                ServiceHealth::unhealthy(format!("Returned status {}", response.status()))
            }
            Err(e) => {
                warn!(url, error = %e, "Health check request failed");
                ServiceHealth::unhealthy(format!("Request failed: {e}"))
            }
        }
    }

    fn determine_overall_status(&self, checks: &HashMap<String, ServiceHealth>) -> HealthStatus {
        // Without the lookup services no request can even be validated; a
        // down gateway only degrades the affected channels.
        let lookups_unhealthy = checks
            .iter()
            .filter(|(name, _)| {
                name.as_str() == "directory_service" || name.as_str() == "localization_service"
            })
            .any(|(_, health)| health.status == HealthStatus::Unhealthy);

        let any_unhealthy = checks
            .values()
            .any(|health| health.status == HealthStatus::Unhealthy);

        if lookups_unhealthy {
            HealthStatus::Unhealthy
        } else if any_unhealthy {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        }
    }
}
