pub mod describer;
pub mod dispatch;
pub mod mapper;
pub mod resolver;
pub mod template;

use anyhow::{Error, Result};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    clients::{
        directory::DirectoryClient, localization::LocalizationClient, messaging::MessagesClient,
        messenger::MessengerClient,
    },
    config::Config,
    models::result::DispatchResult,
};

pub struct OperationClients {
    pub directory: DirectoryClient,
    pub localization: LocalizationClient,
    pub messages: MessagesClient,
    pub messenger: MessengerClient,
}

impl OperationClients {
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            directory: DirectoryClient::new(config)?,
            localization: LocalizationClient::new(config)?,
            messages: MessagesClient::new(config)?,
            messenger: MessengerClient::new(config)?,
        })
    }
}

/// Runs the whole pipeline for one raw goods-return payload. Never fails:
/// anything raised before dispatch is folded into the result's messenger
/// message field, and the dispatch stage degrades per channel.
pub async fn run(payload: &Value, clients: &OperationClients) -> DispatchResult {
    let operation_id = Uuid::new_v4();

    info!(%operation_id, "Processing goods-return status notification");

    let context = match mapper::map(payload, clients).await {
        Ok(context) => context,
        Err(e) => {
            warn!(
                %operation_id,
                status = %e.status_code(),
                error = %e,
                "Operation rejected before dispatch"
            );
            return DispatchResult::failed_before_dispatch(&e);
        }
    };

    let (template_data, email_from) = match template::build(&context, &clients.directory).await {
        Ok(built) => built,
        Err(e) => {
            warn!(
                %operation_id,
                status = %e.status_code(),
                error = %e,
                "Template assembly failed before dispatch"
            );
            return DispatchResult::failed_before_dispatch(&e);
        }
    };

    let result = dispatch::dispatch(&context, &template_data, &email_from, clients).await;

    info!(
        %operation_id,
        reseller_id = context.request.reseller_id,
        employee_email = result.notification_employee_by_email,
        client_email = result.notification_client_by_email,
        client_sms = result.notification_client_by_sms.is_sent,
        "Dispatch completed"
    );

    result
}
