use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::event::NotificationEvent;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    pub email_from: String,
    pub email_to: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendMessagesRequest<'a> {
    pub messages: &'a [EmailMessage],
    pub reseller_id: i64,
    pub event: NotificationEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_to: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessengerSendRequest {
    pub reseller_id: i64,
    pub client_id: i64,
    pub event: NotificationEvent,
    pub status_to: i64,
    pub template_data: HashMap<String, String>,
}

/// The messenger gateway reports success and an out-of-band error string
/// side by side; both feed the channel outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct MessengerSendResponse {
    pub success: bool,
    #[serde(default)]
    pub error: String,
}
