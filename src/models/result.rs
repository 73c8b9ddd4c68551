use serde::{Deserialize, Serialize};

/// Per-channel outcome of one goods-return notification. This is the sole
/// return value of the pipeline; every field defaults to false/empty before
/// any stage runs, so partial or total failure still yields a well-formed
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResult {
    pub notification_employee_by_email: bool,
    pub notification_client_by_email: bool,
    pub notification_client_by_sms: MessengerOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessengerOutcome {
    pub is_sent: bool,
    pub message: String,
}

impl DispatchResult {
    /// Result for an operation rejected before dispatch began: channel
    /// outcomes stay at their defaults, the diagnostic lands in the
    /// messenger message field.
    pub fn failed_before_dispatch(error: impl std::fmt::Display) -> Self {
        Self {
            notification_client_by_sms: MessengerOutcome {
                is_sent: false,
                message: format!("{error}\n"),
            },
            ..Self::default()
        }
    }
}
