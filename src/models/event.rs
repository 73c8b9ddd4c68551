use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

/// Event type used when looking up which employees are permitted to
/// receive goods-return notifications.
pub const GOODS_RETURN_EVENT: &str = "tsGoodsReturn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationEvent {
    ChangeReturnStatus,
}

impl Display for NotificationEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            NotificationEvent::ChangeReturnStatus => write!(f, "changeReturnStatus"),
        }
    }
}
