use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::OperationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    New,
    Change,
}

impl NotificationKind {
    pub const NEW_CODE: i64 = 1;
    pub const CHANGE_CODE: i64 = 2;

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            Self::NEW_CODE => Some(Self::New),
            Self::CHANGE_CODE => Some(Self::Change),
            _ => None,
        }
    }
}

/// The `from` -> `to` status transition being reported. Present exactly when
/// the event is a status change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDifference {
    pub from: i64,
    pub to: i64,
}

impl StatusDifference {
    fn from_raw(raw: &Map<String, Value>) -> Self {
        Self {
            from: int_field(raw, "from"),
            to: int_field(raw, "to"),
        }
    }
}

/// Typed form of the raw goods-return payload. `notification_type` stays a
/// raw code here; the mapper only checks it for emptiness and the describer
/// rejects unknown codes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationRequest {
    pub reseller_id: i64,
    pub notification_type: i64,
    pub client_id: i64,
    pub creator_id: i64,
    pub expert_id: i64,
    pub complaint_id: i64,
    pub complaint_number: String,
    pub consumption_id: i64,
    pub consumption_number: String,
    pub agreement_number: String,
    pub date: String,
    pub differences: Option<StatusDifference>,
}

impl OperationRequest {
    /// Explicit field-by-field mapping from the untyped payload. Unknown
    /// keys and type-mismatched values are ignored; missing scalars default
    /// to zero/empty and are caught by the emptiness validation that
    /// follows.
    pub fn from_raw(raw: &Value) -> Result<Self, OperationError> {
        let map = raw.as_object().ok_or_else(|| {
            OperationError::InvalidPayload("Request data is not a keyed structure".to_string())
        })?;

        let differences = map
            .get("differences")
            .and_then(Value::as_object)
            .map(StatusDifference::from_raw);

        Ok(Self {
            reseller_id: int_field(map, "resellerId"),
            notification_type: int_field(map, "notificationType"),
            client_id: int_field(map, "clientId"),
            creator_id: int_field(map, "creatorId"),
            expert_id: int_field(map, "expertId"),
            complaint_id: int_field(map, "complaintId"),
            complaint_number: string_field(map, "complaintNumber"),
            consumption_id: int_field(map, "consumptionId"),
            consumption_number: string_field(map, "consumptionNumber"),
            agreement_number: string_field(map, "agreementNumber"),
            date: string_field(map, "date"),
            differences,
        })
    }

    pub fn kind(&self) -> Result<NotificationKind, OperationError> {
        NotificationKind::from_code(self.notification_type)
            .ok_or(OperationError::InvalidNotificationType(self.notification_type))
    }
}

fn int_field(map: &Map<String, Value>, key: &str) -> i64 {
    match map.get(key) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> String {
    match map.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
