use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{error::OperationError, utils::strip_markup};

/// The flat key/value set substituted into localized message templates.
/// Both email channels and the messenger channel consume it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotifyTemplateData {
    pub complaint_id: i64,
    pub complaint_number: String,
    pub creator_id: i64,
    pub creator_name: String,
    pub expert_id: i64,
    pub expert_name: String,
    pub client_id: i64,
    pub client_name: String,
    pub consumption_id: i64,
    pub consumption_number: String,
    pub agreement_number: String,
    pub date: String,
    pub differences: String,
}

impl NotifyTemplateData {
    /// Rejects the first empty field, in the legacy field order. Runs on the
    /// raw values; markup stripping comes after (legacy ordering, kept
    /// deliberately).
    pub fn validate(&self) -> Result<(), OperationError> {
        let checks = [
            ("COMPLAINT_ID", self.complaint_id == 0),
            ("COMPLAINT_NUMBER", self.complaint_number.is_empty()),
            ("CREATOR_ID", self.creator_id == 0),
            ("CREATOR_NAME", self.creator_name.is_empty()),
            ("EXPERT_ID", self.expert_id == 0),
            ("EXPERT_NAME", self.expert_name.is_empty()),
            ("CLIENT_ID", self.client_id == 0),
            ("CLIENT_NAME", self.client_name.is_empty()),
            ("CONSUMPTION_ID", self.consumption_id == 0),
            ("CONSUMPTION_NUMBER", self.consumption_number.is_empty()),
            ("AGREEMENT_NUMBER", self.agreement_number.is_empty()),
            ("DATE", self.date.is_empty()),
            ("DIFFERENCES", self.differences.is_empty()),
        ];

        for (field, is_empty) in checks {
            if is_empty {
                return Err(OperationError::EmptyTemplateField(field));
            }
        }
        Ok(())
    }

    /// Strips markup from every string-valued field.
    pub fn strip_markup(&mut self) {
        for field in [
            &mut self.complaint_number,
            &mut self.creator_name,
            &mut self.expert_name,
            &mut self.client_name,
            &mut self.consumption_number,
            &mut self.agreement_number,
            &mut self.date,
            &mut self.differences,
        ] {
            *field = strip_markup(field);
        }
    }

    /// The substitution map handed to the localization service and the
    /// messenger gateway.
    pub fn substitutions(&self) -> HashMap<String, String> {
        HashMap::from([
            ("COMPLAINT_ID".to_string(), self.complaint_id.to_string()),
            ("COMPLAINT_NUMBER".to_string(), self.complaint_number.clone()),
            ("CREATOR_ID".to_string(), self.creator_id.to_string()),
            ("CREATOR_NAME".to_string(), self.creator_name.clone()),
            ("EXPERT_ID".to_string(), self.expert_id.to_string()),
            ("EXPERT_NAME".to_string(), self.expert_name.clone()),
            ("CLIENT_ID".to_string(), self.client_id.to_string()),
            ("CLIENT_NAME".to_string(), self.client_name.clone()),
            ("CONSUMPTION_ID".to_string(), self.consumption_id.to_string()),
            (
                "CONSUMPTION_NUMBER".to_string(),
                self.consumption_number.clone(),
            ),
            ("AGREEMENT_NUMBER".to_string(), self.agreement_number.clone()),
            ("DATE".to_string(), self.date.clone()),
            ("DIFFERENCES".to_string(), self.differences.clone()),
        ])
    }
}
