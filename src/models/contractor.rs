use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractorType {
    Customer,
    Employee,
    Partner,
}

/// A person attached to an operation. Client, creator and expert share this
/// shape; the role is contextual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contractor {
    pub id: i64,
    #[serde(rename = "type")]
    pub contractor_type: ContractorType,
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    pub seller_id: i64,
}

impl Contractor {
    /// Full name when it is set and non-empty, short name otherwise.
    pub fn display_name(&self) -> &str {
        match &self.full_name {
            Some(full_name) if !full_name.is_empty() => full_name,
            _ => &self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedContractors {
    pub client: Contractor,
    pub creator: Contractor,
    pub expert: Contractor,
}
