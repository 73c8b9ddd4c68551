use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct RenderRequest<'a> {
    pub reseller_id: i64,
    pub substitutions: Option<&'a HashMap<String, String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderedMessage {
    pub text: String,
}
