use serde::{Deserialize, Serialize};

use crate::prompt::Action;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub topic: Option<String>,
    pub result: Option<String>,
    pub theme: Option<String>,
}

/// Fields posted by the page's generator form.
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub topic: String,
    pub theme: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DispatchRequest {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct DispatchResponse {
    pub action: Action,
    pub prompt: String,
    pub result: String,
}
