use serde::{Deserialize, Serialize};

/// Body of `POST /api/add`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddPayload {
    pub activity: String,
    pub amount: f64,
}

/// Body of `POST /api/target`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetPayload {
    pub target: f64,
}

/// `{success, message}` envelope returned by every mutation endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub new_target: Option<f64>,
}

impl MutationResponse {
    /// Server message, or `fallback` when the server sent none
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}
