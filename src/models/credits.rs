use serde::{Deserialize, Serialize};

/// Respuesta de GET /credits/me
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreditsResponse {
    #[serde(default)]
    pub credits: u64,
}
