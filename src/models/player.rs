use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered player, created server-side and cached client-side after
/// login/register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_active: bool,
}

/// Response shape shared by the login and register endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub player: Player,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}
