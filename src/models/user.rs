//! Account models: login/registration payloads and the signed-in user profile.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::auth::StoredCredential;

/// Credentials submitted to `POST /users/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /users/register`. The backend signs the new account in
/// immediately, so the response shape is the same as for login.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A signed-in storefront account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Response to a successful login or registration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    /// Token lifetime in seconds, counted from the moment of issue.
    #[serde(rename = "expiresIn")]
    pub expires_in: i64,
    #[serde(default)]
    pub user: Option<User>,
}

impl AuthResponse {
    /// Convert the issued token into the persistable credential record,
    /// stamping the absolute expiry from the relative lifetime. A lifetime
    /// outside the representable range clamps to the far future rather
    /// than trusting the backend value blindly.
    pub fn credential(&self) -> StoredCredential {
        let ttl = Duration::try_seconds(self.expires_in).unwrap_or(Duration::MAX);
        StoredCredential::expiring_in(&self.token, ttl)
    }
}
