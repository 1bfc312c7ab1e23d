//! Account endpoints: login, registration, and the signed-in profile.

use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Exchange credentials for a bearer token.
    ///
    /// The token is returned, not stored: callers persist it through
    /// [`Session::establish`](crate::auth::Session::establish) so the next
    /// request picks it up.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post("/users/login", request).await
    }

    /// Create an account. The backend signs the new account in immediately,
    /// so this returns the same shape as [`login`](Self::login).
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post("/users/register", request).await
    }

    /// Profile of the account the current credential belongs to.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get("/users/me").await
    }
}
