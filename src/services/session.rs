//! Session Service
//!
//! Login/logout endpoints. Token issuance itself happens server-side.

use serde::{Deserialize, Serialize};

use super::{post_json_anonymous, send_empty, ApiError};
use crate::config::app_config;
use crate::models::{StoredAuth, User};

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    user: User,
}

/// Exchange credentials for a token
pub async fn login(email: &str, password: &str) -> Result<StoredAuth, ApiError> {
    let response: LoginResponse = post_json_anonymous("/api/auth/login", &LoginArgs { email, password }).await?;
    Ok(StoredAuth {
        token: response.token,
        user: response.user,
    })
}

/// Tell the backend to drop the session. Local state is cleared by the caller either way.
pub async fn logout() -> Result<(), ApiError> {
    send_empty("POST", "/api/auth/logout").await
}

/// Where the "Sign in with Google" button sends the browser
pub fn oauth_start_url() -> String {
    app_config().api_url("/api/auth/google")
}
