//! Backend Service Wrappers
//!
//! Thin async clients for the marketplace REST API, organized by domain.
//! Domains without a live endpoint serve fixtures from `mock`.

mod analytics;
mod categories;
mod checkers;
mod orders;
mod products;
mod session;
mod vendors;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::auth::AuthStore;
use crate::storage::KeyValueStore;
use crate::config::app_config;
use crate::route::hard_redirect;

// Re-export all public items
pub use analytics::*;
pub use categories::*;
pub use checkers::*;
pub use orders::*;
pub use products::*;
pub use session::*;
pub use vendors::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("session expired")]
    Unauthorized,
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("no browser window")]
    NoWindow,
}

/// How a response status is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    /// Forces logout
    Unauthorized,
    Failed,
}

pub fn classify_status(status: u16) -> StatusClass {
    match status {
        200..=299 => StatusClass::Success,
        401 => StatusClass::Unauthorized,
        _ => StatusClass::Failed,
    }
}

pub fn bearer_header(token: &str) -> String {
    format!("Bearer {}", token)
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Network(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

// ========================
// Request Plumbing
// ========================

/// Issue a request with the stored bearer token attached.
///
/// A 401 clears stored auth and hard-redirects to the login page. No retry.
pub async fn authenticated_fetch(method: &str, endpoint: &str, body: Option<String>) -> Result<Response, ApiError> {
    fetch(method, endpoint, body, true).await
}

/// Request without credentials (login). A 401 is returned as an error only.
pub async fn anonymous_fetch(method: &str, endpoint: &str, body: Option<String>) -> Result<Response, ApiError> {
    fetch(method, endpoint, body, false).await
}

async fn fetch(method: &str, endpoint: &str, body: Option<String>, authenticated: bool) -> Result<Response, ApiError> {
    let config = app_config();
    let url = config.api_url(endpoint);

    let init = RequestInit::new();
    init.set_method(method);
    init.set_mode(RequestMode::Cors);
    if let Some(body) = body.as_deref() {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(&url, &init).map_err(js_error)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(js_error)?;
    if body.is_some() {
        headers.set("Content-Type", "application/json").map_err(js_error)?;
    }
    if authenticated {
        if let Some(token) = AuthStore::browser().and_then(|store| store.token()) {
            headers.set("Authorization", &bearer_header(&token)).map_err(js_error)?;
        }
    }

    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let value = JsFuture::from(window.fetch_with_request(&request)).await.map_err(js_error)?;
    let response: Response = value.dyn_into().map_err(js_error)?;

    match classify_status(response.status()) {
        StatusClass::Success => Ok(response),
        StatusClass::Unauthorized if !authenticated => Err(ApiError::Unauthorized),
        StatusClass::Unauthorized => {
            log::warn!("{} {} returned 401, signing out", method, endpoint);
            match AuthStore::browser() {
                Some(store) => hard_redirect(sign_out_on_unauthorized(&store)),
                None => hard_redirect(&config.login_path),
            }
            Err(ApiError::Unauthorized)
        }
        StatusClass::Failed => {
            let status = response.status();
            let message = response_text(&response).await.unwrap_or_default();
            log::error!("{} {} failed: {} {}", method, endpoint, status, message);
            Err(ApiError::Status { status, message })
        }
    }
}

/// Drop stored auth after a 401; returns where the browser goes next
fn sign_out_on_unauthorized<L: KeyValueStore, S: KeyValueStore>(store: &AuthStore<L, S>) -> &'static str {
    store.clear_auth();
    &app_config().login_path
}

async fn response_text(response: &Response) -> Result<String, ApiError> {
    let promise = response.text().map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;
    Ok(value.as_string().unwrap_or_default())
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let promise = response.json().map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    let response = authenticated_fetch("GET", endpoint, None).await?;
    decode_json(response).await
}

pub async fn send_json<B: Serialize, T: DeserializeOwned>(method: &str, endpoint: &str, body: &B) -> Result<T, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = authenticated_fetch(method, endpoint, Some(body)).await?;
    decode_json(response).await
}

/// POST without credentials
pub async fn post_json_anonymous<B: Serialize, T: DeserializeOwned>(endpoint: &str, body: &B) -> Result<T, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = anonymous_fetch("POST", endpoint, Some(body)).await?;
    decode_json(response).await
}

/// Request whose response body is ignored
pub async fn send_empty(method: &str, endpoint: &str) -> Result<(), ApiError> {
    authenticated_fetch(method, endpoint, None).await.map(|_| ())
}

/// Stand-in for network latency in mock services
pub(crate) async fn simulate_latency() {
    gloo_timers::future::TimeoutFuture::new(app_config().mock_latency_ms).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_status() {
        assert_eq!(classify_status(200), StatusClass::Success);
        assert_eq!(classify_status(204), StatusClass::Success);
        assert_eq!(classify_status(401), StatusClass::Unauthorized);
        assert_eq!(classify_status(403), StatusClass::Failed);
        assert_eq!(classify_status(500), StatusClass::Failed);
    }

    #[test]
    fn test_bearer_header() {
        assert_eq!(bearer_header("abc"), "Bearer abc");
    }

    #[test]
    fn test_unauthorized_clears_both_backends() {
        use crate::models::User;
        use crate::storage::MemoryStorage;

        let (local, session) = (MemoryStorage::new(), MemoryStorage::new());
        let store = AuthStore::new(&local, &session);
        let user = User {
            id: "1".into(),
            email: "ops@shop.test".into(),
            name: "Ops".into(),
            role: "admin".into(),
        };
        store.store_auth("remembered", &user, true).unwrap();
        session.set(crate::auth::TOKEN_KEY, "tab").unwrap();

        assert_eq!(sign_out_on_unauthorized(&store), "/admin/login");
        assert_eq!(store.get_stored_auth(), None);
        assert!(!store.is_authenticated());
        assert_eq!(session.get(crate::auth::TOKEN_KEY), None);
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::Status {
            status: 422,
            message: "slug taken".into(),
        };
        assert_eq!(err.to_string(), "request failed with status 422: slug taken");
        assert_eq!(ApiError::Unauthorized.to_string(), "session expired");
    }
}
