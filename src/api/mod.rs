//! HTTP API Client
//!
//! Thin typed wrapper over the CookSup REST API, split into the auth, chef,
//! booking and review resource groups. No retry, no timeout policy, no
//! response caching; non-success responses are decoded into [`ApiError`]
//! and handed back to the caller unchanged.

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::state::session;

pub mod auth;
pub mod bookings;
pub mod chefs;
pub mod reviews;
pub mod types;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

const API_URL_KEY: &str = "cooksup_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Error returned by every API call.
///
/// Carries the backend's message and, when the backend sends one, its
/// structured error code.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub message: String,
    pub code: Option<String>,
}

impl ApiError {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Message with the backend's structured code appended when present.
    pub fn detail(&self) -> String {
        match &self.code {
            Some(code) => format!("{} [{}]", self.message, code),
            None => self.message.clone(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error body shape used by the backend
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    code: Option<String>,
}

// ============ Request plumbing ============

fn endpoint(path: &str) -> String {
    format!("{}{}", get_api_base(), path)
}

/// Attach the bearer token, read from durable storage at build time.
///
/// Reading per call (instead of mutating a shared default header) means a
/// request issued after logout can never carry a stale credential.
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match session::stored_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

pub(crate) fn get(path: &str) -> RequestBuilder {
    authorize(Request::get(&endpoint(path)))
}

pub(crate) fn post(path: &str) -> RequestBuilder {
    authorize(Request::post(&endpoint(path)))
}

pub(crate) fn put(path: &str) -> RequestBuilder {
    authorize(Request::put(&endpoint(path)))
}

pub(crate) fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::message(format!("Network error: {}", err))
}

pub(crate) fn build_error(err: gloo_net::Error) -> ApiError {
    ApiError::message(format!("Request build error: {}", err))
}

/// Decode a failed response into an [`ApiError`], falling back to a generic
/// status message when the body is not the backend's error shape.
async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => ApiError {
            message: body.error,
            code: body.code,
        },
        Err(_) => ApiError::message(format!("Request failed with status {}", status)),
    }
}

/// Read a JSON success body, or decode the error.
pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from(response).await);
    }
    response
        .json()
        .await
        .map_err(|e| ApiError::message(format!("Parse error: {}", e)))
}

/// Check for success, discarding the body.
pub(crate) async fn read_ok(response: Response) -> Result<(), ApiError> {
    if !response.ok() {
        return Err(error_from(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_keeps_structured_code() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"Chef not found","code":"CHEF_404"}"#).unwrap();
        assert_eq!(body.error, "Chef not found");
        assert_eq!(body.code.as_deref(), Some("CHEF_404"));
    }

    #[test]
    fn error_body_code_is_optional() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"Login failed"}"#).unwrap();
        assert_eq!(body.code, None);
    }

    #[test]
    fn api_error_displays_message_only() {
        let err = ApiError {
            message: "boom".to_string(),
            code: Some("X".to_string()),
        };
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.detail(), "boom [X]");
        assert_eq!(ApiError::message("plain").detail(), "plain");
    }
}
