//! HTTP Client Wrapper
//!
//! Thin layer over `gloo_net` shared by every resource group: resolves the
//! configured base URL, attaches the bearer token from the persisted session
//! on every outgoing request, normalizes list payloads and maps failures
//! into [`ApiError`]. Errors are propagated unmodified to the calling page,
//! which is responsible for turning them into a toast.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::FormData;

use crate::config;
use crate::state::session;

/// Failure of an API call, as exposed to route components.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response; `message` is the server payload stringified verbatim.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// 2xx response whose body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// 401-class failures invalidate the session.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

/// Either server shape for list endpoints: a bare array or a paginated
/// envelope. Callers only ever see the normalized `Vec`.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Bare(Vec<T>),
    Paginated {
        #[serde(default = "Vec::new")]
        results: Vec<T>,
    },
}

impl<T> ListPayload<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListPayload::Bare(items) => items,
            ListPayload::Paginated { results } => results,
        }
    }
}

/// Absolute URL for an API path (`path` starts with `/`).
pub fn endpoint(path: &str) -> String {
    format!("{}{}", config::api_base(), path)
}

/// Resolve a server-relative media path against the API host.
pub fn resolve_media_url(path: Option<&str>) -> Option<String> {
    resolve_media_url_with(&config::api_host(), path)
}

fn resolve_media_url_with(host: &str, path: Option<&str>) -> Option<String> {
    let path = path?.trim();
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http") {
        return Some(path.to_string());
    }
    if path.starts_with('/') {
        Some(format!("{}{}", host, path))
    } else {
        Some(format!("{}/{}", host, path))
    }
}

/// Attach the bearer credential when a persisted session holds a token.
/// Without one the request simply goes out unauthenticated; the server is
/// the source of truth for authorization failures.
fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match session::read_persisted().token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.text().await {
        Ok(text) => stringify_error_payload(&text),
        Err(_) => "Unknown error".to_string(),
    };
    ApiError::Http { status, message }
}

/// Flatten a server error payload (plain string, `{"detail": …}` or a
/// field→messages map) into one displayable line.
fn stringify_error_payload(text: &str) -> String {
    let value: serde_json::Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(_) => {
            return if text.trim().is_empty() {
                "Unknown error".to_string()
            } else {
                text.trim().to_string()
            }
        }
    };
    stringify_error_value(&value)
}

fn stringify_error_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(stringify_error_value)
            .collect::<Vec<_>>()
            .join(" "),
        serde_json::Value::Object(map) => {
            if let Some(serde_json::Value::String(detail)) = map.get("detail") {
                return detail.clone();
            }
            if let Some(serde_json::Value::String(error)) = map.get("error") {
                return error.clone();
            }
            map.iter()
                .map(|(field, messages)| format!("{}: {}", field, stringify_error_value(messages)))
                .collect::<Vec<_>>()
                .join("; ")
        }
        other => other.to_string(),
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = authorized(Request::get(&endpoint(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// Fetch a list endpoint and normalize either server shape into a `Vec`.
pub async fn get_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    let payload: ListPayload<T> = get_json(path).await?;
    Ok(payload.into_vec())
}

pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = authorized(Request::post(&endpoint(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

pub async fn patch_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = authorized(Request::patch(&endpoint(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// POST a multipart body (any endpoint accepting a file).
pub async fn post_form<T: DeserializeOwned>(path: &str, form: FormData) -> Result<T, ApiError> {
    let request = authorized(Request::post(&endpoint(path)))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// PATCH a multipart body.
pub async fn patch_form<T: DeserializeOwned>(path: &str, form: FormData) -> Result<T, ApiError> {
    let request = authorized(Request::patch(&endpoint(path)))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// POST with no body, expecting a JSON response.
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = authorized(Request::post(&endpoint(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// POST with no body, for 204-style action endpoints.
pub async fn post_no_content(path: &str) -> Result<(), ApiError> {
    let response = authorized(Request::post(&endpoint(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}

/// DELETE, for 204-style endpoints.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = authorized(Request::delete(&endpoint(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_bare_array_passes_through_verbatim() {
        let payload: ListPayload<Item> =
            serde_json::from_str(r#"[{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(payload.into_vec(), vec![Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn test_envelope_unwraps_to_inner_results() {
        let payload: ListPayload<Item> =
            serde_json::from_str(r#"{"count":2,"results":[{"id":1},{"id":2}]}"#).unwrap();
        assert_eq!(payload.into_vec(), vec![Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn test_envelope_without_results_is_empty() {
        let payload: ListPayload<Item> = serde_json::from_str(r#"{"count":0}"#).unwrap();
        assert!(payload.into_vec().is_empty());
    }

    #[test]
    fn test_stringify_plain_string_payload() {
        assert_eq!(stringify_error_payload(r#""Bad credentials""#), "Bad credentials");
        assert_eq!(stringify_error_payload("plain text"), "plain text");
    }

    #[test]
    fn test_stringify_detail_payload() {
        assert_eq!(
            stringify_error_payload(r#"{"detail":"Token expired"}"#),
            "Token expired"
        );
    }

    #[test]
    fn test_stringify_field_errors() {
        let msg = stringify_error_payload(r#"{"username":["This field is required."]}"#);
        assert_eq!(msg, "username: This field is required.");
    }

    #[test]
    fn test_resolve_media_url_variants() {
        let host = "http://localhost:8000";
        assert_eq!(resolve_media_url_with(host, None), None);
        assert_eq!(resolve_media_url_with(host, Some("")), None);
        assert_eq!(
            resolve_media_url_with(host, Some("https://cdn.example/a.png")),
            Some("https://cdn.example/a.png".to_string())
        );
        assert_eq!(
            resolve_media_url_with(host, Some("/media/a.png")),
            Some("http://localhost:8000/media/a.png".to_string())
        );
        assert_eq!(
            resolve_media_url_with(host, Some("media/a.png")),
            Some("http://localhost:8000/media/a.png".to_string())
        );
    }

    #[test]
    fn test_auth_failure_classification() {
        let unauthorized = ApiError::Http { status: 401, message: "nope".into() };
        let server_err = ApiError::Http { status: 500, message: "boom".into() };
        assert!(unauthorized.is_auth_failure());
        assert!(!server_err.is_auth_failure());
        assert!(!ApiError::Network("offline".into()).is_auth_failure());
    }
}
