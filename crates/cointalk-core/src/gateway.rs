//! Generic authenticated gateway invoker.
//!
//! Every command executor and the currency resolver funnel through
//! [`GatewayClient::call`]: one place that joins the base address, attaches
//! the forwarded credential, applies the fixed per-call timeout, and turns
//! non-2xx statuses and transport failures into a [`GatewayError`]. No
//! retries happen at this layer; callers decide what a failure means.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde_json::Value;

use crate::http_client::{HttpAuth, HttpClient, HttpMethod, HttpRequest};

/// Classification of a failed gateway call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorKind {
    /// The request never produced a response (timeout, connect failure).
    Transport,
    /// The gateway answered with a non-2xx status.
    Status,
}

/// Structured error for a failed gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayError {
    kind: GatewayErrorKind,
    message: String,
    status: Option<u16>,
    body: Option<String>,
}

impl GatewayError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: GatewayErrorKind::Transport,
            message: message.into(),
            status: None,
            body: None,
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            kind: GatewayErrorKind::Status,
            message: format!("gateway returned status {status}"),
            status: Some(status),
            body: if body.trim().is_empty() {
                None
            } else {
                Some(body)
            },
        }
    }

    pub const fn kind(&self) -> GatewayErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn status_code(&self) -> Option<u16> {
        self.status
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.status, self.body.as_deref()) {
            (Some(status), Some(body)) => write!(f, "{} - {}", status, body),
            (Some(status), None) => write!(f, "{}", status),
            _ => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Successful gateway call: status plus the decoded JSON body.
///
/// Bodies that are empty or not valid JSON decode to `Value::Null`; the
/// wallet gateway answers JSON on every documented endpoint, so a lenient
/// decode keeps rendering code simple.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: Value,
}

/// Per-call timeout applied to every gateway request.
pub const GATEWAY_TIMEOUT_MS: u64 = 10_000;

/// Authenticated HTTP invoker for the external trading/wallet gateway.
#[derive(Clone)]
pub struct GatewayClient {
    base: String,
    http: Arc<dyn HttpClient>,
}

impl GatewayClient {
    pub fn new(base: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base, http }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Issue a single gateway call. `path` must start with `/`.
    pub async fn call(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
        auth: &HttpAuth,
    ) -> Result<GatewayResponse, GatewayError> {
        let url = format!("{}{}", self.base, path);
        let mut request = HttpRequest::new(method, url)
            .with_auth(auth)
            .with_timeout_ms(GATEWAY_TIMEOUT_MS);
        if let Some(body) = body {
            request = request.with_body(body.to_string());
        }

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| GatewayError::transport(e.message()))?;

        if !response.is_success() {
            return Err(GatewayError::status(response.status, response.body));
        }

        let body = serde_json::from_str(&response.body).unwrap_or(Value::Null);
        Ok(GatewayResponse {
            status: response.status,
            body,
        })
    }

    pub async fn get(&self, path: &str, auth: &HttpAuth) -> Result<GatewayResponse, GatewayError> {
        self.call(HttpMethod::Get, path, None, auth).await
    }

    pub async fn post_json(
        &self,
        path: &str,
        body: &Value,
        auth: &HttpAuth,
    ) -> Result<GatewayResponse, GatewayError> {
        self.call(HttpMethod::Post, path, Some(body), auth).await
    }
}
