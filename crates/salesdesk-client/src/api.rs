//! ApiClient: authenticated JSON requests against the dashboard backend.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use salesdesk_core::config::ApiConfig;
use salesdesk_core::errors::ApiError;
use salesdesk_core::SalesdeskConfig;

use crate::session::Session;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// REST client. `Sync`, so one instance can serve concurrent widget loads.
///
/// Every request carries the session's bearer token. A 401 clears the
/// session and yields [`ApiError::Unauthorized`] with the login path; the
/// UI layer performs the redirect.
pub struct ApiClient<T = ReqwestTransport> {
    transport: T,
    session: Arc<Session>,
    base_url: String,
    login_path: String,
}

impl ApiClient<ReqwestTransport> {
    pub fn from_config(config: &SalesdeskConfig, session: Arc<Session>) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::from_config(&config.api)?;
        Ok(Self::new(transport, session, &config.api))
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T, session: Arc<Session>, config: &ApiConfig) -> Self {
        Self {
            transport,
            session,
            base_url: config.effective_base_url().to_string(),
            login_path: config.effective_login_path().to_string(),
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(HttpMethod::Get, path, None)
    }

    pub fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        self.request(HttpMethod::Post, path, Some(encode_body(body)?))
    }

    pub fn put<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        self.request(HttpMethod::Put, path, Some(encode_body(body)?))
    }

    pub fn patch<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        self.request(HttpMethod::Patch, path, Some(encode_body(body)?))
    }

    pub fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(HttpMethod::Delete, path, None)
    }

    fn request<R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<R, ApiError> {
        let request_id = Uuid::new_v4().to_string();
        let mut headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            (REQUEST_ID_HEADER.to_string(), request_id.clone()),
        ];
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        let request = HttpRequest {
            method,
            url: self.url(path),
            headers,
            body,
        };
        debug!(method = method.as_str(), path, request_id = %request_id, "api request");

        let response = self.transport.send(&request).map_err(|e| {
            warn!(method = method.as_str(), path, error = %e, "api transport failure");
            ApiError::from(e)
        })?;
        self.handle_response(method, path, response)
    }

    fn handle_response<R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        response: HttpResponse,
    ) -> Result<R, ApiError> {
        if response.is_success() {
            let body = if response.body.trim().is_empty() {
                "null"
            } else {
                response.body.as_str()
            };
            return serde_json::from_str(body).map_err(|e| ApiError::Decode {
                message: format!("{} {path}: {e}", method.as_str()),
            });
        }

        let detail = extract_detail(&response.body);
        warn!(
            method = method.as_str(),
            path,
            status = response.status,
            detail = detail.as_deref().unwrap_or(""),
            "api request failed"
        );
        match response.status {
            401 => {
                if let Err(e) = self.session.sign_out() {
                    warn!(error = %e, "failed to remove stored token after 401");
                }
                Err(ApiError::Unauthorized {
                    redirect_to: self.login_path.clone(),
                })
            }
            403 => Err(ApiError::Forbidden { detail }),
            404 => Err(ApiError::NotFound {
                path: path.to_string(),
            }),
            status => Err(ApiError::Status { status, detail }),
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode {
        message: format!("cannot encode request body: {e}"),
    })
}

/// Pull the human-readable message out of an error body.
///
/// Understands `{"detail": "..."}` and validation lists of the form
/// `{"detail": [{"msg": "..."}]}`; falls back to `message` / `error`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let text = match value.get("detail") {
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(serde_json::Value::Array(items)) => items
            .first()
            .and_then(|item| item.get("msg"))
            .and_then(|m| m.as_str())
            .map(str::to_string),
        _ => ["message", "error"]
            .iter()
            .find_map(|k| value.get(*k).and_then(|v| v.as_str()))
            .map(str::to_string),
    };
    text.filter(|t| !t.trim().is_empty())
}
