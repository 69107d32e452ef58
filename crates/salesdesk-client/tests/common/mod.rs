//! Shared fixtures: a scripted transport and signed-in sessions.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use salesdesk_client::session::encode_unsigned_token;
use salesdesk_client::{
    ApiClient, HttpMethod, HttpRequest, HttpResponse, HttpTransport, MemoryStore, Session,
    TokenClaims,
};
use salesdesk_core::config::{ApiConfig, SessionConfig};
use salesdesk_core::errors::TransportError;
use salesdesk_core::Role;

pub const BASE_URL: &str = "http://api.test";

/// Replays canned responses keyed by method and path; records every request.
/// Unscripted routes answer 404.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<(&'static str, String), VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, method: HttpMethod, path: &str, status: u16, body: &str) -> Self {
        self.push(
            method,
            path,
            Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
        )
    }

    pub fn fail(self, method: HttpMethod, path: &str, error: TransportError) -> Self {
        self.push(method, path, Err(error))
    }

    fn push(self, method: HttpMethod, path: &str, result: Result<HttpResponse, TransportError>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .entry((method.as_str(), path.to_string()))
            .or_default()
            .push_back(result);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: HttpMethod, path: &str) -> usize {
        let url = format!("{BASE_URL}{path}");
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }
}

impl HttpTransport for ScriptedTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        let path = request.url.trim_start_matches(BASE_URL).to_string();
        let mut routes = self.routes.lock().unwrap();
        let queue = routes.get_mut(&(request.method.as_str(), path));
        match queue.and_then(|q| if q.len() > 1 { q.pop_front() } else { q.front().map(clone_result) }) {
            Some(result) => result,
            None => Ok(HttpResponse {
                status: 404,
                body: r#"{"detail": "Not Found"}"#.to_string(),
            }),
        }
    }
}

fn clone_result(result: &Result<HttpResponse, TransportError>) -> Result<HttpResponse, TransportError> {
    match result {
        Ok(response) => Ok(response.clone()),
        Err(TransportError::Timeout) => Err(TransportError::Timeout),
        Err(e) => Err(TransportError::Request {
            message: e.to_string(),
        }),
    }
}

pub fn api_config() -> ApiConfig {
    ApiConfig {
        base_url: Some(BASE_URL.to_string()),
        ..Default::default()
    }
}

pub fn token_for(role: Role) -> String {
    encode_unsigned_token(&TokenClaims {
        sub: Some("42".to_string()),
        email: Some("rep@example.com".to_string()),
        role,
        tenant_id: Some("7".to_string()),
        iat: chrono::Utc::now().timestamp(),
        exp: chrono::Utc::now().timestamp() + 3600,
    })
}

pub fn session_as(role: Option<Role>) -> Arc<Session> {
    let session = Session::new(Arc::new(MemoryStore::new()), &SessionConfig::default());
    if let Some(role) = role {
        session.sign_in(&token_for(role)).unwrap();
    }
    Arc::new(session)
}

pub fn client(transport: ScriptedTransport, role: Option<Role>) -> ApiClient<ScriptedTransport> {
    ApiClient::new(transport, session_as(role), &api_config())
}

pub const SETTINGS_BODY: &str = r#"{
    "plan_features": {"calendar_enabled": true, "search_enabled": true, "metrics_enabled": false},
    "team_features": {"search_enabled": false},
    "final_features": {"calendar_enabled": true, "search_enabled": false, "metrics_enabled": false},
    "plan_name": "Growth",
    "can_edit": true
}"#;
