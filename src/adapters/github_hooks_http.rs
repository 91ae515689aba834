//! GitHub webhook API client implementation using reqwest.

use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use crate::domain::{AppError, CreateHookRequest, GitHubTarget, Hook};
use crate::ports::GitHubHooks;

const JSON_MEDIA_TYPE: &str = "application/json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("webhookup/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for the repository hooks API.
///
/// Each call performs exactly one request; there is no retry.
#[derive(Clone)]
pub struct HttpGitHubHooks {
    target: GitHubTarget,
    client: Client,
}

impl std::fmt::Debug for HttpGitHubHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGitHubHooks").field("target", &self.target).finish()
    }
}

impl HttpGitHubHooks {
    /// Create a client bound to the given repository.
    pub fn new(target: GitHubTarget) -> Result<Self, AppError> {
        Self::with_timeout(target, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(target: GitHubTarget, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::HttpTransport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { target, client })
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .header(AUTHORIZATION, format!("token {}", self.target.token))
    }

    /// Send the request and return the body of a successful response.
    fn send(&self, request: RequestBuilder) -> Result<String, AppError> {
        let response = request
            .send()
            .map_err(|e| AppError::HttpTransport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.as_u16() >= 300 {
            let message = extract_error_message(&body_text).unwrap_or_else(|| {
                if !body_text.trim().is_empty() {
                    body_text.trim().to_string()
                } else {
                    format!("request failed with status {}", status)
                }
            });
            return Err(AppError::GitHubApi { message, status: Some(status.as_u16()) });
        }

        Ok(body_text)
    }

    fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &str,
    ) -> Result<T, AppError> {
        let body = self.send(request)?;
        serde_json::from_str(&body)
            .map_err(|e| AppError::ParseError { what: what.to_string(), details: e.to_string() })
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl GitHubHooks for HttpGitHubHooks {
    fn create_hook(&self, request: &CreateHookRequest) -> Result<Hook, AppError> {
        let url = self.target.hooks_url();
        tracing::trace!(%url, "POST");
        self.send_json(self.request(Method::POST, &url).json(request), "create hook response")
    }

    fn list_hooks(&self) -> Result<Vec<Hook>, AppError> {
        let url = self.target.hooks_url();
        tracing::trace!(%url, "GET");
        self.send_json(self.request(Method::GET, &url), "hook list")
    }

    fn delete_hook(&self, id: u64) -> Result<(), AppError> {
        let url = self.target.hook_url(id);
        tracing::trace!(%url, "DELETE");
        self.send(self.request(Method::DELETE, &url)).map(|_| ())
    }
}
