//! Webhook configuration record and validation.

use serde::Serialize;

use super::error::{AppError, SetupScope};
use super::remote::RepositoryRef;

/// GitHub API endpoint used when none is configured.
pub const DEFAULT_GITHUB_ENDPOINT: &str = "https://api.github.com";

const REDACTED: &str = "[REDACTED]";

/// Configuration assembled from flags, environment and git.
///
/// Fields are optional until validated for a specific operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub github_endpoint: String,
    pub github_owner: Option<String>,
    pub github_repository: Option<String>,
    pub github_token: Option<String>,
    pub hook_endpoint: Option<String>,
    pub hook_secret: Option<String>,
    pub hook_events: Vec<String>,
    pub purge: bool,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            github_endpoint: DEFAULT_GITHUB_ENDPOINT.to_string(),
            github_owner: None,
            github_repository: None,
            github_token: None,
            hook_endpoint: None,
            hook_secret: None,
            hook_events: Vec::new(),
            purge: false,
        }
    }
}

/// Validated GitHub coordinates for hook API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct GitHubTarget {
    pub endpoint: String,
    pub repository: RepositoryRef,
    pub token: String,
}

impl std::fmt::Debug for GitHubTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubTarget")
            .field("endpoint", &self.endpoint)
            .field("repository", &self.repository)
            .field("token", &REDACTED)
            .finish()
    }
}

impl GitHubTarget {
    /// `{endpoint}/repos/{owner}/{repo}/hooks`
    pub fn hooks_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/hooks",
            self.endpoint.trim_end_matches('/'),
            self.repository.owner,
            self.repository.repository
        )
    }

    pub fn hook_url(&self, id: u64) -> String {
        format!("{}/{}", self.hooks_url(), id)
    }
}

/// Validated settings for a new webhook.
#[derive(Clone, PartialEq, Eq)]
pub struct HookSettings {
    pub url: String,
    pub secret: String,
    pub events: Vec<String>,
}

impl std::fmt::Debug for HookSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookSettings")
            .field("url", &self.url)
            .field("secret", &REDACTED)
            .field("events", &self.events)
            .finish()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReceivedGitHub<'a> {
    github_endpoint: Option<&'a str>,
    github_owner: Option<&'a str>,
    github_repository: Option<&'a str>,
    github_token: Option<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReceivedHook<'a> {
    #[serde(flatten)]
    github: ReceivedGitHub<'a>,
    hook_endpoint: Option<&'a str>,
    hook_secret: Option<&'static str>,
    hook_events: &'a [String],
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn redacted(value: &Option<String>) -> Option<&'static str> {
    present(value).map(|_| REDACTED)
}

impl WebhookConfig {
    /// Validate the fields needed to talk to the hooks API.
    pub fn github_target(&self) -> Result<GitHubTarget, AppError> {
        tracing::debug!(scope = %SetupScope::GitHub, "validating config");
        self.try_github_target().ok_or_else(|| self.incomplete(SetupScope::GitHub))
    }

    /// Validate everything needed to create a webhook.
    pub fn hook_setup(&self) -> Result<(GitHubTarget, HookSettings), AppError> {
        tracing::debug!(scope = %SetupScope::Hook, "validating config");
        let target = self.try_github_target();
        let url = present(&self.hook_endpoint);
        let secret = present(&self.hook_secret);

        match (target, url, secret) {
            (Some(target), Some(url), Some(secret)) if !self.hook_events.is_empty() => {
                tracing::debug!("config OK");
                let settings = HookSettings {
                    url: url.to_string(),
                    secret: secret.to_string(),
                    events: self.hook_events.clone(),
                };
                Ok((target, settings))
            }
            _ => Err(self.incomplete(SetupScope::Hook)),
        }
    }

    /// Owner/repository pair, if both are set.
    pub fn repository(&self) -> Option<RepositoryRef> {
        Some(RepositoryRef::new(present(&self.github_owner)?, present(&self.github_repository)?))
    }

    fn try_github_target(&self) -> Option<GitHubTarget> {
        let endpoint = Some(self.github_endpoint.as_str()).filter(|e| !e.is_empty())?;
        Some(GitHubTarget {
            endpoint: endpoint.to_string(),
            repository: self.repository()?,
            token: present(&self.github_token)?.to_string(),
        })
    }

    fn received_github(&self) -> ReceivedGitHub<'_> {
        ReceivedGitHub {
            github_endpoint: Some(self.github_endpoint.as_str()).filter(|e| !e.is_empty()),
            github_owner: present(&self.github_owner),
            github_repository: present(&self.github_repository),
            github_token: redacted(&self.github_token),
        }
    }

    fn incomplete(&self, scope: SetupScope) -> AppError {
        let rendered = match scope {
            SetupScope::GitHub => serde_json::to_string_pretty(&self.received_github()),
            SetupScope::Hook => serde_json::to_string_pretty(&ReceivedHook {
                github: self.received_github(),
                hook_endpoint: present(&self.hook_endpoint),
                hook_secret: redacted(&self.hook_secret),
                hook_events: &self.hook_events,
            }),
        };
        let received = rendered
            .unwrap_or_else(|e| format!("<unrenderable config: {}>", e))
            .replace('\n', "\n\t");
        AppError::IncompleteSetup { scope, received }
    }
}
