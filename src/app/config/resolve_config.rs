//! Configuration resolution from flags, environment and git.

use crate::domain::{
    AppError, DEFAULT_GITHUB_ENDPOINT, WebhookConfig, parse_event_list, parse_remote_url,
    strip_remote_credentials,
};
use crate::ports::GitRemote;

pub const GITHUB_ENDPOINT_ENV: &str = "GITHUB_ENDPOINT";
pub const GITHUB_OWNER_ENV: &str = "GITHUB_OWNER";
pub const GITHUB_REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";
pub const TOKEN_ENVS: [&str; 2] = ["WEBHOOK_GITHUB_TOKEN", "GITHUB_TOKEN"];
pub const WEBHOOK_ENDPOINT_ENV: &str = "WEBHOOK_ENDPOINT";
pub const WEBHOOK_SECRET_ENV: &str = "WEBHOOK_SECRET";
pub const WEBHOOK_EVENTS_ENV: &str = "WEBHOOK_EVENTS";

/// Values supplied on the command line. `None` falls back to the environment.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConfigInputs {
    pub github: Option<String>,
    pub owner: Option<String>,
    pub repository: Option<String>,
    pub token: Option<String>,
    pub endpoint: Option<String>,
    pub secret: Option<String>,
    pub events: Option<String>,
    pub purge: bool,
}

impl std::fmt::Debug for ConfigInputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigInputs")
            .field("github", &self.github)
            .field("owner", &self.owner)
            .field("repository", &self.repository)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("endpoint", &self.endpoint)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("events", &self.events)
            .field("purge", &self.purge)
            .finish()
    }
}

/// Environment lookup backed by the current process.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Build a [`WebhookConfig`] from flags, then environment, then defaults.
///
/// Empty values count as absent. When neither owner nor repository is given they are
/// read from the `origin` remote; giving only one of them is an error.
pub fn resolve_config<E>(
    inputs: &ConfigInputs,
    env: E,
    git: &(impl GitRemote + ?Sized),
) -> Result<WebhookConfig, AppError>
where
    E: Fn(&str) -> Option<String>,
{
    let pick = |flag: &Option<String>, keys: &[&str]| -> Option<String> {
        non_empty(flag.clone()).or_else(|| keys.iter().copied().find_map(|key| non_empty(env(key))))
    };

    let mut config = WebhookConfig {
        github_endpoint: pick(&inputs.github, &[GITHUB_ENDPOINT_ENV])
            .unwrap_or_else(|| DEFAULT_GITHUB_ENDPOINT.to_string()),
        github_owner: pick(&inputs.owner, &[GITHUB_OWNER_ENV]),
        github_repository: pick(&inputs.repository, &[GITHUB_REPOSITORY_ENV]),
        github_token: pick(&inputs.token, &TOKEN_ENVS),
        hook_endpoint: pick(&inputs.endpoint, &[WEBHOOK_ENDPOINT_ENV]),
        hook_secret: pick(&inputs.secret, &[WEBHOOK_SECRET_ENV]),
        hook_events: parse_event_list(
            &pick(&inputs.events, &[WEBHOOK_EVENTS_ENV]).unwrap_or_default(),
        ),
        purge: inputs.purge,
    };

    match (&config.github_owner, &config.github_repository) {
        (None, None) => {
            tracing::debug!("reading owner/repo from git");
            let url = git.origin_url()?;
            let repo = parse_remote_url(&url)
                .ok_or_else(|| AppError::UnrecognizedRemoteUrl(strip_remote_credentials(&url)))?;
            tracing::debug!(owner = %repo.owner, repository = %repo.repository, "found owner/repo");
            config.github_owner = Some(repo.owner);
            config.github_repository = Some(repo.repository);
        }
        (Some(_), Some(_)) => {}
        _ => return Err(AppError::OwnerRepositoryMismatch),
    }

    tracing::debug!(
        github_endpoint = %config.github_endpoint,
        events = ?config.hook_events,
        purge = config.purge,
        "config resolved"
    );
    Ok(config)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
