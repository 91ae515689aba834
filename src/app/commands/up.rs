use crate::domain::{AppError, CreateHookRequest, GitHubTarget, Hook, HookSettings, RepositoryRef};
use crate::ports::GitHubHooks;

/// Result of creating a webhook.
#[derive(Debug, Clone)]
pub struct UpOutcome {
    pub repository: RepositoryRef,
    pub hook: Hook,
}

/// Create one webhook for the target repository.
pub fn execute(
    hooks: &impl GitHubHooks,
    target: &GitHubTarget,
    settings: &HookSettings,
) -> Result<UpOutcome, AppError> {
    let request = CreateHookRequest::from_settings(settings);
    let hook = hooks.create_hook(&request)?;
    tracing::info!(hook_id = hook.id, repository = %target.repository, "hook created successfully");

    Ok(UpOutcome { repository: target.repository.clone(), hook })
}
