use crate::domain::{AppError, GitHubTarget, RepositoryRef};
use crate::ports::GitHubHooks;

/// Result of deleting every webhook of a repository.
#[derive(Debug, Clone)]
pub struct PurgeOutcome {
    pub repository: RepositoryRef,
    pub deleted: Vec<u64>,
}

/// List the repository's webhooks and delete each one in order.
///
/// The first failed delete aborts the remaining deletes.
pub fn execute(hooks: &impl GitHubHooks, target: &GitHubTarget) -> Result<PurgeOutcome, AppError> {
    let existing = hooks.list_hooks()?;
    tracing::debug!(count = existing.len(), repository = %target.repository, "hooks listed");

    let mut deleted = Vec::with_capacity(existing.len());
    for hook in existing {
        tracing::debug!(hook_id = hook.id, uri = %target.hook_url(hook.id), "deleting hook");
        hooks.delete_hook(hook.id)?;
        deleted.push(hook.id);
    }

    tracing::info!(deleted = deleted.len(), repository = %target.repository, "purged");
    Ok(PurgeOutcome { repository: target.repository.clone(), deleted })
}
