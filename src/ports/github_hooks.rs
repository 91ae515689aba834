//! GitHub webhook API port definition.

use crate::domain::{AppError, CreateHookRequest, Hook};

/// Port for repository webhook operations.
///
/// An implementation is bound to a single repository.
pub trait GitHubHooks {
    /// Create a webhook.
    fn create_hook(&self, request: &CreateHookRequest) -> Result<Hook, AppError>;

    /// List the repository's webhooks.
    fn list_hooks(&self) -> Result<Vec<Hook>, AppError>;

    /// Delete a webhook by id.
    fn delete_hook(&self, id: u64) -> Result<(), AppError>;
}
