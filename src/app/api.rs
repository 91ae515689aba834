//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration,
//! validation, adapters and command execution.

use std::path::PathBuf;

use crate::adapters::{GitConfigRemote, HttpGitHubHooks};
use crate::app::commands::{purge as purge_cmd, up as up_cmd};
use crate::app::config::{self, ConfigInputs};

pub use crate::app::commands::{PurgeOutcome, UpOutcome};
pub use crate::domain::{AppError, WebhookConfig};

/// Outcome of [`run`].
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Created(UpOutcome),
    Purged(PurgeOutcome),
}

/// Resolve configuration using the process environment and the git repository
/// enclosing the current directory.
pub fn resolve_config(inputs: &ConfigInputs) -> Result<WebhookConfig, AppError> {
    resolve_config_at(inputs, std::env::current_dir()?)
}

/// Resolve configuration using the process environment and the git repository
/// enclosing `path`.
pub fn resolve_config_at(
    inputs: &ConfigInputs,
    path: impl Into<PathBuf>,
) -> Result<WebhookConfig, AppError> {
    let git = GitConfigRemote::new(path.into());
    config::resolve_config(inputs, config::process_env, &git)
}

/// Create a webhook as described by `config`.
pub fn up(config: &WebhookConfig) -> Result<UpOutcome, AppError> {
    let (target, settings) = config.hook_setup()?;
    let hooks = HttpGitHubHooks::new(target.clone())?;
    up_cmd::execute(&hooks, &target, &settings)
}

/// Delete every webhook of the repository described by `config`.
pub fn purge(config: &WebhookConfig) -> Result<PurgeOutcome, AppError> {
    let target = config.github_target()?;
    let hooks = HttpGitHubHooks::new(target.clone())?;
    purge_cmd::execute(&hooks, &target)
}

/// Purge when `config.purge` is set, otherwise create a webhook.
pub fn run(config: &WebhookConfig) -> Result<RunOutcome, AppError> {
    if config.purge {
        purge(config).map(RunOutcome::Purged)
    } else {
        up(config).map(RunOutcome::Created)
    }
}
