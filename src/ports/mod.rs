mod git_remote;
mod github_hooks;

pub use git_remote::GitRemote;
pub use github_hooks::GitHubHooks;
