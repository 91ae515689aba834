pub mod git_config_remote;
pub mod github_hooks_http;

pub use git_config_remote::GitConfigRemote;
pub use github_hooks_http::HttpGitHubHooks;
