pub mod config;
pub mod error;
pub mod events;
pub mod hook;
pub mod remote;

pub use config::{DEFAULT_GITHUB_ENDPOINT, GitHubTarget, HookSettings, WebhookConfig};
pub use error::{AppError, SetupScope};
pub use events::parse_event_list;
pub use hook::{CreateHookRequest, Hook, HookConfigView, HookDeliveryConfig};
pub use remote::{RepositoryRef, parse_remote_url, strip_remote_credentials};
