//! webhookup: create or purge GitHub repository webhooks.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    PurgeOutcome, RunOutcome, UpOutcome, purge, resolve_config, resolve_config_at, run, up,
};
pub use app::config::ConfigInputs;
pub use domain::{AppError, WebhookConfig};
