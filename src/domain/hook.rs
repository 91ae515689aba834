//! GitHub webhook wire types.
//!
//! See <https://docs.github.com/rest/repos/webhooks#create-a-repository-webhook>.

use serde::{Deserialize, Serialize};

use super::config::HookSettings;

/// Hook name GitHub requires for repository webhooks.
pub const HOOK_NAME: &str = "web";
const CONTENT_TYPE_JSON: &str = "json";
const VERIFY_SSL: &str = "0";

/// Delivery settings of a webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookDeliveryConfig {
    pub url: String,
    pub content_type: String,
    pub insecure_ssl: String,
    pub secret: String,
}

/// Body of a create-hook request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateHookRequest {
    pub config: HookDeliveryConfig,
    pub events: Vec<String>,
    pub name: String,
}

impl CreateHookRequest {
    pub fn from_settings(settings: &HookSettings) -> Self {
        Self {
            config: HookDeliveryConfig {
                url: settings.url.clone(),
                content_type: CONTENT_TYPE_JSON.to_string(),
                insecure_ssl: VERIFY_SSL.to_string(),
                secret: settings.secret.clone(),
            },
            events: settings.events.clone(),
            name: HOOK_NAME.to_string(),
        }
    }
}

/// A webhook as reported by the API. Only `id` is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hook {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub config: HookConfigView,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HookConfigView {
    #[serde(default)]
    pub url: Option<String>,
}
