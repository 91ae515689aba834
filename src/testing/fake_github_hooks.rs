use std::sync::Mutex;

use crate::domain::{AppError, CreateHookRequest, Hook, HookConfigView};
use crate::ports::GitHubHooks;

/// Calls observed by [`FakeGitHubHooks`], in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookCall {
    Create(CreateHookRequest),
    List,
    Delete(u64),
}

#[derive(Default)]
pub struct FakeGitHubHooks {
    pub calls: Mutex<Vec<HookCall>>,
    pub hooks: Mutex<Vec<Hook>>,
    pub fail_create: Mutex<Option<String>>,
    pub fail_list: Mutex<Option<String>>,
    pub fail_delete_id: Mutex<Option<u64>>,
}

impl FakeGitHubHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hook_ids(ids: &[u64]) -> Self {
        let fake = Self::new();
        *fake.hooks.lock().unwrap() = ids.iter().map(|id| hook(*id)).collect();
        fake
    }

    pub fn set_fail_create(&self, message: &str) {
        *self.fail_create.lock().unwrap() = Some(message.to_string());
    }

    pub fn set_fail_list(&self, message: &str) {
        *self.fail_list.lock().unwrap() = Some(message.to_string());
    }

    pub fn set_fail_delete(&self, id: u64) {
        *self.fail_delete_id.lock().unwrap() = Some(id);
    }

    pub fn get_calls(&self) -> Vec<HookCall> {
        self.calls.lock().unwrap().clone()
    }
}

fn hook(id: u64) -> Hook {
    Hook {
        id,
        name: Some("web".to_string()),
        active: Some(true),
        events: vec!["push".to_string()],
        config: HookConfigView { url: Some(format!("https://hooks.example.com/{}", id)) },
    }
}

fn api_error(message: String, status: u16) -> AppError {
    AppError::GitHubApi { message, status: Some(status) }
}

impl GitHubHooks for FakeGitHubHooks {
    fn create_hook(&self, request: &CreateHookRequest) -> Result<Hook, AppError> {
        self.calls.lock().unwrap().push(HookCall::Create(request.clone()));
        if let Some(message) = self.fail_create.lock().unwrap().clone() {
            return Err(api_error(message, 422));
        }
        let mut hooks = self.hooks.lock().unwrap();
        let created = Hook { events: request.events.clone(), ..hook(hooks.len() as u64 + 1) };
        hooks.push(created.clone());
        Ok(created)
    }

    fn list_hooks(&self) -> Result<Vec<Hook>, AppError> {
        self.calls.lock().unwrap().push(HookCall::List);
        if let Some(message) = self.fail_list.lock().unwrap().clone() {
            return Err(api_error(message, 404));
        }
        Ok(self.hooks.lock().unwrap().clone())
    }

    fn delete_hook(&self, id: u64) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(HookCall::Delete(id));
        if *self.fail_delete_id.lock().unwrap() == Some(id) {
            return Err(api_error("Not Found".to_string(), 404));
        }
        self.hooks.lock().unwrap().retain(|h| h.id != id);
        Ok(())
    }
}
