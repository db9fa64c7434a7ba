//! Launch context for managing configurations

use std::collections::HashMap;

/// Launch context holding resolved configurations for one invocation.
///
/// The context is seeded with caller overrides before any declaration is
/// applied; declarations never overwrite a value that is already present.
#[derive(Debug, Clone, Default)]
pub struct LaunchContext {
    configurations: HashMap<String, String>,
}

impl LaunchContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_configuration(&mut self, name: String, value: String) {
        self.configurations.insert(name, value);
    }

    pub fn get_configuration(&self, name: &str) -> Option<String> {
        self.configurations.get(name).cloned()
    }

    pub fn has_configuration(&self, name: &str) -> bool {
        self.configurations.contains_key(name)
    }

    pub fn configurations(&self) -> &HashMap<String, String> {
        &self.configurations
    }
}
