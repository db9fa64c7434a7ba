//! Resolved launch record data structures

use serde::{Deserialize, Serialize};

/// Root structure of the resolved launch record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub node: Vec<NodeRecord>,
}

impl LaunchRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// One resolved node invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub executable: String,
    pub package: Option<String>,
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub output: Option<String>,
    pub params: Vec<(String, String)>,
    pub remaps: Vec<(String, String)>,
    pub cmd: Vec<String>,
}
