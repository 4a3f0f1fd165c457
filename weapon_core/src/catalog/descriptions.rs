//! Cosmetic weapon descriptions, looked up by weapon name

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name → description table from a secondary source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Descriptions {
    #[serde(default)]
    descriptions: HashMap<String, String>,
}

impl Descriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.descriptions.insert(name.into(), description.into());
    }

    /// Description for a weapon, or `""` when there is none.
    /// Exact match first, then case-insensitive.
    pub fn lookup(&self, name: &str) -> &str {
        if let Some(description) = self.descriptions.get(name) {
            return description;
        }
        self.descriptions
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, description)| description.as_str())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}
