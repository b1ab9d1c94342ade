//! Session store configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Path of the single-slot session file. Empty means the default
    /// location (`~/.trusthire/session.json`).
    #[serde(default)]
    pub store_path: String,
}

impl SessionConfig {
    /// The configured path, if one was set.
    #[must_use]
    pub fn store_path(&self) -> Option<&str> {
        if self.store_path.is_empty() {
            None
        } else {
            Some(&self.store_path)
        }
    }
}
