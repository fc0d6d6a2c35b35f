use crate::config::default_theme;

use serde::{Deserialize, Serialize};

/// Icon appearance configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Built-in icon theme, `"light"` or `"dark"`.
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}
