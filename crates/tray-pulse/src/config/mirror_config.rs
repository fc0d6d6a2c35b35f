use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where presented icons are mirrored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// File replaced with every presented icon. Disabled when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}
