//! Mirrors presented icons to a file.
//!
//! Status bars that can only watch an image file (waybar, polybar, conky)
//! pick up every icon change from here.

use crate::AppResult;

use std::path::{Path, PathBuf};

use tokio::sync::mpsc;
use tracing::{debug, error, instrument};

/// Writes presented icons to a fixed path.
#[derive(Debug, Clone)]
pub struct IconMirror {
    path: PathBuf,
}

impl IconMirror {
    /// Mirror icons into `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the mirror file with `png`.
    ///
    /// Writes next to the target and renames, so readers never see a
    /// half-written image.
    pub async fn write(&self, png: &[u8]) -> AppResult<()> {
        let temp_path = self.path.with_extension("png.tmp");
        tokio::fs::write(&temp_path, png).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}

/// Drain presented icons until the animator drops its sender.
///
/// When several icons queued up while a write was in flight, only the newest
/// one is written.
#[instrument(skip_all)]
pub(crate) async fn present_icons(
    mut icon_rx: mpsc::UnboundedReceiver<&'static [u8]>,
    mirror: Option<IconMirror>,
) {
    while let Some(mut png) = icon_rx.recv().await {
        let mut skipped = 0usize;
        while let Ok(newer) = icon_rx.try_recv() {
            png = newer;
            skipped += 1;
        }

        debug!(bytes = png.len(), skipped, "Icon presented");

        if let Some(mirror) = &mirror {
            if let Err(e) = mirror.write(png).await {
                error!(path = ?mirror.path(), error = ?e, "Failed to mirror icon");
            }
        }
    }

    debug!("Icon presenter stopped");
}
