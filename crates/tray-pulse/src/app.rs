use crate::{AppResult, HostCommand, IconMirror, command_reader, config::Config, icon_mirror};

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{error, info, instrument, warn};
use tray_pulse_core::StatusIconAnimator;

/// Main application state.
///
/// Owns the status icon animator for the lifetime of the host. The animator
/// callback only forwards bytes over `icon_tx`, since it runs under the
/// animator lock; the presenter task does the actual work.
pub struct App {
    pub(crate) config: Config,
}

impl App {
    /// Run the host until `quit`, end of input or Ctrl-C.
    #[instrument(skip(self))]
    pub(crate) async fn run(self) -> AppResult<()> {
        info!("Tray-Pulse starting");

        let (icon_tx, icon_rx) = mpsc::unbounded_channel();
        let animator = StatusIconAnimator::new(&self.config.appearance.theme, move |png| {
            // Receiver only closes during shutdown.
            let _ = icon_tx.send(png);
        })?;

        info!(notify_icon = ?animator.notify_icon(), "Notification icon stored");

        let mirror = self.config.mirror.path.clone().map(IconMirror::new);
        let presenter = tokio::spawn(icon_mirror::present_icons(icon_rx, mirror));

        let (command_tx, mut command_rx) = mpsc::channel(32);
        // Not joined: a read on stdin cannot be cancelled and is left to
        // runtime shutdown.
        tokio::spawn(async move {
            if let Err(e) = command_reader::read_commands(tokio::io::stdin(), command_tx).await {
                error!(error = ?e, "Command reader error");
            }
        });

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                command = command_rx.recv() => {
                    match command {
                        Some(HostCommand::SetStatus(status)) => animator.set(status),
                        Some(HostCommand::SetTheme(name)) => {
                            if let Err(e) = animator.set_theme(&name) {
                                warn!(theme = %name, error = %e, "Theme not changed");
                            }
                        }
                        Some(HostCommand::Shutdown) => {
                            info!("Shutdown requested");
                            break;
                        }
                        None => {
                            info!("Input closed, shutting down");
                            break;
                        }
                    }
                }

                _ = &mut ctrl_c => {
                    info!("Interrupted, shutting down");
                    break;
                }
            }
        }

        let cleanup = animator.cleanup();
        // Dropping the animator drops the callback and closes the icon channel.
        drop(animator);

        match tokio::time::timeout(Duration::from_secs(1), presenter).await {
            Ok(Ok(())) => info!("Icon presenter stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Icon presenter task panicked"),
            Err(_) => warn!("Icon presenter did not stop within timeout"),
        }

        cleanup?;

        info!("Tray-Pulse shut down successfully");

        Ok(())
    }
}
