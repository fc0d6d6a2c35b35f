//! Tray-Pulse: headless host for the animated status icon.
//!
//! Reads status and theme commands line by line on standard input, drives the
//! status icon animator and optionally mirrors each presented icon to a file.

mod app;
mod command_reader;
mod config;
mod error;
mod host_command;
mod icon_mirror;

pub(crate) use {
    app::App,
    error::{AppError, Result as AppResult},
    host_command::HostCommand,
    icon_mirror::IconMirror,
};

use crate::config::Config;

use std::time::Duration;

use tracing::error;
use tracing_subscriber::EnvFilter;

/// Application entry point.
fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tray_pulse=debug,tray_pulse_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    let result = rt.block_on(App { config }.run());

    // The stdin reader may still be parked in a blocking read.
    rt.shutdown_timeout(Duration::from_millis(500));

    if let Err(e) = result {
        error!(error = ?e, "App error");
        std::process::exit(1);
    }
}
