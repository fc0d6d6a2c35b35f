//! Tray-pulse Core Library
//!
//! Thread-safe status icon animator: maps an application status to a themed
//! icon and animates the busy state on a background ticker. The host supplies
//! a callback that puts the icon bytes on screen.
//!
//! # Example
//!
//! ```no_run
//! use tray_pulse_core::{CoreResult, StatusIconAnimator};
//!
//! use std::{thread::sleep, time::Duration};
//!
//! fn main() -> CoreResult<()> {
//!     let icon = StatusIconAnimator::new("dark", |png: &'static [u8]| {
//!         println!("present {} bytes", png.len());
//!     })?;
//!
//!     icon.set("busy");
//!     sleep(Duration::from_secs(2));
//!     icon.set("idle");
//!
//!     icon.cleanup()
//! }
//! ```

mod error;
mod icon;

pub use {
    error::IconError,
    error::Result as CoreResult,
    icon::{
        ANIMATION_INTERVAL, AssetSet, BUSY_FRAME_COUNT, IconKind, NOTIFY_ICON, PresentFn, Status,
        StatusIconAnimator, Theme,
    },
};

#[cfg(test)]
mod tests;
