use crate::{IconError, icon::IconKind};

use std::{fmt, panic::Location, str::FromStr};

use error_location::ErrorLocation;

/// Number of frames in the busy animation.
pub const BUSY_FRAME_COUNT: usize = 5;

/// Static 128x128 icon written to disk for OS notification APIs.
///
/// Theme independent: notification daemons render it on their own background.
pub const NOTIFY_ICON: &[u8] = include_bytes!("../../resources/icons/notify.png");

/// Built-in visual style of the status icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Dark glyphs for light panels.
    Light,
    /// Light glyphs for dark panels.
    Dark,
}

/// Icon blobs bound to one [`Theme`].
///
/// All blobs are PNG images embedded at compile time via `include_bytes!`,
/// so the set is immutable and `'static`.
#[derive(Debug, PartialEq, Eq)]
pub struct AssetSet {
    /// Busy animation frames, presented in order.
    pub busy: [&'static [u8]; BUSY_FRAME_COUNT],
    /// Shown while idle.
    pub idle: &'static [u8],
    /// Shown while paused or when no daemon status is known.
    pub pause: &'static [u8],
    /// Shown for any status outside the known vocabulary.
    pub error: &'static [u8],
}

static LIGHT: AssetSet = AssetSet {
    busy: [
        include_bytes!("../../resources/icons/light/busy1.png"),
        include_bytes!("../../resources/icons/light/busy2.png"),
        include_bytes!("../../resources/icons/light/busy3.png"),
        include_bytes!("../../resources/icons/light/busy4.png"),
        include_bytes!("../../resources/icons/light/busy5.png"),
    ],
    idle: include_bytes!("../../resources/icons/light/idle.png"),
    pause: include_bytes!("../../resources/icons/light/pause.png"),
    error: include_bytes!("../../resources/icons/light/error.png"),
};

static DARK: AssetSet = AssetSet {
    busy: [
        include_bytes!("../../resources/icons/dark/busy1.png"),
        include_bytes!("../../resources/icons/dark/busy2.png"),
        include_bytes!("../../resources/icons/dark/busy3.png"),
        include_bytes!("../../resources/icons/dark/busy4.png"),
        include_bytes!("../../resources/icons/dark/busy5.png"),
    ],
    idle: include_bytes!("../../resources/icons/dark/idle.png"),
    pause: include_bytes!("../../resources/icons/dark/pause.png"),
    error: include_bytes!("../../resources/icons/dark/error.png"),
};

impl Theme {
    /// All built-in themes.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// The asset set bound to this theme.
    pub fn assets(self) -> &'static AssetSet {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    /// Lower-case theme name as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = IconError;

    #[track_caller]
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(IconError::InvalidTheme {
                name: name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl AssetSet {
    /// Bytes to present for `kind`. `frame` only matters for [`IconKind::Busy`]
    /// and is taken modulo [`BUSY_FRAME_COUNT`].
    pub fn icon(&self, kind: IconKind, frame: usize) -> &'static [u8] {
        match kind {
            IconKind::Busy => self.busy[frame % BUSY_FRAME_COUNT],
            IconKind::Idle => self.idle,
            IconKind::Pause => self.pause,
            IconKind::Error => self.error,
        }
    }
}
