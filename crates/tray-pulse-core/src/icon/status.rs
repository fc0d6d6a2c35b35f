use std::{convert::Infallible, fmt, str::FromStr};

/// Logical application state communicated by the icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    /// Work in progress (`"busy"`). Animated.
    Busy,
    /// Indexing in progress (`"index"`). Animated, same frames as busy.
    Index,
    /// Nothing to do (`"idle"`).
    Idle,
    /// No state known yet (`"none"`).
    None,
    /// Stopped by the user (`"paused"`).
    Paused,
    /// Anything else. Rendered with the error icon.
    Unrecognized(String),
}

/// Which asset of a theme a status renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// Current busy animation frame.
    Busy,
    /// Idle icon.
    Idle,
    /// Pause icon.
    Pause,
    /// Error icon.
    Error,
}

impl Status {
    /// Parse a status word. Never fails: unknown words become
    /// [`Status::Unrecognized`].
    pub fn parse(word: &str) -> Self {
        match word {
            "busy" => Status::Busy,
            "index" => Status::Index,
            "idle" => Status::Idle,
            "none" => Status::None,
            "paused" => Status::Paused,
            other => Status::Unrecognized(other.to_string()),
        }
    }

    /// Whether the busy animation runs in this status.
    pub fn is_animated(&self) -> bool {
        matches!(self, Status::Busy | Status::Index)
    }

    /// Asset used to render this status.
    pub fn icon_kind(&self) -> IconKind {
        match self {
            Status::Busy | Status::Index => IconKind::Busy,
            Status::Idle => IconKind::Idle,
            Status::None | Status::Paused => IconKind::Pause,
            Status::Unrecognized(_) => IconKind::Error,
        }
    }

    /// The status word this value was parsed from.
    pub fn as_str(&self) -> &str {
        match self {
            Status::Busy => "busy",
            Status::Index => "index",
            Status::Idle => "idle",
            Status::None => "none",
            Status::Paused => "paused",
            Status::Unrecognized(word) => word,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Infallible;

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        Ok(Status::parse(word))
    }
}

impl From<&str> for Status {
    fn from(word: &str) -> Self {
        Status::parse(word)
    }
}
