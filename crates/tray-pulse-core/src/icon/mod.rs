mod animator;
mod status;
mod theme;

pub use {
    animator::{ANIMATION_INTERVAL, PresentFn, StatusIconAnimator},
    status::{IconKind, Status},
    theme::{AssetSet, BUSY_FRAME_COUNT, NOTIFY_ICON, Theme},
};
