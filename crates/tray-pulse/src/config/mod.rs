mod appearance_config;
#[allow(clippy::module_inception)]
mod config;
mod mirror_config;

pub(crate) use {appearance_config::AppearanceConfig, config::Config, mirror_config::MirrorConfig};

pub(crate) const DEFAULT_THEME: &str = "light";

pub(crate) fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}
