// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The window was created and the root view mounted.
    Activated,
    /// Periodic tick used to follow OS locale and theme changes.
    Tick(Instant),
    /// The OS reported this locale (raw, as returned by the platform).
    SystemLocaleDetected(Option<String>),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 or Android qualifier form (e.g. `pl`, `en-rGB`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `GREETING_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional preview to open instead of the regular window.
    pub preview: Option<&'static crate::ui::preview::PreviewConfig>,
}
