// SPDX-License-Identifier: MPL-2.0
//! Theme tokens and the scoped styling context.
//!
//! An [`AppTheme`] is built once per process and never patched: switching
//! modes replaces it wholesale. Views never read it directly; they receive a
//! [`ThemeScope`] from [`AppTheme::provide`], valid only for the duration of
//! the closure that composes their subtree.

use crate::ui::design_tokens::{palette, typography};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub background: Color,
    pub surface: Color,
    /// Text drawn on top of `background`.
    pub on_background: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: palette::WHITE,
            surface: palette::WHITE,
            on_background: palette::BLACK,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::GRAY_950,
            surface: palette::GRAY_950,
            on_background: palette::WHITE,
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark() // Default to dark for Dark mode or on error
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

/// Process-wide theme.
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    pub text_size: f32,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self::with_colors(mode, colors)
    }

    #[must_use]
    pub fn with_colors(mode: ThemeMode, colors: ColorScheme) -> Self {
        Self {
            colors,
            mode,
            text_size: typography::BODY,
        }
    }

    /// Runs `compose` with the styling context of this theme.
    ///
    /// The scope borrows the theme and is dropped as soon as `compose`
    /// returns, so nothing composed outside the closure can observe it.
    pub fn provide<R>(&self, compose: impl FnOnce(&ThemeScope<'_>) -> R) -> R {
        let scope = ThemeScope { theme: self };
        compose(&scope)
    }

    /// Built-in Iced theme matching the brightness of the background.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if relative_luminance(self.colors.background) < 0.5 {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Rec. 709 luma of a color, in `0.0..=1.0`.
fn relative_luminance(color: Color) -> f32 {
    0.2126 * color.r + 0.7152 * color.g + 0.0722 * color.b
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

/// Read-only styling context handed to views.
#[derive(Debug, Clone, Copy)]
pub struct ThemeScope<'a> {
    theme: &'a AppTheme,
}

impl ThemeScope<'_> {
    #[must_use]
    pub fn background(&self) -> Color {
        self.theme.colors.background
    }

    #[must_use]
    pub fn surface(&self) -> Color {
        self.theme.colors.surface
    }

    #[must_use]
    pub fn text_color(&self) -> Color {
        self.theme.colors.on_background
    }

    #[must_use]
    pub fn text_size(&self) -> f32 {
        self.theme.text_size
    }
}
