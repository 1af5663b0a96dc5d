// SPDX-License-Identifier: MPL-2.0
//! Design-time previews of the greeting screen.
//!
//! Each preview pins a locale and renders the greeting without the rest of
//! the application shell. They are listed with `--list-previews` and opened
//! with `--preview <name|locale>`; tests render them headlessly.

use crate::i18n::{self, ResourceTable};
use crate::ui::design_tokens::spacing;
use crate::ui::greeting::{self, GreetingContext, Layout, Node};
use crate::ui::theming::AppTheme;
use unic_langid::LanguageIdentifier;

/// A named locale preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewConfig {
    pub name: &'static str,
    /// Locale in Android resource qualifier form.
    pub locale: &'static str,
    /// Paint the theme background behind the greeting.
    pub show_background: bool,
}

pub const PREVIEWS: [PreviewConfig; 4] = [
    PreviewConfig {
        name: "American English",
        locale: "en-rUS",
        show_background: true,
    },
    PreviewConfig {
        name: "British English",
        locale: "en-rGB",
        show_background: true,
    },
    PreviewConfig {
        name: "Polish",
        locale: "pl",
        show_background: true,
    },
    PreviewConfig {
        name: "Ukrainian",
        locale: "uk",
        show_background: true,
    },
];

impl PreviewConfig {
    /// The preview locale as a language identifier.
    pub fn language_id(&self) -> Result<LanguageIdentifier, crate::error::I18nError> {
        i18n::parse_locale(self.locale)
    }
}

/// Finds a preview by name (case-insensitive) or by locale in either form.
#[must_use]
pub fn find(query: &str) -> Option<&'static PreviewConfig> {
    let requested = i18n::parse_locale(query).ok();
    PREVIEWS.iter().find(|preview| {
        preview.name.eq_ignore_ascii_case(query)
            || requested
                .as_ref()
                .is_some_and(|locale| preview.language_id().ok().as_ref() == Some(locale))
    })
}

/// Renders `preview` with the default greeting layout.
pub fn render(
    preview: &PreviewConfig,
    theme: &AppTheme,
    strings: &ResourceTable,
) -> Result<Node, crate::error::I18nError> {
    let locale = preview.language_id()?;

    Ok(theme.provide(|scope| {
        let content = greeting::greeting(&GreetingContext {
            theme: scope,
            strings,
            locale: &locale,
            layout: Layout::default(),
        });

        if preview.show_background {
            greeting::background_surface(
                scope,
                Layout::shrink().padding(spacing::XS),
                content,
            )
        } else {
            content
        }
    }))
}
