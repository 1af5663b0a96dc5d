// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles locale parsing and negotiation, bundle loading and the closed set of
//! string keys displayed by the greeting screen.
//!
//! # Features
//!
//! - Locale selection from CLI, config, or system settings
//! - Embedded `.ftl` translation files, validated once at startup
//! - Android resource qualifiers (`en-rGB`) accepted wherever a locale is parsed
//! - Fallback to the default locale when a requested language is not packaged

pub mod fluent;

pub use fluent::{CoverageReport, LocaleStrings, ResourceTable};

use crate::config::defaults::DEFAULT_LOCALE;
use crate::error::I18nError;
use unic_langid::LanguageIdentifier;

/// The strings rendered by the greeting screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    AppName,
    HelloWorld,
    GoodbyeWorld,
    SaveToUsb,
    SaveToDisk,
}

impl StringKey {
    pub const ALL: [StringKey; 5] = [
        StringKey::AppName,
        StringKey::HelloWorld,
        StringKey::GoodbyeWorld,
        StringKey::SaveToUsb,
        StringKey::SaveToDisk,
    ];

    /// Symbolic resource name, as used by packaging tools.
    #[must_use]
    pub fn resource_name(self) -> &'static str {
        match self {
            StringKey::AppName => "app_name",
            StringKey::HelloWorld => "hello_world",
            StringKey::GoodbyeWorld => "goodbye_world",
            StringKey::SaveToUsb => "save_to_usb",
            StringKey::SaveToDisk => "save_to_disk",
        }
    }

    /// Fluent message identifier in the `.ftl` bundles.
    #[must_use]
    pub fn message_id(self) -> &'static str {
        match self {
            StringKey::AppName => "app-name",
            StringKey::HelloWorld => "hello-world",
            StringKey::GoodbyeWorld => "goodbye-world",
            StringKey::SaveToUsb => "save-to-usb",
            StringKey::SaveToDisk => "save-to-disk",
        }
    }

    /// Position in [`StringKey::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-based position shown in front of the text.
    #[must_use]
    pub fn ordinal(self) -> usize {
        self.index() + 1
    }

    #[must_use]
    pub fn from_message_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.message_id() == id)
    }
}

/// Returns the locale used when nothing else matches.
#[must_use]
pub fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

/// Parses a locale in BCP-47 form (`en-GB`), Android resource qualifier form
/// (`en-rGB`) or POSIX form (`pl_PL.UTF-8`).
pub fn parse_locale(raw: &str) -> Result<LanguageIdentifier, I18nError> {
    let trimmed = raw.trim();
    let base = trimmed
        .split(['.', '@'])
        .next()
        .unwrap_or_default();

    let normalized = base
        .split(['-', '_'])
        .map(|subtag| {
            let is_region_qualifier = subtag.len() == 3
                && subtag.starts_with('r')
                && subtag[1..].chars().all(|c| c.is_ascii_uppercase());
            if is_region_qualifier {
                &subtag[1..]
            } else {
                subtag
            }
        })
        .collect::<Vec<_>>()
        .join("-");

    if normalized.is_empty() {
        return Err(I18nError::InvalidLocale(raw.to_string()));
    }

    normalized
        .parse::<LanguageIdentifier>()
        .map_err(|_| I18nError::InvalidLocale(raw.to_string()))
}

/// Where the startup locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    Cli,
    Config,
    Os,
    Default,
}

impl LocaleSource {
    /// The user chose the locale explicitly, so OS changes are not followed.
    #[must_use]
    pub fn is_explicit(self) -> bool {
        matches!(self, LocaleSource::Cli | LocaleSource::Config)
    }

    fn as_str(self) -> &'static str {
        match self {
            LocaleSource::Cli => "cli",
            LocaleSource::Config => "config",
            LocaleSource::Os => "os",
            LocaleSource::Default => "default",
        }
    }
}

/// Picks the startup locale and reports which source supplied it.
///
/// Candidates are tried in order CLI argument, config file, OS setting. The
/// first one the table can serve (exactly or by language) wins; otherwise the
/// table's negotiated default is used.
pub fn resolve_locale(
    cli_lang: Option<&str>,
    config_lang: Option<&str>,
    os_lang: Option<&str>,
    table: &ResourceTable,
) -> (LanguageIdentifier, LocaleSource) {
    let sources = [
        (LocaleSource::Cli, cli_lang),
        (LocaleSource::Config, config_lang),
        (LocaleSource::Os, os_lang),
    ];

    for (source, candidate) in sources {
        let Some(raw) = candidate else { continue };
        let source_name = source.as_str();
        match parse_locale(raw) {
            Ok(requested) => {
                if let Some(found) = table.match_locale(&requested) {
                    tracing::debug!(source = source_name, requested = %requested, resolved = %found, "locale resolved");
                    return (found, source);
                }
                tracing::debug!(source = source_name, requested = %requested, "locale not packaged");
            }
            Err(err) => tracing::warn!(source = source_name, %err, "ignoring locale"),
        }
    }

    let fallback = table.negotiate(&default_locale());
    tracing::debug!(resolved = %fallback, "falling back to default locale");
    (fallback, LocaleSource::Default)
}
