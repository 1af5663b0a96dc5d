// SPDX-License-Identifier: MPL-2.0
//! Fluent bundle loading and the read-only string resource table.
//!
//! Every embedded `assets/i18n/<locale>.ftl` file is parsed once at startup and
//! each [`StringKey`] is formatted eagerly. A bundle that misses a key, or
//! resolves one to empty text, is a packaging defect and fails the load.

use super::{default_locale, parse_locale, StringKey};
use crate::error::I18nError;
use fluent_bundle::{FluentBundle, FluentResource};
use fluent_syntax::ast;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// The resolved text of every [`StringKey`] for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStrings {
    texts: [String; 5],
}

impl LocaleStrings {
    #[must_use]
    pub fn get(&self, key: StringKey) -> &str {
        &self.texts[key.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (StringKey, &str)> {
        StringKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}

/// Result of checking one bundle against the required keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    pub locale: String,
    pub missing: Vec<StringKey>,
    pub empty: Vec<StringKey>,
    /// Messages defined by the bundle that no screen displays.
    pub obsolete: Vec<String>,
}

impl CoverageReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.empty.is_empty()
    }

    fn first_defect(&self) -> Option<I18nError> {
        if let Some(key) = self.missing.first() {
            return Some(I18nError::MissingKey {
                locale: self.locale.clone(),
                key: key.message_id(),
            });
        }
        self.empty.first().map(|key| I18nError::EmptyText {
            locale: self.locale.clone(),
            key: key.message_id(),
        })
    }
}

/// Immutable locale → strings mapping shared by the whole view tree.
#[derive(Debug, Clone)]
pub struct ResourceTable {
    strings: HashMap<LanguageIdentifier, LocaleStrings>,
    locales: Vec<LanguageIdentifier>,
    coverage: Vec<CoverageReport>,
}

impl ResourceTable {
    /// Loads the bundles embedded in the binary.
    pub fn load() -> Result<Self, I18nError> {
        let mut sources = Vec::new();
        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename.strip_suffix(".ftl") else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
                sources.push((locale.to_string(), source));
            }
        }
        Self::from_sources(sources)
    }

    /// Builds a table from `(locale, ftl source)` pairs.
    pub fn from_sources<I, L, S>(sources: I) -> Result<Self, I18nError>
    where
        I: IntoIterator<Item = (L, S)>,
        L: AsRef<str>,
        S: Into<String>,
    {
        let mut strings = HashMap::new();
        let mut locales = Vec::new();
        let mut coverage = Vec::new();

        for (raw_locale, source) in sources {
            let locale = parse_locale(raw_locale.as_ref())?;
            let (texts, report) = load_bundle(&locale, source.into())?;

            if let Some(defect) = report.first_defect() {
                return Err(defect);
            }
            if !report.obsolete.is_empty() {
                tracing::warn!(
                    locale = %locale,
                    obsolete = ?report.obsolete,
                    "bundle defines messages that are never displayed"
                );
            }

            tracing::debug!(locale = %locale, "loaded translation bundle");
            strings.insert(locale.clone(), texts);
            locales.push(locale);
            coverage.push(report);
        }

        if locales.is_empty() {
            return Err(I18nError::NoBundles);
        }

        locales.sort_by_key(|locale| locale.to_string());
        locales.dedup();
        coverage.sort_by(|a, b| a.locale.cmp(&b.locale));

        Ok(Self {
            strings,
            locales,
            coverage,
        })
    }

    /// Available locales, sorted by tag.
    #[must_use]
    pub fn locales(&self) -> &[LanguageIdentifier] {
        &self.locales
    }

    #[must_use]
    pub fn coverage(&self) -> &[CoverageReport] {
        &self.coverage
    }

    #[must_use]
    pub fn strings(&self, locale: &LanguageIdentifier) -> Option<&LocaleStrings> {
        self.strings.get(locale)
    }

    /// Exact lookup; `None` only when the locale is not packaged.
    #[must_use]
    pub fn lookup(&self, locale: &LanguageIdentifier, key: StringKey) -> Option<&str> {
        self.strings(locale).map(|strings| strings.get(key))
    }

    /// Finds a packaged locale serving `requested`: the exact tag, else one
    /// sharing its language (the default locale first, then by tag order).
    #[must_use]
    pub fn match_locale(&self, requested: &LanguageIdentifier) -> Option<LanguageIdentifier> {
        if self.strings.contains_key(requested) {
            return Some(requested.clone());
        }

        let default = default_locale();
        let same_language = |candidate: &&LanguageIdentifier| {
            candidate.language == requested.language
        };

        if same_language(&&default) && self.strings.contains_key(&default) {
            return Some(default);
        }

        self.locales
            .iter()
            .filter(same_language)
            .min_by_key(|candidate| candidate.region.is_some())
            .cloned()
    }

    /// Like [`Self::match_locale`] but always returns a packaged locale.
    #[must_use]
    pub fn negotiate(&self, requested: &LanguageIdentifier) -> LanguageIdentifier {
        if let Some(found) = self.match_locale(requested) {
            return found;
        }
        let default = default_locale();
        if self.strings.contains_key(&default) {
            return default;
        }
        // Loading rejects empty tables, so there is always a first locale.
        self.locales.first().cloned().unwrap_or(default)
    }
}

fn load_bundle(
    locale: &LanguageIdentifier,
    source: String,
) -> Result<(LocaleStrings, CoverageReport), I18nError> {
    let resource = FluentResource::try_new(source).map_err(|(_, errors)| I18nError::Parse {
        locale: locale.to_string(),
        detail: format!("{errors:?}"),
    })?;

    // Terms and comments are not messages, so they never count as obsolete.
    let obsolete = resource
        .entries()
        .filter_map(|entry| match entry {
            ast::Entry::Message(message) => Some(message.id.name),
            _ => None,
        })
        .filter(|id| StringKey::from_message_id(id).is_none())
        .map(str::to_string)
        .collect();

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| I18nError::Parse {
            locale: locale.to_string(),
            detail: format!("{errors:?}"),
        })?;

    let mut report = CoverageReport {
        locale: locale.to_string(),
        obsolete,
        ..CoverageReport::default()
    };
    let mut texts: [String; 5] = Default::default();

    for key in StringKey::ALL {
        let Some(pattern) = bundle
            .get_message(key.message_id())
            .and_then(|message| message.value())
        else {
            report.missing.push(key);
            continue;
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            return Err(I18nError::Parse {
                locale: locale.to_string(),
                detail: format!("{errors:?}"),
            });
        }

        let value = value.trim();
        if value.is_empty() {
            report.empty.push(key);
        } else {
            texts[key.index()] = value.to_string();
        }
    }

    Ok((LocaleStrings { texts }, report))
}
