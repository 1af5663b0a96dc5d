// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    I18n(I18nError),
}

/// Defects in the packaged string resources.
///
/// These are detected when the resource table is loaded and abort startup:
/// there is no fallback text at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// No `.ftl` bundle could be found.
    NoBundles,

    /// A bundle file name or a requested locale is not a valid language tag.
    InvalidLocale(String),

    /// A bundle failed to parse.
    Parse { locale: String, detail: String },

    /// A bundle does not define one of the required messages.
    MissingKey { locale: String, key: &'static str },

    /// A required message resolves to empty text.
    EmptyText { locale: String, key: &'static str },
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            I18nError::NoBundles => write!(f, "no translation bundles found"),
            I18nError::InvalidLocale(raw) => write!(f, "invalid locale identifier: {}", raw),
            I18nError::Parse { locale, detail } => {
                write!(f, "failed to parse bundle for {}: {}", locale, detail)
            }
            I18nError::MissingKey { locale, key } => {
                write!(f, "bundle for {} is missing `{}`", locale, key)
            }
            I18nError::EmptyText { locale, key } => {
                write!(f, "bundle for {} has empty text for `{}`", locale, key)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::I18n(e) => write!(f, "I18n Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<I18nError> for Error {
    fn from(err: I18nError) -> Self {
        Error::I18n(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn missing_key_names_locale_and_key() {
        let err: Error = I18nError::MissingKey {
            locale: "pl".into(),
            key: "save-to-usb",
        }
        .into();
        assert_eq!(
            format!("{}", err),
            "I18n Error: bundle for pl is missing `save-to-usb`"
        );
    }

    #[test]
    fn invalid_toml_converts_to_config_error() {
        let toml_err = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
