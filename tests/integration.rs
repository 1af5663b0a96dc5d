// SPDX-License-Identifier: MPL-2.0
use greeting_lens::app::{App, Flags};
use greeting_lens::config::{self, Config, GeneralConfig};
use greeting_lens::i18n::{self, ResourceTable};
use greeting_lens::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let strings = ResourceTable::load().expect("embedded bundles should load");

    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Light,
        },
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let (locale, source) = i18n::resolve_locale(
        None,
        loaded_initial_config.general.language.as_deref(),
        None,
        &strings,
    );
    assert_eq!(locale.to_string(), "en-US");
    assert_eq!(source, i18n::LocaleSource::Config);

    // 2. Change config to pl, written in Android qualifier form
    let polish_config = Config {
        general: GeneralConfig {
            language: Some("pl".to_string()),
            theme_mode: ThemeMode::Light,
        },
    };
    config::save_to_path(&polish_config, &temp_config_file_path)
        .expect("Failed to write polish config file");

    let loaded_polish_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load polish config from path");
    let app = App::from_parts(Flags::default(), strings, &loaded_polish_config, Some("uk".into()));
    assert_eq!(app.locale().to_string(), "pl");
    assert_eq!(app.root().lines()[2], "3. Do widzenia świecie");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_beats_config() {
    let strings = ResourceTable::load().unwrap();
    let config = Config {
        general: GeneralConfig {
            language: Some("pl".to_string()),
            theme_mode: ThemeMode::Dark,
        },
    };
    let flags = Flags {
        lang: Some("en-rGB".to_string()),
        ..Flags::default()
    };

    let app = App::from_parts(flags, strings, &config, None);
    assert_eq!(app.locale().to_string(), "en-GB");
}

#[test]
fn test_config_dir_override_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        general: GeneralConfig {
            language: Some("uk".to_string()),
            theme_mode: ThemeMode::System,
        },
    };

    config::save_with_override(&config, Some(dir.path().to_path_buf())).unwrap();
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded, config);
}
