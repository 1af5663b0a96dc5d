// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced entry point.
//!
//! The `App` owns the read-only resource table, the process theme and the
//! active locale. Every render pass recomposes the view tree from those
//! inputs, so a locale or theme switch is picked up by the next frame.

mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::{self, ResourceTable, StringKey};
use crate::ui::greeting::{self, GreetingContext, Layout, Node};
use crate::ui::preview::PreviewConfig;
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::widget::Column;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Lifecycle of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Rendered,
}

/// Root Iced application state.
pub struct App {
    strings: ResourceTable,
    locale: LanguageIdentifier,
    /// Set when the CLI, the config file or a preview supplied the active
    /// locale; the OS locale is then no longer followed.
    locale_pinned: bool,
    theme: AppTheme,
    phase: Phase,
    preview: Option<&'static PreviewConfig>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.locale.to_string())
            .field("phase", &self.phase)
            .field("preview", &self.preview.map(|p| p.name))
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags, strings: ResourceTable) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // Wrap the inputs in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming them once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some((flags, strings)));
    let boot = move || {
        let (flags, strings) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (App::new(flags, strings), Task::done(Message::Activated))
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the CLI flags, the config file and
    /// the OS locale.
    fn new(flags: Flags, strings: ResourceTable) -> Self {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "using default configuration");
        }
        Self::from_parts(flags, strings, &config, sys_locale::get_locale())
    }

    /// Builds the state from already loaded inputs.
    pub fn from_parts(
        flags: Flags,
        strings: ResourceTable,
        config: &Config,
        os_locale: Option<String>,
    ) -> Self {
        let (locale, locale_pinned) = match flags.preview.map(PreviewConfig::language_id) {
            Some(Ok(locale)) => (strings.negotiate(&locale), true),
            Some(Err(err)) => {
                tracing::warn!(%err, "preview locale is invalid");
                (strings.negotiate(&i18n::default_locale()), true)
            }
            None => {
                let cli = flags.lang.as_deref();
                let configured = config.general.language.as_deref();
                let (locale, source) =
                    i18n::resolve_locale(cli, configured, os_locale.as_deref(), &strings);
                (locale, source.is_explicit())
            }
        };

        tracing::info!(locale = %locale, pinned = locale_pinned, "starting");

        Self {
            strings,
            locale,
            locale_pinned,
            theme: AppTheme::new(config.general.theme_mode),
            phase: Phase::Uninitialized,
            preview: flags.preview,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    #[must_use]
    pub fn app_theme(&self) -> &AppTheme {
        &self.theme
    }

    /// Composes the whole window: a full-size surface painted with the theme
    /// background holding a single greeting that fills it.
    #[must_use]
    pub fn root(&self) -> Node {
        let show_background = self.preview.is_none_or(|preview| preview.show_background);

        self.theme.provide(|scope| {
            let content = greeting::greeting(&GreetingContext {
                theme: scope,
                strings: &self.strings,
                locale: &self.locale,
                layout: Layout::fill(),
            });

            if show_background {
                greeting::background_surface(scope, Layout::fill(), content)
            } else {
                content
            }
        })
    }

    pub fn title(&self) -> String {
        if let Some(preview) = self.preview {
            return preview.name.to_string();
        }
        self.strings
            .lookup(&self.locale, StringKey::AppName)
            .unwrap_or_default()
            .to_string()
    }

    pub fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.locale_pinned,
            self.theme.mode == ThemeMode::System,
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Activated => {
                if self.phase == Phase::Uninitialized {
                    self.phase = Phase::Rendered;
                    tracing::debug!("greeting mounted");
                }
                Task::none()
            }
            Message::Tick(_) => {
                if self.theme.mode == ThemeMode::System {
                    self.refresh_system_theme();
                }
                if self.locale_pinned {
                    Task::none()
                } else {
                    Task::done(Message::SystemLocaleDetected(sys_locale::get_locale()))
                }
            }
            Message::SystemLocaleDetected(raw) => {
                self.apply_system_locale(raw.as_deref());
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match self.phase {
            Phase::Uninitialized => Column::new().into(),
            Phase::Rendered => self.root().view(),
        }
    }

    fn apply_system_locale(&mut self, raw: Option<&str>) {
        if self.locale_pinned {
            return;
        }
        let Some(raw) = raw else { return };

        let requested = match i18n::parse_locale(raw) {
            Ok(locale) => locale,
            Err(err) => {
                tracing::debug!(%err, "ignoring system locale");
                return;
            }
        };

        let negotiated = self.strings.negotiate(&requested);
        if negotiated != self.locale {
            tracing::info!(from = %self.locale, to = %negotiated, "system locale changed");
            self.locale = negotiated;
        }
    }

    fn refresh_system_theme(&mut self) {
        let detected = AppTheme::new(ThemeMode::System);
        if detected != self.theme {
            tracing::info!(dark = detected.mode.is_dark(), "system theme changed");
            self.theme = detected;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneralConfig;
    use crate::ui::preview::PREVIEWS;
    use iced::advanced::Widget;
    use iced::{Length, Size};

    fn app_with(flags: Flags, language: Option<&str>, os: Option<&str>) -> App {
        let config = Config {
            general: GeneralConfig {
                language: language.map(str::to_string),
                theme_mode: ThemeMode::Light,
            },
        };
        App::from_parts(
            flags,
            ResourceTable::load().unwrap(),
            &config,
            os.map(str::to_string),
        )
    }

    #[test]
    fn activation_transitions_once() {
        let mut app = app_with(Flags::default(), None, None);
        assert_eq!(app.phase(), Phase::Uninitialized);

        let _ = app.update(Message::Activated);
        assert_eq!(app.phase(), Phase::Rendered);

        let _ = app.update(Message::Activated);
        assert_eq!(app.phase(), Phase::Rendered);
    }

    #[test]
    fn root_is_full_size_background_surface_with_one_greeting() {
        let app = app_with(Flags::default(), Some("pl"), None);
        let root = app.root();

        let Node::Surface {
            color,
            layout,
            child,
        } = &root
        else {
            panic!("expected surface");
        };
        assert_eq!(*color, app.app_theme().colors.background);
        assert_eq!(*layout, Layout::fill());
        assert!(matches!(**child, Node::Column { .. }));
        assert_eq!(child.layout(), Layout::fill());
        assert_eq!(root.lines().len(), 5);
    }

    #[test]
    fn root_surface_converts_to_full_size_container() {
        let app = app_with(Flags::default(), Some("en-GB"), None);
        let element: Element<'_, Message> = app.root().view();
        let widget = element.as_widget();

        assert_eq!(widget.size(), Size::new(Length::Fill, Length::Fill));
        assert_eq!(widget.children().len(), 1);
    }

    #[test]
    fn view_is_empty_until_activated() {
        let mut app = app_with(Flags::default(), Some("pl"), None);
        {
            let element = app.view();
            let widget = element.as_widget();
            assert_eq!(widget.size(), Size::new(Length::Shrink, Length::Shrink));
            assert!(widget.children().is_empty());
        }

        let _ = app.update(Message::Activated);

        let element = app.view();
        let widget = element.as_widget();
        assert_eq!(widget.size(), Size::new(Length::Fill, Length::Fill));
        assert_eq!(widget.children().len(), 1);
    }

    #[test]
    fn title_is_localized_app_name() {
        let app = app_with(Flags::default(), Some("uk"), None);
        assert_eq!(app.title(), "AndroidChatGPT");
    }

    #[test]
    fn os_locale_is_used_when_nothing_is_configured() {
        let app = app_with(Flags::default(), None, Some("pl-PL"));
        assert_eq!(app.locale().to_string(), "pl");
    }

    #[test]
    fn system_locale_change_triggers_new_text() {
        let mut app = app_with(Flags::default(), None, Some("en-US"));
        assert_eq!(app.root().lines()[1], "2. Hello World!");

        let _ = app.update(Message::SystemLocaleDetected(Some("pl".into())));

        assert_eq!(app.locale().to_string(), "pl");
        assert_eq!(app.root().lines()[1], "2. Witaj świecie");
    }

    #[test]
    fn pinned_locale_ignores_system_changes() {
        let flags = Flags {
            lang: Some("uk".into()),
            ..Flags::default()
        };
        let mut app = app_with(flags, None, Some("pl"));

        let _ = app.update(Message::SystemLocaleDetected(Some("pl".into())));

        assert_eq!(app.locale().to_string(), "uk");
    }

    #[test]
    fn unpackaged_config_locale_does_not_pin() {
        let mut app = app_with(Flags::default(), Some("fr"), Some("pl"));
        assert_eq!(app.locale().to_string(), "pl");

        let _ = app.update(Message::SystemLocaleDetected(Some("uk".into())));

        assert_eq!(app.locale().to_string(), "uk");
        assert_eq!(app.root().lines()[1], "2. Привіт, світе");
    }

    #[test]
    fn packaged_config_locale_pins() {
        let mut app = app_with(Flags::default(), Some("uk"), Some("pl"));
        let _ = app.update(Message::SystemLocaleDetected(Some("pl".into())));
        assert_eq!(app.locale().to_string(), "uk");
    }

    #[test]
    fn invalid_system_locale_is_ignored() {
        let mut app = app_with(Flags::default(), None, Some("en-GB"));
        let _ = app.update(Message::SystemLocaleDetected(Some("!!".into())));
        let _ = app.update(Message::SystemLocaleDetected(None));
        assert_eq!(app.locale().to_string(), "en-GB");
    }

    #[test]
    fn preview_pins_locale_and_title() {
        let flags = Flags {
            lang: Some("uk".into()),
            preview: Some(&PREVIEWS[1]),
            ..Flags::default()
        };
        let app = app_with(flags, None, None);
        assert_eq!(app.locale().to_string(), "en-GB");
        assert_eq!(app.title(), "British English");
    }

    #[test]
    fn repeated_composition_is_equivalent() {
        let app = app_with(Flags::default(), Some("en-GB"), None);
        assert_eq!(app.root(), app.root());
    }
}
