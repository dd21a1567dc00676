// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the converter, the rates
//! page and the settings session.
//!
//! The `App` struct wires together the components (converter, rates,
//! localization, settings) and translates their effects into backend
//! requests and toasts. Startup is a fixed chain: settings load first, the
//! currency list follows, and only then do the initial conversion and rate
//! ladder run.

pub mod command;
mod message;
pub mod paths;
pub mod runtime;
mod screen;
pub mod session;
pub mod subscription;
mod update;
pub mod view;

pub use message::{Flags, Message};
pub use runtime::{Request, Runtime, Task};
pub use screen::Screen;
pub use session::SettingsSession;
pub use view::Labels;

use std::fmt;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::application::query::CurrencyCatalog;
use crate::config::{self, Config};
use crate::domain::settings::{Language, Settings};
use crate::error::Result;
use crate::i18n::{self, I18n};
use crate::infrastructure::HttpBackend;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::{self, Theme};
use crate::ui::{converter, rates};

/// Root application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    i18n: I18n,
    screen: Screen,
    session: SettingsSession,
    catalog: CurrencyCatalog,
    converter: converter::State,
    rates: rates::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Every translated label, re-resolved as one unit on language change.
    labels: Labels,
    /// Number of times the whole text set was re-applied.
    text_refreshes: u64,
    /// Language requested on the command line; wins over the stored one.
    language_override: Option<Language>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("settings", &self.session.settings())
            .field("currencies", &self.catalog.currencies().len())
            .field("converter_phase", &self.converter.phase())
            .field("notifications", &self.notifications.visible_count())
            .finish_non_exhaustive()
    }
}

impl App {
    /// Builds the initial state and the first request (settings load).
    pub fn new(
        config: &Config,
        language_override: Option<Language>,
        system_is_dark: bool,
    ) -> (Self, Task) {
        let language = language_override.unwrap_or(config.general.language);
        let i18n = I18n::new(language);
        let labels = Labels::resolve(&i18n);
        let converter_config = &config.converter;

        let app = App {
            labels,
            i18n,
            screen: Screen::default(),
            session: SettingsSession::new(system_is_dark),
            catalog: CurrencyCatalog::new(),
            converter: converter::State::new(
                converter_config.default_from.clone(),
                converter_config.default_to.clone(),
                converter_config.default_amount.clone(),
                converter_config.ladder_multipliers.clone(),
            ),
            rates: rates::State::new(
                converter_config.default_from.clone(),
                converter_config.default_to.clone(),
            ),
            notifications: notifications::Manager::new(),
            text_refreshes: 0,
            language_override,
        };

        (app, Task::request(Request::LoadSettings))
    }

    /// Shows a warning toast for `key`.
    pub fn warn(&mut self, key: &str) {
        self.notifications.push(Notification::warning(key));
    }

    pub fn update(&mut self, message: Message) -> Task {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            session: &mut self.session,
            catalog: &mut self.catalog,
            converter: &mut self.converter,
            rates: &mut self.rates,
            notifications: &mut self.notifications,
            labels: &mut self.labels,
            text_refreshes: &mut self.text_refreshes,
            language_override: self.language_override,
        };

        match message {
            Message::Converter(converter_message) => {
                update::handle_converter_message(&mut ctx, converter_message)
            }
            Message::Rates(rates_message) => update::handle_rates_message(&mut ctx, rates_message),
            Message::Settings(session_message) => {
                update::handle_session_message(&mut ctx, session_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::Refresh => update::handle_refresh(&mut ctx),
            Message::UnknownCommand(input) => {
                self.notifications
                    .push(Notification::warning("error.command").with_arg("input", input));
                Task::none()
            }
            Message::SettingsLoaded(result) => update::handle_settings_loaded(&mut ctx, result),
            Message::SettingsSaved(result) => update::handle_settings_saved(&mut ctx, result),
            Message::CurrenciesLoaded(result) => {
                update::handle_currencies_loaded(&mut ctx, result)
            }
            Message::Quit => {
                tracing::info!("shutting down");
                Task::none()
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.session.settings()
    }

    #[must_use]
    pub fn session(&self) -> &SettingsSession {
        &self.session
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.session.effective_theme()
    }

    #[must_use]
    pub fn catalog(&self) -> &CurrencyCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn converter(&self) -> &converter::State {
        &self.converter
    }

    #[must_use]
    pub fn rates(&self) -> &rates::State {
        &self.rates
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    #[must_use]
    pub fn text_refreshes(&self) -> u64 {
        self.text_refreshes
    }
}

// =============================================================================
// Entry Point
// =============================================================================

/// Entry point used by `main.rs`: loads the configuration, connects to the
/// backend and runs the command loop on standard input until `quit` or EOF.
pub async fn run(flags: Flags) -> Result<()> {
    paths::init_cli_overrides(flags.config_dir.clone());

    let (mut config, config_warning) = config::load();
    if let Some(url) = flags.backend_url.clone() {
        config.backend.url = url;
        config = config.sanitized();
    }

    let language_override = flags.lang.as_deref().and_then(|value| {
        let language = i18n::resolve_cli_language(value);
        if language.is_none() {
            tracing::warn!(value, "ignoring unsupported --lang value");
        }
        language
    });

    let settings_path = config::config_file_path(None);
    let backend = HttpBackend::new(&config.backend, settings_path)?;
    tracing::info!(url = backend.base_url(), "using conversion service");
    let runtime = Runtime::new(Arc::new(backend), config.backend.timeout());

    let system_is_dark = tokio::task::spawn_blocking(theming::system_prefers_dark)
        .await
        .unwrap_or(true);
    let (mut app, task) = App::new(&config, language_override, system_is_dark);
    if let Some(key) = config_warning {
        app.warn(&key);
    }

    let (sender, receiver) = mpsc::unbounded_channel();
    let ticks = subscription::notification_ticks(sender.clone());
    let system_theme = subscription::system_theme_changes(
        sender.clone(),
        system_is_dark,
        subscription::SYSTEM_THEME_POLL,
    );
    let input = tokio::spawn(read_commands(sender));

    println!("{}", view::render(&app));
    let mut shown_toasts = app.notifications().visible_count();
    runtime::run(&runtime, &mut app, task, receiver, |app, message| {
        let toasts = app.notifications().visible_count();
        let is_tick = matches!(
            message,
            Message::Notification(notifications::NotificationMessage::Tick)
        );
        if !is_tick || toasts != shown_toasts {
            println!("{}", view::render(app));
        }
        shown_toasts = toasts;
    })
    .await;

    ticks.abort();
    system_theme.abort();
    input.abort();
    Ok(())
}

/// Forwards parsed stdin lines as messages; EOF ends the session.
async fn read_commands(sender: UnboundedSender<Message>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                tracing::error!(error = %err, "failed to read standard input");
                break;
            }
        };

        let message = match command::parse(&line) {
            Ok(Some(message)) => message,
            Ok(None) => continue,
            Err(input) => Message::UnknownCommand(input),
        };
        if sender.send(message).is_err() {
            return;
        }
    }
    let _ = sender.send(Message::Quit);
}
