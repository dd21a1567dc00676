// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::BackendError;
use crate::domain::currency::Currency;
use crate::domain::settings::Settings;
use crate::ui::notifications;
use crate::ui::{converter, rates};

use super::session;
use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Converter(converter::Message),
    Rates(rates::Message),
    Settings(session::Message),
    Notification(notifications::NotificationMessage),
    SwitchScreen(Screen),
    /// Re-run the request behind the active screen.
    Refresh,
    /// A command line could not be understood.
    UnknownCommand(String),
    SettingsLoaded(Result<Settings, BackendError>),
    SettingsSaved(Result<(), BackendError>),
    CurrenciesLoaded(Result<Vec<Currency>, BackendError>),
    Quit,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional language override (`ru`, `en`, a locale tag, or `auto`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SKYVENTOR_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional conversion service URL, overriding `[backend] url`.
    pub backend_url: Option<String>,
    /// Optional tracing filter, overriding `RUST_LOG`.
    pub log_level: Option<String>,
}
