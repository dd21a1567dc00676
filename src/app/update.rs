// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component effects are translated here into backend requests and toasts.

use super::{session, Labels, Request, Screen, Task};
use crate::application::port::BackendError;
use crate::application::query::CurrencyCatalog;
use crate::domain::currency::Currency;
use crate::domain::error::ConversionError;
use crate::domain::settings::{Language, Settings};
use crate::i18n::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::Theme;
use crate::ui::{converter, rates};

/// Mutable view over the application state handed to every handler.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub session: &'a mut session::SettingsSession,
    pub catalog: &'a mut CurrencyCatalog,
    pub converter: &'a mut converter::State,
    pub rates: &'a mut rates::State,
    pub notifications: &'a mut notifications::Manager,
    pub labels: &'a mut Labels,
    pub text_refreshes: &'a mut u64,
    pub language_override: Option<Language>,
}

impl UpdateContext<'_> {
    /// Switches the language and re-resolves every label in one pass.
    fn apply_language(&mut self, language: Language) {
        self.i18n.set_language(language);
        *self.labels = Labels::resolve(&*self.i18n);
        *self.text_refreshes += 1;
        tracing::debug!(%language, revision = self.i18n.revision(), "text refreshed");
    }

    fn apply_theme(&self, theme: Theme) {
        tracing::debug!(%theme, "theme applied");
    }
}

// =============================================================================
// Component Messages
// =============================================================================

pub fn handle_converter_message(ctx: &mut UpdateContext<'_>, message: converter::Message) -> Task {
    let effect = ctx.converter.handle(message);
    converter_effect(ctx, effect)
}

fn converter_effect(ctx: &mut UpdateContext<'_>, effect: converter::Effect) -> Task {
    match effect {
        converter::Effect::None => Task::none(),
        converter::Effect::Submit(request) => Task::request(Request::Convert(request)),
        converter::Effect::Succeeded => {
            ctx.notifications.clear_conversion_errors();
            ctx.notifications
                .push(Notification::success("toast.converted"));
            Task::none()
        }
        converter::Effect::Failed(error) => {
            ctx.notifications.push(conversion_toast(&error));
            Task::none()
        }
    }
}

/// Declined conversions show the service's own message when it sent one.
fn conversion_toast(error: &ConversionError) -> Notification {
    match error.backend_message() {
        Some(message) => Notification::error("error.api.detail").with_arg("message", message),
        None => Notification::error(error.i18n_key()),
    }
}

pub fn handle_rates_message(ctx: &mut UpdateContext<'_>, message: rates::Message) -> Task {
    if matches!(
        message,
        rates::Message::PairSelected { .. }
            | rates::Message::FromSelected(_)
            | rates::Message::ToSelected(_)
    ) {
        *ctx.screen = Screen::Rates;
    }
    let effect = ctx.rates.handle(message);
    rates_effect(ctx, effect)
}

fn rates_effect(ctx: &mut UpdateContext<'_>, effect: rates::Effect) -> Task {
    match effect {
        rates::Effect::None => Task::none(),
        rates::Effect::Fetch { from, to } => Task::request(Request::RateLadder { from, to }),
        rates::Effect::Failed(_) => {
            ctx.notifications.push(Notification::error("error.api"));
            Task::none()
        }
    }
}

pub fn handle_session_message(ctx: &mut UpdateContext<'_>, message: session::Message) -> Task {
    match message {
        session::Message::SetTheme(mode) => {
            let snapshot = ctx.session.set_theme(mode);
            ctx.apply_theme(ctx.session.effective_theme());
            Task::request(Request::SaveSettings(snapshot))
        }
        session::Message::SetLanguage(language) => {
            let snapshot = ctx.session.set_language(language);
            ctx.apply_language(language);
            Task::request(Request::SaveSettings(snapshot))
        }
        session::Message::SystemThemeChanged(is_dark) => {
            if let Some(theme) = ctx.session.set_system_dark(is_dark) {
                ctx.apply_theme(theme);
            }
            Task::none()
        }
    }
}

// =============================================================================
// Navigation
// =============================================================================

pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task {
    *ctx.screen = target;
    Task::none()
}

/// Repeats the request behind the active screen.
pub fn handle_refresh(ctx: &mut UpdateContext<'_>) -> Task {
    match *ctx.screen {
        Screen::Converter => handle_converter_message(ctx, converter::Message::Convert),
        Screen::Rates => handle_rates_message(ctx, rates::Message::Refresh),
        Screen::Settings | Screen::About => Task::none(),
    }
}

// =============================================================================
// Backend Answers
// =============================================================================

/// Applies the stored preferences, then asks for the currency list.
pub fn handle_settings_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Settings, BackendError>,
) -> Task {
    let mut settings = ctx.session.initialize(result);
    if let Some(language) = ctx.language_override {
        settings = ctx.session.set_language(language);
    }

    ctx.apply_theme(ctx.session.effective_theme());
    ctx.apply_language(settings.language);
    Task::request(Request::ListCurrencies)
}

pub fn handle_settings_saved(ctx: &mut UpdateContext<'_>, result: Result<(), BackendError>) -> Task {
    match result {
        Ok(()) => ctx
            .notifications
            .push(Notification::success("toast.settings_saved")),
        Err(err) => {
            tracing::warn!(error = %err, "settings not saved; keeping them for this session");
            ctx.notifications.push(Notification::error("toast.error"));
        }
    }
    Task::none()
}

/// Fills the catalog, then starts the initial conversion and rate ladder.
///
/// Both start even when the list failed: the codes are already known from
/// the configuration.
pub fn handle_currencies_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<Currency>, BackendError>,
) -> Task {
    match ctx.catalog.populate(result) {
        Ok(count) => tracing::info!(count, "currency list loaded"),
        Err(err) => {
            tracing::error!(error = %err, "currency list unavailable");
            ctx.notifications
                .push(Notification::error("error.currencies"));
        }
    }

    let convert = handle_converter_message(ctx, converter::Message::Convert);
    let ladder = handle_rates_message(ctx, rates::Message::Refresh);
    Task::batch([convert, ladder])
}
