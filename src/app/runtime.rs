// SPDX-License-Identifier: MPL-2.0
//! Asynchronous side of the application loop.
//!
//! `App::update` never talks to the backend itself. It returns a [`Task`]
//! listing the [`Request`]s to start; the [`Runtime`] performs them
//! concurrently and turns every answer back into a [`Message`]. Every
//! request is bounded by the configured timeout.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::stream::{FuturesUnordered, StreamExt};
use futures_util::FutureExt;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::application::port::{Backend, BackendError};
use crate::domain::conversion::ConversionRequest;
use crate::domain::currency::CurrencyCode;
use crate::domain::settings::Settings;
use crate::ui::{converter, rates};

use super::{App, Message};

/// One backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    LoadSettings,
    SaveSettings(Settings),
    ListCurrencies,
    Convert(ConversionRequest),
    RateLadder { from: CurrencyCode, to: CurrencyCode },
}

/// Work produced by an update.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[must_use]
pub struct Task {
    requests: Vec<Request>,
}

impl Task {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn request(request: Request) -> Self {
        Self {
            requests: vec![request],
        }
    }

    pub fn batch(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            requests: tasks.into_iter().flat_map(|task| task.requests).collect(),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.requests.is_empty()
    }

    #[must_use]
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    #[must_use]
    pub fn into_requests(self) -> Vec<Request> {
        self.requests
    }
}

/// Performs requests against a [`Backend`].
#[derive(Clone)]
pub struct Runtime {
    backend: Arc<dyn Backend>,
    timeout: Duration,
}

impl Runtime {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Starts one request. The returned future resolves to the message that
    /// carries its answer.
    pub fn perform(&self, request: Request) -> BoxFuture<'static, Message> {
        let backend = Arc::clone(&self.backend);
        let limit = self.timeout;

        async move {
            match request {
                Request::LoadSettings => {
                    Message::SettingsLoaded(bounded(limit, backend.load_settings()).await)
                }
                Request::SaveSettings(settings) => {
                    Message::SettingsSaved(bounded(limit, backend.save_settings(settings)).await)
                }
                Request::ListCurrencies => {
                    Message::CurrenciesLoaded(bounded(limit, backend.list_currencies()).await)
                }
                Request::Convert(request) => {
                    let result = bounded(limit, backend.convert(&request)).await;
                    Message::Converter(converter::Message::Finished(result))
                }
                Request::RateLadder { from, to } => {
                    let result = bounded(limit, backend.rate_ladder(&from, &to)).await;
                    Message::Rates(rates::Message::Loaded { from, to, result })
                }
            }
        }
        .boxed()
    }
}

async fn bounded<T>(
    limit: Duration,
    call: impl std::future::Future<Output = Result<T, BackendError>>,
) -> Result<T, BackendError> {
    tokio::time::timeout(limit, call)
        .await
        .unwrap_or(Err(BackendError::Timeout(limit)))
}

/// Drives `app` until [`Message::Quit`] or until there is nothing left to
/// wait for.
///
/// `observe` sees the app after every update together with the message that
/// caused it.
pub async fn run<F>(
    runtime: &Runtime,
    app: &mut App,
    initial: Task,
    mut intents: UnboundedReceiver<Message>,
    mut observe: F,
) where
    F: FnMut(&App, &Message),
{
    let mut pending: FuturesUnordered<BoxFuture<'static, Message>> = FuturesUnordered::new();
    for request in initial.into_requests() {
        pending.push(runtime.perform(request));
    }
    let mut intents_open = true;

    loop {
        let message = tokio::select! {
            Some(message) = pending.next(), if !pending.is_empty() => message,
            received = intents.recv(), if intents_open => match received {
                Some(message) => message,
                None => {
                    intents_open = false;
                    continue;
                }
            },
            else => break,
        };

        let quit = matches!(message, Message::Quit);
        let task = app.update(message.clone());
        observe(app, &message);
        if quit {
            tracing::debug!(abandoned = pending.len(), "quit requested");
            break;
        }

        for request in task.into_requests() {
            pending.push(runtime.perform(request));
        }
    }
}
