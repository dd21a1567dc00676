// SPDX-License-Identifier: MPL-2.0
//! Background event sources for the application.
//!
//! Each source runs as its own task and feeds [`Message`]s into the intent
//! channel. A source stops as soon as the channel is closed.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::session;
use super::Message;
use crate::config::NOTIFICATION_TICK_MS;
use crate::ui::notifications::NotificationMessage;
use crate::ui::theming::system_prefers_dark;

/// How often the operating system theme is sampled.
pub const SYSTEM_THEME_POLL: Duration = Duration::from_secs(2);

/// Emits `Notification(Tick)` so toasts can auto-dismiss.
pub fn notification_ticks(sender: UnboundedSender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(NOTIFICATION_TICK_MS));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if sender
                .send(Message::Notification(NotificationMessage::Tick))
                .is_err()
            {
                break;
            }
        }
    })
}

/// Watches the system dark/light preference and reports changes only.
pub fn system_theme_changes(
    sender: UnboundedSender<Message>,
    initial_is_dark: bool,
    poll: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut last = initial_is_dark;
        loop {
            tokio::time::sleep(poll).await;
            if sender.is_closed() {
                break;
            }

            let is_dark = match tokio::task::spawn_blocking(system_prefers_dark).await {
                Ok(is_dark) => is_dark,
                Err(err) => {
                    tracing::debug!(error = %err, "system theme check failed");
                    continue;
                }
            };
            if is_dark == last {
                continue;
            }

            last = is_dark;
            tracing::debug!(is_dark, "system theme changed");
            if sender
                .send(Message::Settings(session::Message::SystemThemeChanged(
                    is_dark,
                )))
                .is_err()
            {
                break;
            }
        }
    })
}
