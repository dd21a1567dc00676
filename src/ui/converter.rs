// SPDX-License-Identifier: MPL-2.0
//! Converter screen state: the single-flight conversion workflow.
//!
//! Each attempt moves through `Idle → Pending → {Succeeded, Failed}`. Input is
//! validated before anything leaves this component, and while an attempt is
//! pending every further submit is rejected, so there is never more than one
//! conversion in flight. The terminal transition always re-enables the
//! control, whatever the backend did.

use crate::application::port::BackendError;
use crate::domain::conversion::{ConversionRequest, ConversionResult};
use crate::domain::currency::{format_fixed, unit_rate_text, Amount, CurrencyCode};
use crate::domain::error::ConversionError;
use crate::domain::rates::{build_ladder, RateRow};
use std::mem;

/// Lifecycle of the latest conversion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Display-ready values of the last successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionDisplay {
    /// Converted amount, two fractional digits.
    pub converted_amount: String,
    /// `1 {FROM} = {rate} {TO}`.
    pub unit_rate: String,
    /// Backend timestamp, verbatim.
    pub last_update: String,
    /// Quick ladder over the returned rate.
    pub ladder: Vec<RateRow>,
}

/// Converter state.
#[derive(Debug, Clone)]
pub struct State {
    amount_input: String,
    from: CurrencyCode,
    to: CurrencyCode,
    multipliers: Vec<u32>,
    phase: Phase,
    in_flight: Option<ConversionRequest>,
    display: Option<ConversionDisplay>,
    last_error: Option<ConversionError>,
}

/// Intents accepted by the converter.
#[derive(Debug, Clone)]
pub enum Message {
    /// The amount field was edited. A non-empty value converts right away.
    AmountChanged(String),
    FromSelected(CurrencyCode),
    ToSelected(CurrencyCode),
    /// Explicit convert action.
    Convert,
    /// Exchange the two codes and convert again.
    Swap,
    /// Outcome of the backend call for the in-flight request.
    Finished(Result<ConversionResult, BackendError>),
}

/// What the caller must do after a message was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Send this request to the backend and feed the answer back as
    /// [`Message::Finished`].
    Submit(ConversionRequest),
    /// The attempt succeeded; announce it.
    Succeeded,
    /// The attempt failed; announce the error.
    Failed(ConversionError),
}

impl State {
    #[must_use]
    pub fn new(
        from: CurrencyCode,
        to: CurrencyCode,
        amount: impl Into<String>,
        multipliers: Vec<u32>,
    ) -> Self {
        Self {
            amount_input: amount.into(),
            from,
            to,
            multipliers,
            phase: Phase::Idle,
            in_flight: None,
            display: None,
            last_error: None,
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::AmountChanged(input) => {
                let has_value = !input.trim().is_empty();
                self.amount_input = input;
                if has_value {
                    self.submit()
                } else {
                    Effect::None
                }
            }
            Message::FromSelected(code) => {
                self.from = code;
                Effect::None
            }
            Message::ToSelected(code) => {
                self.to = code;
                Effect::None
            }
            Message::Convert => self.submit(),
            Message::Swap => {
                // The selection must keep matching the pair being converted.
                if self.is_pending() {
                    tracing::debug!(
                        from = %self.from,
                        to = %self.to,
                        "conversion already in flight; swap ignored"
                    );
                    return Effect::None;
                }
                mem::swap(&mut self.from, &mut self.to);
                self.submit()
            }
            Message::Finished(outcome) => self.finish(outcome),
        }
    }

    /// Validates the current input and starts an attempt.
    fn submit(&mut self) -> Effect {
        if self.phase == Phase::Pending {
            tracing::debug!(
                from = %self.from,
                to = %self.to,
                "conversion already in flight; submit ignored"
            );
            return Effect::None;
        }

        let amount = match Amount::parse(&self.amount_input) {
            Ok(amount) => amount,
            Err(err) => {
                tracing::debug!(input = %self.amount_input, error = %err, "amount rejected");
                let error = ConversionError::from(err);
                self.phase = Phase::Failed;
                self.last_error = Some(error.clone());
                return Effect::Failed(error);
            }
        };

        let request = ConversionRequest {
            amount,
            from: self.from.clone(),
            to: self.to.clone(),
        };
        tracing::info!(amount = %request.amount, from = %request.from, to = %request.to, "conversion submitted");

        self.phase = Phase::Pending;
        self.in_flight = Some(request.clone());
        Effect::Submit(request)
    }

    fn finish(&mut self, outcome: Result<ConversionResult, BackendError>) -> Effect {
        let Some(request) = self.in_flight.take() else {
            tracing::warn!("conversion result arrived with no request in flight");
            return Effect::None;
        };

        let error = match outcome {
            Ok(result) if result.ok => {
                tracing::info!(
                    from = %request.from,
                    to = %request.to,
                    rate = %result.rate,
                    "conversion succeeded"
                );
                self.display = Some(ConversionDisplay {
                    converted_amount: format_fixed(result.converted_amount, 2),
                    unit_rate: unit_rate_text(&request.from, result.rate, &request.to),
                    last_update: result.last_update,
                    ladder: build_ladder(result.rate, &self.multipliers),
                });
                self.phase = Phase::Succeeded;
                self.last_error = None;
                return Effect::Succeeded;
            }
            Ok(result) => {
                ConversionError::Business(result.error_message.filter(|m| !m.trim().is_empty()))
            }
            Err(err) => ConversionError::Transport(err.to_string()),
        };

        tracing::warn!(from = %request.from, to = %request.to, error = %error, "conversion failed");
        self.phase = Phase::Failed;
        self.last_error = Some(error.clone());
        Effect::Failed(error)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    #[must_use]
    pub fn from(&self) -> &CurrencyCode {
        &self.from
    }

    #[must_use]
    pub fn to(&self) -> &CurrencyCode {
        &self.to
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Loading indicator.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    /// Whether the convert control accepts input.
    #[must_use]
    pub fn is_control_enabled(&self) -> bool {
        !self.is_pending()
    }

    #[must_use]
    pub fn in_flight(&self) -> Option<&ConversionRequest> {
        self.in_flight.as_ref()
    }

    #[must_use]
    pub fn display(&self) -> Option<&ConversionDisplay> {
        self.display.as_ref()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&ConversionError> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn multipliers(&self) -> &[u32] {
        &self.multipliers
    }
}
