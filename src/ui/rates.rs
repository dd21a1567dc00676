// SPDX-License-Identifier: MPL-2.0
//! Rates screen state.
//!
//! Every pair change asks the backend for its pre-computed ladder. Requests
//! are not cancelled; instead an answer for a pair that is no longer selected
//! is dropped on arrival.

use crate::application::port::BackendError;
use crate::domain::currency::CurrencyCode;
use crate::domain::rates::RateRow;

#[derive(Debug, Clone)]
pub struct State {
    from: CurrencyCode,
    to: CurrencyCode,
    rows: Vec<RateRow>,
    awaiting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    FromSelected(CurrencyCode),
    ToSelected(CurrencyCode),
    /// Select both codes at once (one fetch).
    PairSelected {
        from: CurrencyCode,
        to: CurrencyCode,
    },
    /// Re-fetch the current pair.
    Refresh,
    Loaded {
        from: CurrencyCode,
        to: CurrencyCode,
        result: Result<Vec<RateRow>, BackendError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Request the ladder for this pair and answer with [`Message::Loaded`].
    Fetch { from: CurrencyCode, to: CurrencyCode },
    /// The ladder for the current pair could not be loaded.
    Failed(BackendError),
}

impl State {
    #[must_use]
    pub fn new(from: CurrencyCode, to: CurrencyCode) -> Self {
        Self {
            from,
            to,
            rows: Vec::new(),
            awaiting: false,
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::FromSelected(code) => {
                self.from = code;
                self.fetch()
            }
            Message::ToSelected(code) => {
                self.to = code;
                self.fetch()
            }
            Message::PairSelected { from, to } => {
                self.from = from;
                self.to = to;
                self.fetch()
            }
            Message::Refresh => self.fetch(),
            Message::Loaded { from, to, result } => {
                if from != self.from || to != self.to {
                    tracing::debug!(%from, %to, "dropping rate ladder for a deselected pair");
                    return Effect::None;
                }
                self.awaiting = false;

                match result {
                    Ok(rows) => {
                        tracing::info!(%from, %to, rows = rows.len(), "rate ladder loaded");
                        self.rows = rows;
                        Effect::None
                    }
                    Err(err) => {
                        tracing::warn!(%from, %to, error = %err, "rate ladder failed");
                        self.rows.clear();
                        Effect::Failed(err)
                    }
                }
            }
        }
    }

    fn fetch(&mut self) -> Effect {
        self.awaiting = true;
        Effect::Fetch {
            from: self.from.clone(),
            to: self.to.clone(),
        }
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
    pub fn rows(&self) -> &[RateRow] {
        &self.rows
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.awaiting
    }

    /// Table lines: multiplier, `{amount} {FROM}`, `{amount} {TO}`.
    #[must_use]
    pub fn table(&self) -> Vec<[String; 3]> {
        self.rows
            .iter()
            .map(|row| {
                [
                    row.multiplier_text(),
                    format!("{} {}", row.source_text(), self.from),
                    format!("{} {}", row.target_text(), self.to),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rates::build_ladder;
    use rust_decimal::Decimal;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s)
    }

    fn rows() -> Vec<RateRow> {
        build_ladder(Decimal::new(9000, 2), &[1, 10, 100, 1000])
    }

    #[test]
    fn pair_change_requests_ladder() {
        let mut rates = State::new(code("USD"), code("RUB"));
        let effect = rates.handle(Message::ToSelected(code("EUR")));

        assert_eq!(
            effect,
            Effect::Fetch {
                from: code("USD"),
                to: code("EUR")
            }
        );
        assert!(rates.is_loading());
    }

    #[test]
    fn loaded_rows_render_as_table() {
        let mut rates = State::new(code("USD"), code("RUB"));
        rates.handle(Message::Refresh);
        let effect = rates.handle(Message::Loaded {
            from: code("USD"),
            to: code("RUB"),
            result: Ok(rows()),
        });

        assert_eq!(effect, Effect::None);
        assert!(!rates.is_loading());
        let table = rates.table();
        assert_eq!(table[0], ["1×".to_string(), "1 USD".into(), "90.00 RUB".into()]);
        assert_eq!(
            table[3],
            ["1000×".to_string(), "1000 USD".into(), "90000.00 RUB".into()]
        );
    }

    #[test]
    fn stale_answer_is_dropped() {
        let mut rates = State::new(code("USD"), code("RUB"));
        rates.handle(Message::Refresh);
        rates.handle(Message::FromSelected(code("EUR")));

        let effect = rates.handle(Message::Loaded {
            from: code("USD"),
            to: code("RUB"),
            result: Ok(rows()),
        });

        assert_eq!(effect, Effect::None);
        assert!(rates.rows().is_empty());
        assert!(rates.is_loading());
    }

    #[test]
    fn stale_failure_is_silent() {
        let mut rates = State::new(code("USD"), code("RUB"));
        rates.handle(Message::Refresh);
        rates.handle(Message::ToSelected(code("BTC")));

        let effect = rates.handle(Message::Loaded {
            from: code("USD"),
            to: code("RUB"),
            result: Err(BackendError::Status(500)),
        });
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn failure_clears_rows_and_reports() {
        let mut rates = State::new(code("USD"), code("RUB"));
        rates.handle(Message::Refresh);
        rates.handle(Message::Loaded {
            from: code("USD"),
            to: code("RUB"),
            result: Ok(rows()),
        });

        rates.handle(Message::Refresh);
        let effect = rates.handle(Message::Loaded {
            from: code("USD"),
            to: code("RUB"),
            result: Err(BackendError::Unreachable("refused".into())),
        });

        assert!(matches!(effect, Effect::Failed(BackendError::Unreachable(_))));
        assert!(rates.rows().is_empty());
        assert!(!rates.is_loading());
    }

    #[test]
    fn pair_selection_fetches_once() {
        let mut rates = State::new(code("USD"), code("RUB"));
        let effect = rates.handle(Message::PairSelected {
            from: code("btc"),
            to: code("usd"),
        });
        assert_eq!(
            effect,
            Effect::Fetch {
                from: code("BTC"),
                to: code("USD")
            }
        );
    }
}
