// SPDX-License-Identifier: MPL-2.0
//! Line commands typed on standard input.
//!
//! Each line maps to exactly one [`Message`]:
//!
//! | Command                | Effect                                   |
//! |------------------------|------------------------------------------|
//! | `amount <value>`       | edit the amount (converts when non-empty)|
//! | `from <CODE>`          | select the source currency               |
//! | `to <CODE>`            | select the target currency               |
//! | `convert`              | convert now                              |
//! | `swap`                 | exchange the codes and convert           |
//! | `rates [<FROM> <TO>]`  | open the rates page, optionally a pair   |
//! | `rates from <CODE>`    | change the rates page's source currency  |
//! | `rates to <CODE>`      | change the rates page's target currency  |
//! | `theme dark\|light\|auto` | change the theme                      |
//! | `lang ru\|en`          | change the language                      |
//! | `page <name>`          | converter, rates, settings or about      |
//! | `refresh`              | repeat the active page's request         |
//! | `dismiss`              | close all notifications                  |
//! | `quit`                 | leave                                    |

use crate::domain::currency::CurrencyCode;
use crate::domain::settings::{Language, ThemeMode};
use crate::ui::notifications::NotificationMessage;
use crate::ui::{converter, rates};

use super::{session, Message, Screen};

/// Parses one input line.
///
/// Blank lines yield `Ok(None)`. Anything unrecognized yields the trimmed
/// line as the error.
pub fn parse(line: &str) -> Result<Option<Message>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = words.collect();
    let reject = || line.to_string();

    let message = match (command.as_str(), args.as_slice()) {
        ("amount", []) => Message::Converter(converter::Message::AmountChanged(String::new())),
        ("amount", [value]) => {
            Message::Converter(converter::Message::AmountChanged((*value).to_string()))
        }
        ("from", [code]) => Message::Converter(converter::Message::FromSelected(
            CurrencyCode::new(code),
        )),
        ("to", [code]) => {
            Message::Converter(converter::Message::ToSelected(CurrencyCode::new(code)))
        }
        ("convert", []) => Message::Converter(converter::Message::Convert),
        ("swap", []) => Message::Converter(converter::Message::Swap),
        ("rates", []) => Message::SwitchScreen(Screen::Rates),
        ("rates", [side, code]) if side.eq_ignore_ascii_case("from") => {
            Message::Rates(rates::Message::FromSelected(CurrencyCode::new(code)))
        }
        ("rates", [side, code]) if side.eq_ignore_ascii_case("to") => {
            Message::Rates(rates::Message::ToSelected(CurrencyCode::new(code)))
        }
        ("rates", [from, to]) => Message::Rates(rates::Message::PairSelected {
            from: CurrencyCode::new(from),
            to: CurrencyCode::new(to),
        }),
        ("theme", [mode]) => {
            let mode: ThemeMode = mode.parse().map_err(|_| reject())?;
            Message::Settings(session::Message::SetTheme(mode))
        }
        ("lang", [code]) => {
            let language: Language = code.parse().map_err(|_| reject())?;
            Message::Settings(session::Message::SetLanguage(language))
        }
        ("page", [name]) => Message::SwitchScreen(name.parse().map_err(|_| reject())?),
        ("refresh", []) => Message::Refresh,
        ("dismiss", []) => Message::Notification(NotificationMessage::DismissAll),
        ("quit" | "exit", []) => Message::Quit,
        _ => return Err(reject()),
    };

    Ok(Some(message))
}
