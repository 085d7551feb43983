// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Parses loosely shaped input into [`Money`].
//!
//! Strategies are tried in order, and the first one to match decides the outcome:
//!
//! 1. An existing [`Value::Money`] is returned unchanged.
//! 2. A bare number (or a string holding only a number) is ambiguous and rejected.
//! 3. Structured text `CCC amount` (e.g. `EUR 1.50`), independent of locale.
//! 4. Locale-formatted text (e.g. `£1.23`, `€1,234.56`).
//!
//! Amounts are never rounded: excess precision for the resolved currency is an error.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::{
    currency::Currency,
    error::{MoneyError, ParseError},
    locale::{CurrencyFormatter, Locale},
    money::Money,
    value::{Value, parse_decimal_str},
};

/// `CCC amount` with an unsigned amount. Any number of fractional digits matches, and the
/// resolved currency's precision decides whether they are acceptable (`EUR 100.000` is
/// `EUR 100.00`, `EUR 100.005` is a precision loss).
static STRUCTURED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<currency>[A-Z]{3}) (?P<amount>\d+(?:\.\d+)?)$")
        .expect("valid structured money regex")
});

/// Parses [`Value`]s into [`Money`] using a fixed [`Locale`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoneyParser {
    formatter: CurrencyFormatter,
}

impl MoneyParser {
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self {
            formatter: CurrencyFormatter::new(locale),
        }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.formatter.locale()
    }

    /// Parses `value` into [`Money`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `value` is a bare number without a currency.
    /// - The resolved amount has more decimal places than its currency allows.
    /// - `value` matches no supported money notation.
    pub fn parse(&self, value: &Value) -> Result<Money, ParseError> {
        let text = match value {
            Value::Money(money) => return Ok(*money),
            Value::Int(_) | Value::Float(_) | Value::Decimal(_) => {
                return Err(ParseError::Ambiguous {
                    input: value.export(),
                });
            }
            Value::String(s) => s.as_str(),
            _ => {
                log::debug!("Cannot parse {} value as money", value.type_name());
                return Err(unparseable(value));
            }
        };

        if parse_decimal_str(text.trim()).is_some() {
            return Err(ParseError::Ambiguous {
                input: value.export(),
            });
        }

        if let Some(caps) = STRUCTURED_RE.captures(text) {
            log::trace!("Parsing '{text}' as structured money");
            let currency = Currency::try_from_code(&caps["currency"]).ok_or_else(|| {
                log::debug!("Unknown currency code in '{text}'");
                unparseable(value)
            })?;
            let amount = Decimal::from_str_exact(&caps["amount"]).map_err(|_| unparseable(value))?;
            return build(value, amount, currency);
        }

        if let Some((amount, currency)) = self.formatter.parse(text) {
            log::trace!("Parsing '{text}' as {} money", self.locale());
            return build(value, amount, currency);
        }

        log::debug!("No money notation matched '{text}'");
        Err(unparseable(value))
    }
}

/// Parses `value` into [`Money`] with the reference locale.
///
/// # Errors
///
/// Returns an error if `value` cannot be parsed. See [`MoneyParser::parse`].
pub fn parse_money(value: &Value) -> Result<Money, ParseError> {
    MoneyParser::default().parse(value)
}

fn unparseable(value: &Value) -> ParseError {
    ParseError::Unparseable {
        input: value.export(),
    }
}

fn build(value: &Value, amount: Decimal, currency: Currency) -> Result<Money, ParseError> {
    Money::new_checked(amount, currency).map_err(|e| match e {
        MoneyError::PrecisionLoss { .. } => ParseError::PrecisionLoss {
            input: value.export(),
            source: e,
        },
        _ => unparseable(value),
    })
}
