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

//! Locale-aware currency formatting and parsing.
//!
//! Only the handful of locales monetary fields are rendered in are supported. Currencies
//! without a symbol in a locale render as their ISO code followed by a no-break space.

use std::{str::FromStr, sync::LazyLock};

use ahash::AHashMap;
use axiom_core::Separable;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use ustr::Ustr;

use crate::{currency::Currency, money::Money};

/// No-break space separating an ISO code from the amount.
pub const NBSP: char = '\u{a0}';

const EN_GB_SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "A$"),
    ("BRL", "R$"),
    ("CAD", "CA$"),
    ("CNY", "CN¥"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("HKD", "HK$"),
    ("ILS", "₪"),
    ("INR", "₹"),
    ("JPY", "JP¥"),
    ("KRW", "₩"),
    ("MXN", "MX$"),
    ("NZD", "NZ$"),
    ("TWD", "NT$"),
    ("USD", "US$"),
    ("VND", "₫"),
];

const EN_US_SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "A$"),
    ("BRL", "R$"),
    ("CAD", "CA$"),
    ("CNY", "CN¥"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("HKD", "HK$"),
    ("ILS", "₪"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("MXN", "MX$"),
    ("NZD", "NZ$"),
    ("TWD", "NT$"),
    ("USD", "$"),
    ("VND", "₫"),
];

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,3}(?:,\d{3})+|\d+)(?:\.(\d+))?$").expect("valid number regex")
});

/// Symbol lookups for one locale.
#[derive(Debug)]
struct SymbolTable {
    by_code: AHashMap<Ustr, &'static str>,
    // Longest symbol first so `US$` wins over `$`.
    by_symbol: Vec<(&'static str, Ustr)>,
}

impl SymbolTable {
    fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        let by_code = entries
            .iter()
            .map(|(code, symbol)| (Ustr::from(*code), *symbol))
            .collect();
        let mut by_symbol: Vec<_> = entries
            .iter()
            .map(|(code, symbol)| (*symbol, Ustr::from(*code)))
            .collect();
        by_symbol.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));
        Self { by_code, by_symbol }
    }
}

static EN_GB_TABLE: LazyLock<SymbolTable> = LazyLock::new(|| SymbolTable::new(EN_GB_SYMBOLS));
static EN_US_TABLE: LazyLock<SymbolTable> = LazyLock::new(|| SymbolTable::new(EN_US_SYMBOLS));

/// A supported formatting locale.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum Locale {
    /// The reference locale.
    #[default]
    #[strum(serialize = "en_GB")]
    #[serde(rename = "en_GB")]
    EnGb,
    #[strum(serialize = "en_US")]
    #[serde(rename = "en_US")]
    EnUs,
}

impl Locale {
    fn table(self) -> &'static SymbolTable {
        match self {
            Self::EnGb => &EN_GB_TABLE,
            Self::EnUs => &EN_US_TABLE,
        }
    }

    /// Returns the symbol for `currency` in this locale, if it has one.
    #[must_use]
    pub fn symbol(self, currency: &Currency) -> Option<&'static str> {
        self.table().by_code.get(&currency.code).copied()
    }
}

/// Formats and parses money amounts for a [`Locale`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CurrencyFormatter {
    locale: Locale,
}

impl CurrencyFormatter {
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Formats `money` with its currency symbol and grouped digits, e.g. `€1,234.56`.
    #[must_use]
    pub fn format(&self, money: &Money) -> String {
        let currency = money.currency();
        let sign = if money.is_negative() { "-" } else { "" };
        let digits = money.amount().abs().separate_with_commas();
        match self.locale.symbol(&currency) {
            Some(symbol) => format!("{sign}{symbol}{digits}"),
            None => format!("{sign}{}{NBSP}{digits}", currency.code),
        }
    }

    /// Parses a locale-formatted amount such as `£1.23`, `-€1,000.50` or `CHF 12`.
    ///
    /// Returns the exact amount and resolved currency; no precision checks are applied.
    #[must_use]
    pub fn parse(&self, input: &str) -> Option<(Decimal, Currency)> {
        let trimmed = input.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (currency, number) = self.split_currency(rest)?;
        let caps = NUMBER_RE.captures(number)?;
        let integer = caps[1].replace(',', "");
        let literal = match caps.get(2) {
            Some(fraction) => format!("{integer}.{}", fraction.as_str()),
            None => integer,
        };

        let amount = Decimal::from_str(&literal).ok()?;
        Some((if negative { -amount } else { amount }, currency))
    }

    fn split_currency<'a>(&self, input: &'a str) -> Option<(Currency, &'a str)> {
        let table = self.locale.table();
        for (symbol, code) in &table.by_symbol {
            if let Some(rest) = input.strip_prefix(symbol) {
                return Some((Currency::try_from_code(code)?, rest));
            }
        }

        let code = input.get(..3)?;
        let rest = input[3..].strip_prefix([' ', NBSP])?;
        Some((Currency::try_from_code(code)?, rest))
    }
}
