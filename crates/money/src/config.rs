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

//! Declarative configuration for monetary field types.
//!
//! ```json
//! {"type": "monetary", "currency": "EUR", "locale": "en_GB"}
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::{
    currency::Currency,
    locale::Locale,
    types::{AnyMonetaryType, MinorMonetaryType, MonetaryIntervalType, MonetaryType, MoneyType},
};

/// Configuration describing one monetary field type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MonetaryTypeConfig {
    /// Any currency, parsed from money strings.
    Money {
        #[serde(default)]
        locale: Locale,
    },
    /// Amounts in a pinned currency.
    Monetary {
        currency: Ustr,
        #[serde(default)]
        locale: Locale,
    },
    /// Minor units of a pinned currency.
    MinorMonetary {
        currency: Ustr,
        #[serde(default)]
        locale: Locale,
    },
    /// Intervals in a pinned currency.
    MonetaryInterval { currency: Ustr },
}

impl MonetaryTypeConfig {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid configuration.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the configured field type.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured currency code is unknown.
    pub fn build(&self) -> anyhow::Result<AnyMonetaryType> {
        let ty = match self {
            Self::Money { locale } => MoneyType::new(*locale).into(),
            Self::Monetary { currency, locale } => {
                MonetaryType::with_locale(Currency::from_str(currency)?, *locale).into()
            }
            Self::MinorMonetary { currency, locale } => {
                MinorMonetaryType::with_locale(Currency::from_str(currency)?, *locale).into()
            }
            Self::MonetaryInterval { currency } => {
                MonetaryIntervalType::new(Currency::from_str(currency)?).into()
            }
        };
        log::debug!("Built monetary field type {ty:?}");
        Ok(ty)
    }
}
