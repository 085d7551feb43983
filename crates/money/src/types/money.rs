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

//! The unconstrained money field type.

use super::{MONEY_TYPE_NAME, Type};
use crate::{
    error::TransformValueError,
    locale::{CurrencyFormatter, Locale},
    money::Money,
    parser::MoneyParser,
    value::Value,
};

/// A money field accepting any currency.
///
/// Strings are parsed with [`MoneyParser`], either as `CCC amount` or in the locale's notation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoneyType {
    pub locale: Locale,
}

impl MoneyType {
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl Type for MoneyType {
    type Output = Money;

    fn name(&self) -> &'static str {
        MONEY_TYPE_NAME
    }

    fn transform(&self, value: &Value) -> Result<Option<Money>, TransformValueError> {
        MoneyParser::new(self.locale)
            .parse(value)
            .map(Some)
            .map_err(|e| {
                log::debug!("{e}");
                self.error(value)
            })
    }

    fn assert(&self, value: &Value) -> Result<Option<Money>, TransformValueError> {
        match value {
            Value::Money(money) => Ok(Some(*money)),
            _ => Err(self.error(value)),
        }
    }

    fn compare(&self, a: &Money, b: &Money) -> bool {
        a.is_amount_and_currency_equal_to(b)
    }

    fn format(&self, value: &Money) -> String {
        CurrencyFormatter::new(self.locale).format(value)
    }
}
