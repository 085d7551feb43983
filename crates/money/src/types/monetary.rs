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

//! The money field type pinned to a single currency.

use rust_decimal::Decimal;

use super::{MONEY_TYPE_NAME, Type};
use crate::{
    currency::Currency,
    error::{MoneyError, TransformValueError},
    locale::{CurrencyFormatter, Locale},
    money::Money,
    value::Value,
};

/// A money field constrained to one currency.
///
/// Numbers (and numeric strings) are read as an amount in the pinned currency; existing
/// [`Money`] values are accepted only in that currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonetaryType {
    pub currency: Currency,
    pub locale: Locale,
}

impl MonetaryType {
    #[must_use]
    pub fn new(currency: Currency) -> Self {
        Self::with_locale(currency, Locale::default())
    }

    #[must_use]
    pub const fn with_locale(currency: Currency, locale: Locale) -> Self {
        Self { currency, locale }
    }
}

/// Coerces `value` into money of `currency`, building numeric input with `build`.
pub(crate) fn transform_pinned<T, F>(
    ty: &T,
    currency: Currency,
    value: &Value,
    build: F,
) -> Result<Option<Money>, TransformValueError>
where
    T: Type + ?Sized,
    F: FnOnce(Decimal, Currency) -> Result<Money, MoneyError>,
{
    if let Value::Money(money) = value {
        return assert_pinned(ty, currency, value, money);
    }

    let amount = value.as_decimal().ok_or_else(|| ty.error(value))?;
    build(amount, currency).map(Some).map_err(|e| {
        log::debug!("Cannot build {currency} money from {}: {e}", value.export());
        ty.error(value)
    })
}

/// Accepts `money` only if it is denominated in `currency`.
pub(crate) fn assert_pinned<T: Type + ?Sized>(
    ty: &T,
    currency: Currency,
    value: &Value,
    money: &Money,
) -> Result<Option<Money>, TransformValueError> {
    if money.currency() == currency {
        Ok(Some(*money))
    } else {
        log::debug!(
            "{}",
            MoneyError::CurrencyMismatch {
                expected: currency.code,
                actual: money.currency().code,
            }
        );
        Err(ty.error(value))
    }
}

impl Type for MonetaryType {
    type Output = Money;

    fn name(&self) -> &'static str {
        MONEY_TYPE_NAME
    }

    fn transform(&self, value: &Value) -> Result<Option<Money>, TransformValueError> {
        transform_pinned(self, self.currency, value, Money::new_checked)
    }

    fn assert(&self, value: &Value) -> Result<Option<Money>, TransformValueError> {
        match value {
            Value::Money(money) => assert_pinned(self, self.currency, value, money),
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
