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

//! The money field type reading numbers as minor units of a pinned currency.

use super::{
    MONEY_TYPE_NAME, Type,
    monetary::{assert_pinned, transform_pinned},
};
use crate::{
    currency::Currency,
    error::TransformValueError,
    locale::{CurrencyFormatter, Locale},
    money::Money,
    value::Value,
};

/// A money field constrained to one currency, reading numbers as minor units.
///
/// `150` in EUR is `1.50 EUR`. Fractional minor amounts are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinorMonetaryType {
    pub currency: Currency,
    pub locale: Locale,
}

impl MinorMonetaryType {
    #[must_use]
    pub fn new(currency: Currency) -> Self {
        Self::with_locale(currency, Locale::default())
    }

    #[must_use]
    pub const fn with_locale(currency: Currency, locale: Locale) -> Self {
        Self { currency, locale }
    }
}

impl Type for MinorMonetaryType {
    type Output = Money;

    fn name(&self) -> &'static str {
        MONEY_TYPE_NAME
    }

    fn transform(&self, value: &Value) -> Result<Option<Money>, TransformValueError> {
        transform_pinned(self, self.currency, value, Money::of_minor)
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

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::stubs::*;

    #[rstest]
    #[case(Value::from(150_i64), "EUR", dec!(1.50))]
    #[case(Value::from(150_i64), "GBP", dec!(1.50))]
    #[case(Value::from("150"), "EUR", dec!(1.50))]
    #[case(Value::from("100.000"), "EUR", dec!(1.00))]
    #[case(Value::from(150.0), "EUR", dec!(1.50))]
    #[case(Value::from(1500_i64), "JPY", dec!(1500))]
    #[case(Value::from(1500_i64), "IQD", dec!(1.500))]
    fn test_transform(#[case] value: Value, #[case] code: &str, #[case] amount: Decimal) {
        let currency = Currency::from_str(code).unwrap();
        let ty = MinorMonetaryType::new(currency);
        let money = ty.transform(&value).unwrap().unwrap();
        assert_eq!(money, Money::new(amount, currency));
    }

    #[rstest]
    fn test_transform_existing_money(
        minor_monetary_type_eur: MinorMonetaryType,
        money_eur_100: Money,
    ) {
        assert_eq!(
            minor_monetary_type_eur
                .transform(&Value::from(money_eur_100))
                .unwrap(),
            Some(money_eur_100)
        );
    }

    #[rstest]
    #[case(Value::from("foobar"))]
    #[case(Value::from("EUR 123.456"))]
    #[case(Value::from("€123.456"))]
    #[case(Value::from("€foobar"))]
    #[case(Value::from("EUR foobar"))]
    #[case(Value::from("1 EUR"))]
    #[case(Value::from("GBP"))]
    #[case(Value::from("150.5"))]
    #[case(Value::List(vec![]))]
    #[case(Value::Null)]
    #[case(Value::from(Money::new(dec!(1), Currency::USD())))]
    fn test_transform_error(minor_monetary_type_eur: MinorMonetaryType, #[case] value: Value) {
        let err = minor_monetary_type_eur.transform(&value).unwrap_err();
        assert_eq!(err, TransformValueError::new("money", &value));
        assert_eq!(
            err.to_string(),
            format!("Unable to transform into [money] from [{}]", value.export())
        );
    }

    #[rstest]
    fn test_assert(minor_monetary_type_eur: MinorMonetaryType, money_eur_100: Money) {
        assert!(
            minor_monetary_type_eur
                .assert(&Value::from(money_eur_100))
                .is_ok()
        );
        assert!(minor_monetary_type_eur.assert(&Value::from(150_i64)).is_err());
        assert!(
            minor_monetary_type_eur
                .assert(&Value::from(Money::new(dec!(1), Currency::USD())))
                .is_err()
        );
    }

    #[rstest]
    fn test_compare(minor_monetary_type_eur: MinorMonetaryType, eur: Currency) {
        let a = Money::of_minor(dec!(100), eur).unwrap();
        let b = Money::of_minor(dec!(100), eur).unwrap();
        assert!(minor_monetary_type_eur.compare(&a, &b));
    }

    #[rstest]
    #[case(dec!(123), "EUR", "€1.23")]
    #[case(dec!(123), "GBP", "£1.23")]
    #[case(dec!(1000000), "EUR", "€10,000.00")]
    fn test_format(
        minor_monetary_type_eur: MinorMonetaryType,
        #[case] minor: Decimal,
        #[case] code: &str,
        #[case] expected: &str,
    ) {
        let money = Money::of_minor(minor, Currency::from_str(code).unwrap()).unwrap();
        assert_eq!(minor_monetary_type_eur.format(&money), expected);
    }
}
