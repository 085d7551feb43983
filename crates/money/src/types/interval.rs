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

//! The monetary interval field type.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::{MONETARY_INTERVAL_TYPE_NAME, Type};
use crate::{
    currency::Currency,
    error::{IntervalError, MoneyError, TransformValueError},
    interval::{Interval, MonetaryInterval},
    money::Money,
    value::Value,
};

/// A monetary interval field constrained to one currency.
///
/// Strings use the interval grammar with plain decimal bounds (`[1,2]`, `(0.5,10]`), each bound
/// taken as an amount in the pinned currency. Fully qualified bounds (`[EUR 1,EUR 2]`) are
/// accepted when they match the pinned currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonetaryIntervalType {
    pub currency: Currency,
}

impl MonetaryIntervalType {
    #[must_use]
    pub const fn new(currency: Currency) -> Self {
        Self { currency }
    }

    fn parse(&self, s: &str) -> Result<MonetaryInterval, IntervalError> {
        match Interval::<Decimal>::from_str(s) {
            Ok(interval) => MonetaryInterval::new_checked(
                Money::new_checked(interval.left, self.currency)?,
                Money::new_checked(interval.right, self.currency)?,
                interval.notation,
            ),
            Err(IntervalError::Bound { .. }) => {
                let interval = MonetaryInterval::from_str(s)?;
                self.check_currency(&interval)?;
                Ok(interval)
            }
            Err(e) => Err(e),
        }
    }

    fn check_currency(&self, interval: &MonetaryInterval) -> Result<(), IntervalError> {
        for bound in [interval.left(), interval.right()] {
            if bound.currency() != self.currency {
                return Err(MoneyError::CurrencyMismatch {
                    expected: self.currency.code,
                    actual: bound.currency().code,
                }
                .into());
            }
        }
        MonetaryInterval::new_checked(interval.left(), interval.right(), interval.notation())
            .map(|_| ())
    }
}

impl Type for MonetaryIntervalType {
    type Output = MonetaryInterval;

    fn name(&self) -> &'static str {
        MONETARY_INTERVAL_TYPE_NAME
    }

    fn transform(&self, value: &Value) -> Result<Option<MonetaryInterval>, TransformValueError> {
        let result = match value {
            Value::Interval(interval) => self.check_currency(interval).map(|()| *interval),
            Value::String(s) => self.parse(s),
            _ => return Err(self.error(value)),
        };

        result.map(Some).map_err(|e| {
            log::debug!("{e}");
            self.error(value)
        })
    }

    fn assert(&self, value: &Value) -> Result<Option<MonetaryInterval>, TransformValueError> {
        match value {
            Value::Interval(interval) if self.check_currency(interval).is_ok() => {
                Ok(Some(*interval))
            }
            _ => Err(self.error(value)),
        }
    }

    fn compare(&self, a: &MonetaryInterval, b: &MonetaryInterval) -> bool {
        a == b
    }

    fn format(&self, value: &MonetaryInterval) -> String {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{interval::IntervalNotation, stubs::*};

    fn interval(
        left: Decimal,
        right: Decimal,
        currency: Currency,
        notation: IntervalNotation,
    ) -> MonetaryInterval {
        MonetaryInterval::new(
            Money::new(left, currency),
            Money::new(right, currency),
            notation,
        )
    }

    #[rstest]
    #[case("[1,2]", dec!(1), dec!(2), IntervalNotation::Closed)]
    #[case("(1,2)", dec!(1), dec!(2), IntervalNotation::Open)]
    #[case("(0.5, 10]", dec!(0.5), dec!(10), IntervalNotation::LeftOpen)]
    #[case("[EUR 1,EUR 2)", dec!(1), dec!(2), IntervalNotation::RightOpen)]
    fn test_transform_string(
        eur: Currency,
        #[case] input: &str,
        #[case] left: Decimal,
        #[case] right: Decimal,
        #[case] notation: IntervalNotation,
    ) {
        let ty = MonetaryIntervalType::new(eur);
        assert_eq!(
            ty.transform(&Value::from(input)).unwrap(),
            Some(interval(left, right, eur, notation))
        );
    }

    #[rstest]
    fn test_transform_existing_interval(eur: Currency) {
        let ty = MonetaryIntervalType::new(eur);
        let value = MonetaryInterval::from_str("[EUR 1,EUR 2]").unwrap();
        assert_eq!(
            ty.transform(&Value::from(value)).unwrap(),
            Some(interval(dec!(1), dec!(2), eur, IntervalNotation::Closed))
        );
    }

    #[rstest]
    fn test_transform_error(eur: Currency) {
        let ty = MonetaryIntervalType::new(eur);
        let err = ty.transform(&Value::from("foobar")).unwrap_err();
        assert_eq!(
            err,
            TransformValueError {
                type_name: "monetary-interval",
                value: "'foobar'".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Unable to transform into [monetary-interval] from ['foobar']"
        );
    }

    #[rstest]
    fn test_transform_rejects_non_string(eur: Currency) {
        let err = MonetaryIntervalType::new(eur)
            .transform(&Value::from(123_i64))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unable to transform into [monetary-interval] from [123]"
        );
    }

    #[rstest]
    fn test_transform_rejects_other_currency(eur: Currency, usd: Currency) {
        let ty = MonetaryIntervalType::new(eur);
        let value = interval(dec!(1), dec!(2), usd, IntervalNotation::Closed);
        let err = ty.transform(&Value::from(value)).unwrap_err();
        assert_eq!(
            err,
            TransformValueError {
                type_name: "monetary-interval",
                value: "[USD 1.00,USD 2.00]".to_string(),
            }
        );
        assert!(ty.transform(&Value::from("[USD 1,USD 2]")).is_err());
    }

    #[rstest]
    #[case("[2,1]")]
    #[case("[1.005,2]")]
    #[case("[1,2,3]")]
    #[case("[a,b]")]
    #[case("")]
    fn test_transform_rejects_bad_strings(eur: Currency, #[case] input: &str) {
        let ty = MonetaryIntervalType::new(eur);
        assert!(ty.transform(&Value::from(input)).is_err());
    }

    #[rstest]
    #[case("[1,2]", "[1,2]", true)]
    #[case("(1,2)", "(1,2)", true)]
    #[case("[1,2]", "(1,2)", false)]
    #[case("[1,2]", "[1,3]", false)]
    fn test_compare(eur: Currency, #[case] a: &str, #[case] b: &str, #[case] expected: bool) {
        let ty = MonetaryIntervalType::new(eur);
        let a = ty.transform(&Value::from(a)).unwrap().unwrap();
        let b = ty.transform(&Value::from(b)).unwrap().unwrap();
        assert_eq!(ty.compare(&a, &b), expected);
        assert!(ty.compare(&a, &a));
    }

    #[rstest]
    #[case("[1,2]", "EUR", "[EUR 1.00,EUR 2.00]")]
    #[case("(1,2)", "GBP", "(GBP 1.00,GBP 2.00)")]
    #[case("(1,2]", "JPY", "(JPY 1,JPY 2]")]
    fn test_format(#[case] input: &str, #[case] code: &str, #[case] expected: &str) {
        let ty = MonetaryIntervalType::new(Currency::from_str(code).unwrap());
        let value = ty.transform(&Value::from(input)).unwrap().unwrap();
        assert_eq!(ty.format(&value), expected);
    }

    #[rstest]
    fn test_assert(interval_type_gbp: MonetaryIntervalType, interval_gbp_1_2: MonetaryInterval) {
        assert_eq!(
            interval_type_gbp
                .assert(&Value::from(interval_gbp_1_2))
                .unwrap(),
            Some(interval_gbp_1_2)
        );
    }

    #[rstest]
    fn test_assert_rejects(interval_type_gbp: MonetaryIntervalType, eur: Currency) {
        let value = Value::from("not interval");
        assert_eq!(
            interval_type_gbp.assert(&value).unwrap_err(),
            TransformValueError::new("monetary-interval", &value)
        );

        let value = Value::from(interval(dec!(1), dec!(2), eur, IntervalNotation::Closed));
        assert_eq!(
            interval_type_gbp.assert(&value).unwrap_err(),
            TransformValueError::new("monetary-interval", &value)
        );
    }
}
