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

//! Ordering comparisons between a [`MonetaryInterval`] and a [`Money`] scalar.

use super::{Operator, OperatorOverloader};
use crate::{error::OperatorError, value::Value};

/// Overloads `<`, `>`, `<=` and `>=` for `MonetaryInterval <op> Money`.
///
/// `interval < x` holds when the whole interval lies below `x`; `interval > x` when it lies
/// entirely above.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonetaryIntervalOverloader;

impl MonetaryIntervalOverloader {
    const fn handles(op: Operator) -> bool {
        matches!(op, Operator::Lt | Operator::Gt | Operator::Le | Operator::Ge)
    }
}

impl OperatorOverloader for MonetaryIntervalOverloader {
    fn supports_overloading(&self, left: &Value, right: &Value, operator: &str) -> bool {
        matches!((left, right), (Value::Interval(_), Value::Money(_)))
            && Operator::parse(operator).is_ok_and(Self::handles)
    }

    fn evaluate(&self, left: &Value, right: &Value, operator: &str) -> Result<Value, OperatorError> {
        let op = Operator::parse(operator)?;
        if !Self::handles(op) {
            return Err(OperatorError::UnsupportedOperator(operator.to_string()));
        }

        let (Value::Interval(interval), Value::Money(money)) = (left, right) else {
            return Err(OperatorError::UnsupportedOperands {
                left: left.type_name(),
                right: right.type_name(),
                operator: operator.to_string(),
            });
        };

        let result = match op {
            Operator::Lt => interval.is_less_than(money)?,
            Operator::Le => interval.is_less_than_or_equal_to(money)?,
            Operator::Gt => interval.is_greater_than(money)?,
            Operator::Ge => interval.is_greater_than_or_equal_to(money)?,
            _ => return Err(OperatorError::UnsupportedOperator(operator.to_string())),
        };
        Ok(Value::Bool(result))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{
        currency::Currency, error::MoneyError, interval::MonetaryInterval, money::Money,
        stubs::*,
    };

    #[rstest]
    #[case("[GBP 1,GBP 2]", "<", dec!(3), true)]
    #[case("[GBP 1,GBP 2]", "<=", dec!(2), true)]
    #[case("[GBP 1,GBP 2]", ">", dec!(0.5), true)]
    #[case("[GBP 1,GBP 2]", ">=", dec!(1), true)]
    #[case("[GBP 1,GBP 2]", "<", dec!(2), false)]
    #[case("[GBP 1,GBP 2)", "<", dec!(2), true)]
    #[case("[GBP 1,GBP 2]", ">", dec!(1), false)]
    #[case("(GBP 1,GBP 2]", ">", dec!(1), true)]
    #[case("[GBP 1,GBP 2]", "<=", dec!(1.5), false)]
    #[case("[GBP 1,GBP 2]", ">=", dec!(1.5), false)]
    fn test_comparisons(
        gbp: Currency,
        #[case] interval: &str,
        #[case] operator: &str,
        #[case] scalar: Decimal,
        #[case] expected: bool,
    ) {
        let overloader = MonetaryIntervalOverloader;
        let left = Value::from(MonetaryInterval::from_str(interval).unwrap());
        let right = Value::from(Money::new(scalar, gbp));
        assert!(overloader.supports_overloading(&left, &right, operator));
        assert_eq!(
            overloader.evaluate(&left, &right, operator).unwrap(),
            Value::Bool(expected)
        );
    }

    #[rstest]
    #[case("+")]
    #[case("==")]
    #[case("%")]
    fn test_unsupported_operator(
        interval_gbp_1_2: MonetaryInterval,
        gbp: Currency,
        #[case] operator: &str,
    ) {
        let overloader = MonetaryIntervalOverloader;
        let left = Value::from(interval_gbp_1_2);
        let right = Value::from(Money::new(dec!(1), gbp));
        assert!(!overloader.supports_overloading(&left, &right, operator));
        assert_eq!(
            overloader.evaluate(&left, &right, operator).unwrap_err().to_string(),
            format!("Unsupported operator: {operator}")
        );
    }

    #[rstest]
    fn test_unsupported_operands(interval_gbp_1_2: MonetaryInterval, gbp: Currency) {
        let overloader = MonetaryIntervalOverloader;
        let interval = Value::from(interval_gbp_1_2);
        let money = Value::from(Money::new(dec!(1), gbp));

        assert!(!overloader.supports_overloading(&money, &interval, "<"));
        assert!(!overloader.supports_overloading(&interval, &Value::from(3_i64), "<"));
        assert!(matches!(
            overloader.evaluate(&money, &interval, "<"),
            Err(OperatorError::UnsupportedOperands { .. })
        ));
        assert!(matches!(
            overloader.evaluate(&interval, &Value::from("GBP 3"), "<"),
            Err(OperatorError::UnsupportedOperands { .. })
        ));
    }

    #[rstest]
    fn test_currency_mismatch(interval_gbp_1_2: MonetaryInterval, eur: Currency) {
        let overloader = MonetaryIntervalOverloader;
        let left = Value::from(interval_gbp_1_2);
        let right = Value::from(Money::new(dec!(3), eur));
        assert!(matches!(
            overloader.evaluate(&left, &right, "<"),
            Err(OperatorError::Money(MoneyError::CurrencyMismatch { .. }))
        ));
    }
}
