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

//! Enum wrappers providing a type-erased view over the concrete monetary field types.
//!
//! `AnyMonetaryType` lets a schema hold heterogeneous monetary fields in one collection
//! (e.g. `Vec<AnyMonetaryType>`), producing [`MonetaryValue`]s.

use std::fmt::Display;

use super::{MinorMonetaryType, MonetaryIntervalType, MonetaryType, MoneyType, Type};
use crate::{
    error::TransformValueError, interval::MonetaryInterval, money::Money, value::Value,
};

/// A value produced by an [`AnyMonetaryType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonetaryValue {
    Money(Money),
    Interval(MonetaryInterval),
}

impl MonetaryValue {
    #[must_use]
    pub const fn as_money(&self) -> Option<&Money> {
        match self {
            Self::Money(money) => Some(money),
            Self::Interval(_) => None,
        }
    }

    #[must_use]
    pub const fn as_interval(&self) -> Option<&MonetaryInterval> {
        match self {
            Self::Money(_) => None,
            Self::Interval(interval) => Some(interval),
        }
    }
}

impl Display for MonetaryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Money(money) => Display::fmt(money, f),
            Self::Interval(interval) => Display::fmt(interval, f),
        }
    }
}

impl From<MonetaryValue> for Value {
    fn from(value: MonetaryValue) -> Self {
        match value {
            MonetaryValue::Money(money) => Self::Money(money),
            MonetaryValue::Interval(interval) => Self::Interval(interval),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnyMonetaryType {
    Money(MoneyType),
    Monetary(MonetaryType),
    MinorMonetary(MinorMonetaryType),
    Interval(MonetaryIntervalType),
}

impl AnyMonetaryType {
    /// Returns `true` if this type produces [`MonetaryValue::Interval`] values.
    #[must_use]
    pub const fn is_interval(&self) -> bool {
        matches!(self, Self::Interval(_))
    }
}

fn money_result(
    result: Result<Option<Money>, TransformValueError>,
) -> Result<Option<MonetaryValue>, TransformValueError> {
    result.map(|money| money.map(MonetaryValue::Money))
}

impl Type for AnyMonetaryType {
    type Output = MonetaryValue;

    fn name(&self) -> &'static str {
        match self {
            Self::Money(ty) => ty.name(),
            Self::Monetary(ty) => ty.name(),
            Self::MinorMonetary(ty) => ty.name(),
            Self::Interval(ty) => ty.name(),
        }
    }

    fn transform(&self, value: &Value) -> Result<Option<MonetaryValue>, TransformValueError> {
        match self {
            Self::Money(ty) => money_result(ty.transform(value)),
            Self::Monetary(ty) => money_result(ty.transform(value)),
            Self::MinorMonetary(ty) => money_result(ty.transform(value)),
            Self::Interval(ty) => ty
                .transform(value)
                .map(|interval| interval.map(MonetaryValue::Interval)),
        }
    }

    fn assert(&self, value: &Value) -> Result<Option<MonetaryValue>, TransformValueError> {
        match self {
            Self::Money(ty) => money_result(ty.assert(value)),
            Self::Monetary(ty) => money_result(ty.assert(value)),
            Self::MinorMonetary(ty) => money_result(ty.assert(value)),
            Self::Interval(ty) => ty
                .assert(value)
                .map(|interval| interval.map(MonetaryValue::Interval)),
        }
    }

    fn compare(&self, a: &MonetaryValue, b: &MonetaryValue) -> bool {
        match (self, a, b) {
            (Self::Money(ty), MonetaryValue::Money(a), MonetaryValue::Money(b)) => ty.compare(a, b),
            (Self::Monetary(ty), MonetaryValue::Money(a), MonetaryValue::Money(b)) => {
                ty.compare(a, b)
            }
            (Self::MinorMonetary(ty), MonetaryValue::Money(a), MonetaryValue::Money(b)) => {
                ty.compare(a, b)
            }
            (Self::Interval(ty), MonetaryValue::Interval(a), MonetaryValue::Interval(b)) => {
                ty.compare(a, b)
            }
            _ => false,
        }
    }

    fn format(&self, value: &MonetaryValue) -> String {
        match (self, value) {
            (Self::Money(ty), MonetaryValue::Money(money)) => ty.format(money),
            (Self::Monetary(ty), MonetaryValue::Money(money)) => ty.format(money),
            (Self::MinorMonetary(ty), MonetaryValue::Money(money)) => ty.format(money),
            (Self::Interval(ty), MonetaryValue::Interval(interval)) => ty.format(interval),
            (_, other) => other.to_string(),
        }
    }
}

impl From<MoneyType> for AnyMonetaryType {
    fn from(ty: MoneyType) -> Self {
        Self::Money(ty)
    }
}

impl From<MonetaryType> for AnyMonetaryType {
    fn from(ty: MonetaryType) -> Self {
        Self::Monetary(ty)
    }
}

impl From<MinorMonetaryType> for AnyMonetaryType {
    fn from(ty: MinorMonetaryType) -> Self {
        Self::MinorMonetary(ty)
    }
}

impl From<MonetaryIntervalType> for AnyMonetaryType {
    fn from(ty: MonetaryIntervalType) -> Self {
        Self::Interval(ty)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{currency::Currency, stubs::*};

    #[rstest]
    fn test_heterogeneous_fields(
        money_type: MoneyType,
        monetary_type_eur: MonetaryType,
        minor_monetary_type_eur: MinorMonetaryType,
        interval_type_gbp: MonetaryIntervalType,
        eur: Currency,
    ) {
        let fields: Vec<AnyMonetaryType> = vec![
            money_type.into(),
            monetary_type_eur.into(),
            minor_monetary_type_eur.into(),
            interval_type_gbp.into(),
        ];
        let inputs = ["EUR 1.50", "1.50", "150", "[1,2]"];

        let values: Vec<MonetaryValue> = fields
            .iter()
            .zip(inputs)
            .map(|(field, input)| field.transform(&Value::from(input)).unwrap().unwrap())
            .collect();

        let expected = MonetaryValue::Money(Money::new(dec!(1.5), eur));
        assert_eq!(values[0], expected);
        assert_eq!(values[1], expected);
        assert_eq!(values[2], expected);
        assert_eq!(
            values[3].to_string(),
            "[GBP 1.00,GBP 2.00]"
        );
        assert_eq!(fields[3].format(&values[3]), "[GBP 1.00,GBP 2.00]");
        assert_eq!(fields[0].format(&values[0]), "€1.50");
    }

    #[rstest]
    fn test_names(money_type: MoneyType, interval_type_gbp: MonetaryIntervalType) {
        assert_eq!(AnyMonetaryType::from(money_type).name(), "money");
        assert_eq!(
            AnyMonetaryType::from(interval_type_gbp).name(),
            "monetary-interval"
        );
        assert!(AnyMonetaryType::from(interval_type_gbp).is_interval());
    }

    #[rstest]
    fn test_compare_mismatched_variants(
        money_type: MoneyType,
        money_eur_100: Money,
        interval_gbp_1_2: MonetaryInterval,
    ) {
        let ty = AnyMonetaryType::from(money_type);
        let money = MonetaryValue::Money(money_eur_100);
        let interval = MonetaryValue::Interval(interval_gbp_1_2);
        assert!(ty.compare(&money, &money));
        assert!(!ty.compare(&money, &interval));
        assert!(!ty.compare(&interval, &interval));
    }

    #[rstest]
    fn test_assert_and_value_conversion(
        interval_type_gbp: MonetaryIntervalType,
        interval_gbp_1_2: MonetaryInterval,
    ) {
        let ty = AnyMonetaryType::from(interval_type_gbp);
        let value = ty.assert(&Value::from(interval_gbp_1_2)).unwrap().unwrap();
        assert_eq!(value.as_interval(), Some(&interval_gbp_1_2));
        assert!(value.as_money().is_none());
        assert_eq!(Value::from(value), Value::Interval(interval_gbp_1_2));
        assert!(ty.assert(&Value::from("[1,2]")).is_err());
    }
}
