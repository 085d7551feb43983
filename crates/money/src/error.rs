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

//! Error types for monetary values, intervals, parsing, schema transforms and operators.
//!
//! Every error renders a deterministic message: identical input always yields an identical
//! message, so callers can assert on exact strings.

use rust_decimal::Decimal;
use thiserror::Error;
use ustr::Ustr;

use crate::value::Value;

/// Errors raised by [`Money`](crate::money::Money) construction and arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Unknown currency code '{0}'")]
    UnknownCurrency(String),

    #[error(
        "Amount {amount} cannot be represented in {currency} without rounding ({precision} decimal places)"
    )]
    PrecisionLoss {
        amount: Decimal,
        currency: Ustr,
        precision: u8,
    },

    #[error("Mismatching currencies: expected {expected}, got {actual}")]
    CurrencyMismatch { expected: Ustr, actual: Ustr },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow")]
    Overflow,
}

/// Errors raised when building or parsing an interval.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("Invalid interval notation '{0}'")]
    Syntax(String),

    #[error("Invalid interval bound '{bound}': {reason}")]
    Bound { bound: String, reason: String },

    #[error("Interval left bound {left} is greater than right bound {right}")]
    Inverted { left: String, right: String },

    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// The reason a value could not be parsed as money.
///
/// Each variant carries the bounded rendering of the offending input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Could not parse [{input}] as money")]
    Unparseable { input: String },

    #[error("Could not parse [{input}] as money: numeric value without a currency")]
    Ambiguous { input: String },

    #[error("Could not parse [{input}] as money: {source}")]
    PrecisionLoss {
        input: String,
        #[source]
        source: MoneyError,
    },
}

impl ParseError {
    /// Returns the bounded rendering of the input which failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::Unparseable { input }
            | Self::Ambiguous { input }
            | Self::PrecisionLoss { input, .. } => input,
        }
    }
}

/// The single error kind reported by every schema [`Type`](crate::types::Type) operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unable to transform into [{type_name}] from [{value}]")]
pub struct TransformValueError {
    /// The declared type name (e.g. "money").
    pub type_name: &'static str,
    /// The bounded rendering of the offending input.
    pub value: String,
}

impl TransformValueError {
    /// Creates a new [`TransformValueError`] for `value`.
    #[must_use]
    pub fn new(type_name: &'static str, value: &Value) -> Self {
        Self {
            type_name,
            value: value.export(),
        }
    }
}

/// Errors raised by operator overload evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperatorError {
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    #[error("Unsupported operands for `{operator}`: {left} and {right}")]
    UnsupportedOperands {
        left: &'static str,
        right: &'static str,
        operator: String,
    },

    #[error("No overloader supports {left} {operator} {right}")]
    NoOverloader {
        left: &'static str,
        right: &'static str,
        operator: String,
    },

    #[error(transparent)]
    Money(#[from] MoneyError),
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    fn test_transform_value_error_message() {
        let err = TransformValueError::new("money", &Value::from("foobar"));
        assert_eq!(
            err.to_string(),
            "Unable to transform into [money] from ['foobar']"
        );
    }

    #[rstest]
    fn test_transform_value_error_equality() {
        let a = TransformValueError::new("money", &Value::Int(123));
        let b = TransformValueError::new("money", &Value::Int(123));
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "Unable to transform into [money] from [123]");
    }

    #[rstest]
    fn test_parse_error_messages() {
        let input = "'EUR 123.456'".to_string();
        let err = ParseError::PrecisionLoss {
            input: input.clone(),
            source: MoneyError::PrecisionLoss {
                amount: dec!(123.456),
                currency: Ustr::from("EUR"),
                precision: 2,
            },
        };
        assert_eq!(err.input(), input);
        assert_eq!(
            err.to_string(),
            "Could not parse ['EUR 123.456'] as money: Amount 123.456 cannot be represented in EUR without rounding (2 decimal places)"
        );
    }

    #[rstest]
    fn test_operator_error_messages() {
        assert_eq!(
            OperatorError::UnsupportedOperator("%".to_string()).to_string(),
            "Unsupported operator: %"
        );
        let mismatch = OperatorError::from(MoneyError::CurrencyMismatch {
            expected: Ustr::from("EUR"),
            actual: Ustr::from("USD"),
        });
        assert_eq!(
            mismatch.to_string(),
            "Mismatching currencies: expected EUR, got USD"
        );
    }
}
