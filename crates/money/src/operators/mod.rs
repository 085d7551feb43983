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

//! Operator overloads for monetary values.
//!
//! An [`OperatorOverloader`] declares which operand shapes and operators it handles and
//! evaluates them. The [`OperatorRegistry`] picks the first overloader supporting a pair.

pub mod interval;
pub mod money;

use std::fmt::Debug;

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{error::OperatorError, value::Value};

pub use self::{interval::MonetaryIntervalOverloader, money::MoneyOverloader};

/// A binary operator understood by the overloaders.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "!=")]
    Ne,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = ">")]
    Gt,
    #[strum(serialize = "<=")]
    Le,
    #[strum(serialize = ">=")]
    Ge,
}

impl Operator {
    /// Parses an operator symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if `symbol` is not a known operator.
    pub fn parse(symbol: &str) -> Result<Self, OperatorError> {
        symbol
            .parse()
            .map_err(|_| OperatorError::UnsupportedOperator(symbol.to_string()))
    }

    /// Returns `true` for operators producing a boolean.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::Ne | Self::Lt | Self::Gt | Self::Le | Self::Ge
        )
    }
}

/// Evaluates binary operators for specific operand shapes.
pub trait OperatorOverloader: Send + Sync + Debug {
    /// Returns `true` if this overloader handles `left <operator> right`.
    fn supports_overloading(&self, left: &Value, right: &Value, operator: &str) -> bool;

    /// Evaluates `left <operator> right`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `operator` is not handled by this overloader.
    /// - The operands are not of the shapes this overloader handles.
    /// - The underlying monetary operation fails (e.g. mismatching currencies).
    fn evaluate(&self, left: &Value, right: &Value, operator: &str) -> Result<Value, OperatorError>;
}

/// An ordered list of [`OperatorOverloader`]s.
#[derive(Debug)]
pub struct OperatorRegistry {
    overloaders: Vec<Box<dyn OperatorOverloader>>,
}

impl OperatorRegistry {
    /// Creates a new empty [`OperatorRegistry`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            overloaders: Vec::new(),
        }
    }

    /// Appends `overloader`; earlier registrations take precedence.
    pub fn register(&mut self, overloader: Box<dyn OperatorOverloader>) {
        log::debug!("Registered operator overloader {overloader:?}");
        self.overloaders.push(overloader);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.overloaders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overloaders.is_empty()
    }

    /// Returns `true` if any registered overloader handles `left <operator> right`.
    #[must_use]
    pub fn supports(&self, left: &Value, right: &Value, operator: &str) -> bool {
        self.overloaders
            .iter()
            .any(|o| o.supports_overloading(left, right, operator))
    }

    /// Evaluates `left <operator> right` with the first overloader supporting it.
    ///
    /// # Errors
    ///
    /// Returns an error if no overloader supports the operation, or if evaluation fails.
    pub fn evaluate(
        &self,
        left: &Value,
        right: &Value,
        operator: &str,
    ) -> Result<Value, OperatorError> {
        let overloader = self
            .overloaders
            .iter()
            .find(|o| o.supports_overloading(left, right, operator))
            .ok_or_else(|| OperatorError::NoOverloader {
                left: left.type_name(),
                right: right.type_name(),
                operator: operator.to_string(),
            })?;

        log::trace!(
            "Evaluating {} {operator} {} with {overloader:?}",
            left.type_name(),
            right.type_name()
        );
        overloader.evaluate(left, right, operator)
    }
}

impl Default for OperatorRegistry {
    /// Creates a registry holding the money and monetary interval overloaders.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(MoneyOverloader));
        registry.register(Box::new(MonetaryIntervalOverloader));
        registry
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;
    use rust_decimal_macros::dec;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{interval::MonetaryInterval, money::Money, stubs::*};

    #[rstest]
    fn test_operator_symbols_round_trip() {
        let symbols: Vec<String> = Operator::iter().map(|op| op.to_string()).collect();
        assert_eq!(
            symbols,
            ["+", "-", "*", "/", "==", "!=", "<", ">", "<=", ">="]
        );
        for op in Operator::iter() {
            assert_eq!(Operator::from_str(op.as_ref()).unwrap(), op);
        }
    }

    #[rstest]
    #[case("%")]
    #[case("")]
    #[case("=")]
    #[case("<>")]
    fn test_operator_parse_unsupported(#[case] symbol: &str) {
        let err = Operator::parse(symbol).unwrap_err();
        assert_eq!(err.to_string(), format!("Unsupported operator: {symbol}"));
    }

    #[rstest]
    fn test_is_comparison() {
        assert!(!Operator::Add.is_comparison());
        assert!(!Operator::Div.is_comparison());
        assert!(Operator::Eq.is_comparison());
        assert!(Operator::Ge.is_comparison());
    }

    #[rstest]
    fn test_default_registry(money_eur_100: Money, interval_gbp_1_2: MonetaryInterval) {
        let registry = OperatorRegistry::default();
        assert_eq!(registry.len(), 2);

        let money = Value::from(money_eur_100);
        assert!(registry.supports(&money, &money, "+"));
        assert_eq!(
            registry.evaluate(&money, &money, "+").unwrap(),
            Value::from(Money::new(dec!(200), money_eur_100.currency()))
        );

        let interval = Value::from(interval_gbp_1_2);
        let three = Value::from(Money::new(dec!(3), interval_gbp_1_2.currency()));
        assert!(registry.supports(&interval, &three, "<"));
        assert_eq!(
            registry.evaluate(&interval, &three, "<").unwrap(),
            Value::Bool(true)
        );
    }

    #[rstest]
    fn test_registry_no_overloader(money_eur_100: Money, interval_gbp_1_2: MonetaryInterval) {
        let registry = OperatorRegistry::default();
        let interval = Value::from(interval_gbp_1_2);
        let money = Value::from(money_eur_100);

        assert!(!registry.supports(&interval, &money, "+"));
        let err = registry.evaluate(&interval, &money, "+").unwrap_err();
        assert_eq!(
            err,
            OperatorError::NoOverloader {
                left: "monetary-interval",
                right: "money",
                operator: "+".to_string(),
            }
        );
    }

    #[rstest]
    fn test_empty_registry(money_eur_100: Money) {
        let registry = OperatorRegistry::empty();
        let money = Value::from(money_eur_100);
        assert!(registry.is_empty());
        assert!(!registry.supports(&money, &money, "=="));
        assert!(registry.evaluate(&money, &money, "==").is_err());
    }
}
