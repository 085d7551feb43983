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

//! Arithmetic and comparison between two [`Money`] values.

use std::cmp::Ordering;

use super::{Operator, OperatorOverloader};
use crate::{error::OperatorError, money::Money, value::Value};

/// Overloads all ten operators for `Money <op> Money`.
///
/// `+`, `-` and comparisons require matching currencies. `*` and `/` take the right
/// operand's amount as a dimensionless scalar.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoneyOverloader;

impl OperatorOverloader for MoneyOverloader {
    fn supports_overloading(&self, left: &Value, right: &Value, operator: &str) -> bool {
        matches!((left, right), (Value::Money(_), Value::Money(_)))
            && Operator::parse(operator).is_ok()
    }

    fn evaluate(&self, left: &Value, right: &Value, operator: &str) -> Result<Value, OperatorError> {
        let op = Operator::parse(operator)?;
        let (Value::Money(left), Value::Money(right)) = (left, right) else {
            return Err(OperatorError::UnsupportedOperands {
                left: left.type_name(),
                right: right.type_name(),
                operator: operator.to_string(),
            });
        };

        let result = match op {
            Operator::Add => Value::Money(left.checked_add(right)?),
            Operator::Sub => Value::Money(left.checked_sub(right)?),
            Operator::Mul => Value::Money(left.multiplied_by(right.amount())?),
            Operator::Div => Value::Money(left.divided_by(right.amount())?),
            Operator::Eq => Value::Bool(left.is_equal_to(right)?),
            Operator::Ne => Value::Bool(!left.is_equal_to(right)?),
            Operator::Lt => Value::Bool(compare(left, right)? == Ordering::Less),
            Operator::Gt => Value::Bool(compare(left, right)? == Ordering::Greater),
            Operator::Le => Value::Bool(compare(left, right)? != Ordering::Greater),
            Operator::Ge => Value::Bool(compare(left, right)? != Ordering::Less),
        };
        Ok(result)
    }
}

fn compare(left: &Money, right: &Money) -> Result<Ordering, OperatorError> {
    Ok(left.compare_to(right)?)
}
