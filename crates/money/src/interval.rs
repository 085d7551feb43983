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

//! Intervals with open or closed bounds, and the monetary interval built on them.
//!
//! # Grammar
//!
//! ```text
//! interval := open left "," right close
//! open     := "[" | "("
//! close    := "]" | ")"
//! ```
//!
//! Whitespace around each bound is ignored. Exactly one `,` separates the bounds, so bounds
//! must not contain grouping separators (`[EUR 1000, EUR 2000]`, not `[€1,000, €2,000]`).

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    str::FromStr,
};

use axiom_core::correctness::FAILED;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::{
    currency::Currency,
    error::{IntervalError, MoneyError},
    money::Money,
};

/// Whether each bound of an interval is included.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    StrumDisplay,
    Serialize,
    Deserialize,
)]
pub enum IntervalNotation {
    /// Both bounds included: `[a,b]`.
    #[strum(serialize = "[]")]
    #[serde(rename = "[]")]
    Closed,
    /// Both bounds excluded: `(a,b)`.
    #[strum(serialize = "()")]
    #[serde(rename = "()")]
    Open,
    /// Left bound excluded: `(a,b]`.
    #[strum(serialize = "(]")]
    #[serde(rename = "(]")]
    LeftOpen,
    /// Right bound excluded: `[a,b)`.
    #[strum(serialize = "[)")]
    #[serde(rename = "[)")]
    RightOpen,
}

impl IntervalNotation {
    /// Returns the notation for the given opening and closing brackets.
    #[must_use]
    pub const fn from_brackets(open: char, close: char) -> Option<Self> {
        match (open, close) {
            ('[', ']') => Some(Self::Closed),
            ('(', ')') => Some(Self::Open),
            ('(', ']') => Some(Self::LeftOpen),
            ('[', ')') => Some(Self::RightOpen),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_left_open(self) -> bool {
        matches!(self, Self::Open | Self::LeftOpen)
    }

    #[must_use]
    pub const fn is_right_open(self) -> bool {
        matches!(self, Self::Open | Self::RightOpen)
    }

    #[must_use]
    pub const fn left_bracket(self) -> char {
        if self.is_left_open() { '(' } else { '[' }
    }

    #[must_use]
    pub const fn right_bracket(self) -> char {
        if self.is_right_open() { ')' } else { ']' }
    }
}

/// Splits an interval string into its raw left bound, right bound and notation.
///
/// # Errors
///
/// Returns an error if `s` does not follow the interval grammar.
pub fn split_interval(s: &str) -> Result<(&str, &str, IntervalNotation), IntervalError> {
    let syntax = || IntervalError::Syntax(s.to_string());
    let trimmed = s.trim();

    let mut chars = trimmed.chars();
    let open = chars.next().ok_or_else(syntax)?;
    let close = chars.next_back().ok_or_else(syntax)?;
    let notation = IntervalNotation::from_brackets(open, close).ok_or_else(syntax)?;

    let inner = &trimmed[open.len_utf8()..trimmed.len() - close.len_utf8()];
    let (left, right) = inner.split_once(',').ok_or_else(syntax)?;
    let (left, right) = (left.trim(), right.trim());

    if left.is_empty() || right.is_empty() || right.contains(',') {
        return Err(syntax());
    }

    Ok((left, right, notation))
}

/// A generic interval over ordered bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    pub left: T,
    pub right: T,
    pub notation: IntervalNotation,
}

impl<T: PartialOrd + Display> Interval<T> {
    /// Creates a new [`Interval`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `left` is greater than `right`.
    pub fn new_checked(left: T, right: T, notation: IntervalNotation) -> Result<Self, IntervalError> {
        if left > right {
            return Err(IntervalError::Inverted {
                left: left.to_string(),
                right: right.to_string(),
            });
        }
        Ok(Self {
            left,
            right,
            notation,
        })
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{},{}{}",
            self.notation.left_bracket(),
            self.left,
            self.right,
            self.notation.right_bracket(),
        )
    }
}

impl<T> FromStr for Interval<T>
where
    T: FromStr + PartialOrd + Display,
    T::Err: Display,
{
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (left, right, notation) = split_interval(s)?;
        let parse = |bound: &str| {
            bound.parse::<T>().map_err(|e| IntervalError::Bound {
                bound: bound.to_string(),
                reason: e.to_string(),
            })
        };
        Self::new_checked(parse(left)?, parse(right)?, notation)
    }
}

/// A bounded range of [`Money`] values sharing one currency.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonetaryInterval {
    left: Money,
    right: Money,
    notation: IntervalNotation,
}

impl MonetaryInterval {
    /// Creates a new [`MonetaryInterval`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The bounds have different currencies.
    /// - `left` is greater than `right`.
    pub fn new_checked(
        left: Money,
        right: Money,
        notation: IntervalNotation,
    ) -> Result<Self, IntervalError> {
        if left.compare_to(&right)? == Ordering::Greater {
            return Err(IntervalError::Inverted {
                left: left.to_string(),
                right: right.to_string(),
            });
        }
        Ok(Self {
            left,
            right,
            notation,
        })
    }

    /// Creates a new [`MonetaryInterval`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`MonetaryInterval::new_checked`] for more details.
    #[must_use]
    pub fn new(left: Money, right: Money, notation: IntervalNotation) -> Self {
        Self::new_checked(left, right, notation).expect(FAILED)
    }

    #[must_use]
    pub const fn left(&self) -> Money {
        self.left
    }

    #[must_use]
    pub const fn right(&self) -> Money {
        self.right
    }

    #[must_use]
    pub const fn notation(&self) -> IntervalNotation {
        self.notation
    }

    /// Returns the currency shared by both bounds.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.left.currency()
    }

    /// Returns `true` if the interval lies entirely below `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` has a different currency.
    pub fn is_less_than(&self, value: &Money) -> Result<bool, MoneyError> {
        let ord = self.right.compare_to(value)?;
        Ok(if self.notation.is_right_open() {
            ord != Ordering::Greater
        } else {
            ord == Ordering::Less
        })
    }

    /// Returns `true` if no point of the interval lies above `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` has a different currency.
    pub fn is_less_than_or_equal_to(&self, value: &Money) -> Result<bool, MoneyError> {
        Ok(self.right.compare_to(value)? != Ordering::Greater)
    }

    /// Returns `true` if the interval lies entirely above `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` has a different currency.
    pub fn is_greater_than(&self, value: &Money) -> Result<bool, MoneyError> {
        let ord = self.left.compare_to(value)?;
        Ok(if self.notation.is_left_open() {
            ord != Ordering::Less
        } else {
            ord == Ordering::Greater
        })
    }

    /// Returns `true` if no point of the interval lies below `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` has a different currency.
    pub fn is_greater_than_or_equal_to(&self, value: &Money) -> Result<bool, MoneyError> {
        Ok(self.left.compare_to(value)? != Ordering::Less)
    }

    /// Returns `true` if `value` lies within the interval.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` has a different currency.
    pub fn contains(&self, value: &Money) -> Result<bool, MoneyError> {
        Ok(!self.is_less_than(value)? && !self.is_greater_than(value)?)
    }
}

impl Debug for MonetaryInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}('{}')", stringify!(MonetaryInterval), self)
    }
}

impl Display for MonetaryInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{},{}{}",
            self.notation.left_bracket(),
            self.left,
            self.right,
            self.notation.right_bracket(),
        )
    }
}

impl FromStr for MonetaryInterval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (left, right, notation) = split_interval(s)?;
        let parse = |bound: &str| {
            Money::from_str(bound).map_err(|e| IntervalError::Bound {
                bound: bound.to_string(),
                reason: e.to_string(),
            })
        };
        Self::new_checked(parse(left)?, parse(right)?, notation)
    }
}

impl Serialize for MonetaryInterval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonetaryInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&value).map_err(serde::de::Error::custom)
    }
}
