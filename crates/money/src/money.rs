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

//! Represents an amount of money in a specified currency denomination.
//!
//! Amounts are arbitrary-precision decimals stored at exactly the currency's precision. Any
//! construction or arithmetic that would need rounding fails with
//! [`MoneyError::PrecisionLoss`] unless the caller explicitly opts in through
//! [`Money::of_rounded`].

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    ops::Neg,
    str::FromStr,
};

use axiom_core::correctness::FAILED;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    currency::Currency,
    error::{MoneyError, ParseError},
    parser::MoneyParser,
    value::Value,
};

/// Represents an amount of money in a specified currency denomination.
#[derive(Clone, Copy, Eq)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] instance with correctness checking.
    ///
    /// Trailing zeros beyond the currency precision are accepted (`100.000 EUR`), any other
    /// excess precision is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` has more significant decimal places than `currency.precision`.
    /// - `amount` is too large to be represented at the currency precision.
    pub fn new_checked(amount: Decimal, currency: Currency) -> Result<Self, MoneyError> {
        let precision = u32::from(currency.precision);
        if amount.normalize().scale() > precision {
            return Err(MoneyError::PrecisionLoss {
                amount,
                currency: currency.code,
                precision: currency.precision,
            });
        }

        let mut rescaled = amount;
        rescaled.rescale(precision);
        if rescaled.scale() != precision || rescaled != amount {
            return Err(MoneyError::Overflow);
        }

        Ok(Self {
            amount: rescaled,
            currency,
        })
    }

    /// Creates a new [`Money`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Money::new_checked`] for more details.
    #[must_use]
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self::new_checked(amount, currency).expect(FAILED)
    }

    /// Creates a new [`Money`] from an integral count of minor units (e.g. cents).
    ///
    /// `150` EUR minor units is `1.50 EUR`; `100.000` is accepted as the integer `100`.
    ///
    /// # Errors
    ///
    /// Returns an error if `minor` is not an integral value.
    pub fn of_minor(minor: Decimal, currency: Currency) -> Result<Self, MoneyError> {
        let normalized = minor.normalize();
        if normalized.scale() > 0 {
            return Err(MoneyError::PrecisionLoss {
                amount: minor,
                currency: currency.code,
                precision: 0,
            });
        }

        let amount =
            Decimal::try_from_i128_with_scale(normalized.mantissa(), u32::from(currency.precision))
                .map_err(|_| MoneyError::Overflow)?;

        Ok(Self { amount, currency })
    }

    /// Creates a new [`Money`] rounding `amount` to the currency precision with `strategy`.
    ///
    /// This is the only lossy constructor.
    ///
    /// # Errors
    ///
    /// Returns an error if the rounded amount cannot be represented at the currency precision.
    pub fn of_rounded(
        amount: Decimal,
        currency: Currency,
        strategy: RoundingStrategy,
    ) -> Result<Self, MoneyError> {
        let rounded = amount.round_dp_with_strategy(u32::from(currency.precision), strategy);
        Self::new_checked(rounded, currency)
    }

    /// Creates a new [`Money`] instance with a value of zero with the given [`Currency`].
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Returns the amount, scaled to the currency precision.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency denomination.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the amount as an integral count of minor units.
    #[must_use]
    pub fn minor_amount(&self) -> i128 {
        self.amount.mantissa()
    }

    /// Returns `true` if the value of this instance is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns `true` if the value of this instance is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns `true` if both the amount and the currency are equal.
    #[must_use]
    pub fn is_amount_and_currency_equal_to(&self, other: &Self) -> bool {
        self.currency == other.currency && self.amount == other.amount
    }

    /// Compares the amounts of two values of the same currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the currencies differ.
    pub fn compare_to(&self, other: &Self) -> Result<Ordering, MoneyError> {
        self.check_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Returns `true` if both amounts are equal.
    ///
    /// # Errors
    ///
    /// Returns an error if the currencies differ.
    pub fn is_equal_to(&self, other: &Self) -> Result<bool, MoneyError> {
        Ok(self.compare_to(other)? == Ordering::Equal)
    }

    /// Adds `other` to this value.
    ///
    /// # Errors
    ///
    /// Returns an error if the currencies differ or the sum overflows.
    pub fn checked_add(&self, other: &Self) -> Result<Self, MoneyError> {
        self.check_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Self::new_checked(amount, self.currency)
    }

    /// Subtracts `other` from this value.
    ///
    /// # Errors
    ///
    /// Returns an error if the currencies differ or the difference overflows.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, MoneyError> {
        self.check_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Self::new_checked(amount, self.currency)
    }

    /// Multiplies this value by a dimensionless `factor`.
    ///
    /// # Errors
    ///
    /// Returns an error if the product needs rounding or overflows.
    pub fn multiplied_by(&self, factor: Decimal) -> Result<Self, MoneyError> {
        let amount = exact_mul(self.amount, factor)
            .ok_or(MoneyError::Overflow)?
            .map_err(|rounded| self.precision_loss(rounded))?;
        Self::new_checked(amount, self.currency)
    }

    /// Divides this value by a dimensionless `divisor`.
    ///
    /// # Errors
    ///
    /// Returns an error if `divisor` is zero, or the quotient needs rounding or overflows.
    pub fn divided_by(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let amount = self
            .amount
            .checked_div(divisor)
            .ok_or(MoneyError::Overflow)?;
        let quotient = Self::new_checked(amount, self.currency)?;

        // `checked_div` rounds non-terminating quotients to 28 places.
        match exact_mul(quotient.amount, divisor) {
            Some(Ok(product)) if product == self.amount => Ok(quotient),
            _ => Err(self.precision_loss(amount)),
        }
    }

    fn precision_loss(&self, amount: Decimal) -> MoneyError {
        MoneyError::PrecisionLoss {
            amount,
            currency: self.currency.code,
            precision: self.currency.precision,
        }
    }

    fn check_same_currency(&self, other: &Self) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                expected: self.currency.code,
                actual: other.currency.code,
            });
        }
        Ok(())
    }
}

/// Multiplies `a` by `b`, returning `Err` with the rounded product when `Decimal` cannot hold
/// the exact result, or `None` on overflow.
fn exact_mul(a: Decimal, b: Decimal) -> Option<Result<Decimal, Decimal>> {
    let product = a.checked_mul(b)?;
    if product.normalize().scale() < exact_product_scale(a, b) {
        Some(Err(product))
    } else {
        Some(Ok(product))
    }
}

/// Returns the number of decimal places of the exact product `a * b`.
fn exact_product_scale(a: Decimal, b: Decimal) -> u32 {
    if a.is_zero() || b.is_zero() {
        return 0;
    }
    let (a, b) = (a.normalize(), b.normalize());
    let (ma, mb) = (a.mantissa().unsigned_abs(), b.mantissa().unsigned_abs());
    let twos = ma.trailing_zeros() + mb.trailing_zeros();
    let fives = factors_of_five(ma) + factors_of_five(mb);
    (a.scale() + b.scale()).saturating_sub(twos.min(fives))
}

fn factors_of_five(mut n: u128) -> u32 {
    let mut count = 0;
    while n % 5 == 0 {
        n /= 5;
        count += 1;
    }
    count
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.is_amount_and_currency_equal_to(other)
    }
}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
        self.currency.hash(state);
    }
}

impl Neg for Money {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            amount: -self.amount,
            currency: self.currency,
        }
    }
}

impl Debug for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}, {})",
            stringify!(Money),
            self.amount,
            self.currency.code
        )
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency.code, self.amount)
    }
}

impl FromStr for Money {
    type Err = ParseError;

    /// Parses `value` with [`MoneyParser`], additionally accepting the signed canonical form
    /// written by [`Display`] (`EUR -1.50`).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parser = MoneyParser::default();
        if let Some((code, amount)) = value.split_once(" -")
            && let Ok(money) = parser.parse(&Value::from(format!("{code} {amount}")))
        {
            return Ok(-money);
        }
        parser.parse(&Value::from(value))
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&value).map_err(serde::de::Error::custom)
    }
}
