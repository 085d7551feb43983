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

//! Fixtures for stubbing monetary values and types in tests.

use rstest::fixture;
use rust_decimal_macros::dec;

use crate::{
    currency::Currency,
    interval::{IntervalNotation, MonetaryInterval},
    money::Money,
    types::{MinorMonetaryType, MonetaryIntervalType, MonetaryType, MoneyType},
};

#[fixture]
pub fn eur() -> Currency {
    Currency::EUR()
}

#[fixture]
pub fn gbp() -> Currency {
    Currency::GBP()
}

#[fixture]
pub fn usd() -> Currency {
    Currency::USD()
}

#[fixture]
pub fn jpy() -> Currency {
    Currency::JPY()
}

#[fixture]
pub fn money_eur_100() -> Money {
    Money::new(dec!(100), Currency::EUR())
}

/// `[GBP 1.00,GBP 2.00]`
#[fixture]
pub fn interval_gbp_1_2() -> MonetaryInterval {
    MonetaryInterval::new(
        Money::new(dec!(1), Currency::GBP()),
        Money::new(dec!(2), Currency::GBP()),
        IntervalNotation::Closed,
    )
}

#[fixture]
pub fn money_type() -> MoneyType {
    MoneyType::default()
}

#[fixture]
pub fn monetary_type_eur() -> MonetaryType {
    MonetaryType::new(Currency::EUR())
}

#[fixture]
pub fn minor_monetary_type_eur() -> MinorMonetaryType {
    MinorMonetaryType::new(Currency::EUR())
}

#[fixture]
pub fn interval_type_gbp() -> MonetaryIntervalType {
    MonetaryIntervalType::new(Currency::GBP())
}
