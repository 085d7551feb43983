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

//! Monetary values for the axiom schema framework.
//!
//! The `axiom-money` crate provides:
//!
//! - [`Money`](money::Money) and [`MonetaryInterval`](interval::MonetaryInterval) value types
//!   which never round silently.
//! - A money string parser accepting `CCC amount` and locale-formatted notations.
//! - Schema field types implementing the [`Type`](types::Type) contract.
//! - Operator overloads for money arithmetic and interval comparisons.
//!
//! # Feature flags
//!
//! - `stubs`: Enables rstest fixtures for testing downstream crates.

#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod currency;
pub mod error;
pub mod interval;
pub mod locale;
pub mod money;
pub mod operators;
pub mod parser;
pub mod types;
pub mod value;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

pub use crate::{
    currency::Currency,
    error::{IntervalError, MoneyError, OperatorError, ParseError, TransformValueError},
    interval::{IntervalNotation, MonetaryInterval},
    money::Money,
    parser::{MoneyParser, parse_money},
    types::Type,
    value::Value,
};
