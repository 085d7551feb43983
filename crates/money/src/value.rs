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

//! The closed set of input shapes the schema layer hands to monetary types and operators.

use std::{collections::BTreeMap, fmt::Display, sync::LazyLock};

use axiom_core::string::shortened_export;
use regex::Regex;
use rust_decimal::Decimal;

use crate::{interval::MonetaryInterval, money::Money};

static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([-+]?)([0-9]+(?:\.[0-9]+)?|\.[0-9]+)([eE][-+]?[0-9]+)?$")
        .expect("valid numeric regex")
});

/// An input value of arbitrary shape.
///
/// Strings are never interpreted eagerly; each consumer decides how (and whether) to parse them.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    String(String),
    Money(Money),
    Interval(MonetaryInterval),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Returns the short name of this value's shape, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Decimal(_) => "decimal",
            Self::String(_) => "string",
            Self::Money(_) => "money",
            Self::Interval(_) => "monetary-interval",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    /// Returns `true` if this value is a plain number (no currency information).
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_) | Self::Decimal(_))
    }

    /// Interprets this value as a bare decimal number.
    ///
    /// Integers, finite floats, decimals and strings in plain or scientific decimal notation
    /// are numeric. Everything else (including booleans and money) returns `None`.
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Int(i) => Some(Decimal::from(*i)),
            Self::Float(f) if f.is_finite() => Decimal::from_str_exact(&f.to_string()).ok(),
            Self::Decimal(d) => Some(*d),
            Self::String(s) => parse_decimal_str(s),
            _ => None,
        }
    }

    /// Returns a bounded, deterministic rendering of this value for error messages.
    ///
    /// Strings are single-quoted and long renderings are shortened.
    #[must_use]
    pub fn export(&self) -> String {
        let rendered = match self {
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => format!("{f:?}"),
            Self::Decimal(d) => d.to_string(),
            Self::String(s) => format!("'{}'", s.replace('\'', "\\'")),
            Self::Money(m) => m.to_string(),
            Self::Interval(i) => i.to_string(),
            Self::List(items) if items.is_empty() => "[]".to_string(),
            Self::Map(items) if items.is_empty() => "[]".to_string(),
            Self::List(_) | Self::Map(_) => "[...]".to_string(),
        };
        shortened_export(&rendered)
    }
}

/// Parses `s` as a plain or scientific decimal number, without currency information.
#[must_use]
pub fn parse_decimal_str(s: &str) -> Option<Decimal> {
    let caps = NUMERIC_RE.captures(s)?;
    let sign = if &caps[1] == "-" { "-" } else { "" };
    let digits = &caps[2];
    let lead = if digits.starts_with('.') { "0" } else { "" };

    match caps.get(3) {
        Some(exponent) => {
            Decimal::from_scientific(&format!("{sign}{lead}{digits}{}", exponent.as_str())).ok()
        }
        None => Decimal::from_str_exact(&format!("{sign}{lead}{digits}")).ok(),
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.export())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Money> for Value {
    fn from(value: Money) -> Self {
        Self::Money(value)
    }
}

impl From<MonetaryInterval> for Value {
    fn from(value: MonetaryInterval) -> Self {
        Self::Interval(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => n.as_f64().map_or(Self::Null, Self::Float),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}
