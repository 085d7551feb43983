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

//! Schema field types for monetary values.
//!
//! Every field type implements [`Type`]: best-effort coercion (`transform`), strict native
//! checking (`assert`), semantic equality (`compare`) and display formatting (`format`).

pub mod any;
pub mod interval;
pub mod minor;
pub mod monetary;
pub mod money;

use crate::{error::TransformValueError, value::Value};

pub use self::{
    any::{AnyMonetaryType, MonetaryValue},
    interval::MonetaryIntervalType,
    minor::MinorMonetaryType,
    monetary::MonetaryType,
    money::MoneyType,
};

/// The type name reported by the money field types.
pub const MONEY_TYPE_NAME: &str = "money";

/// The type name reported by the monetary interval field type.
pub const MONETARY_INTERVAL_TYPE_NAME: &str = "monetary-interval";

/// A schema field type producing values of type [`Type::Output`].
///
/// Implementations are immutable and shared freely between threads.
pub trait Type: Send + Sync {
    type Output;

    /// Returns the name used in error messages (e.g. "money").
    fn name(&self) -> &'static str;

    /// Coerces `value` into the output type.
    ///
    /// `Ok(None)` is reserved for an absent value; monetary types treat `null` as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be coerced.
    fn transform(&self, value: &Value) -> Result<Option<Self::Output>, TransformValueError>;

    /// Checks that `value` already is a native output value satisfying this type's constraints.
    ///
    /// Strings are never parsed.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not an acceptable native value.
    fn assert(&self, value: &Value) -> Result<Option<Self::Output>, TransformValueError>;

    /// Returns `true` if `a` and `b` are semantically equal.
    fn compare(&self, a: &Self::Output, b: &Self::Output) -> bool;

    /// Renders `value` for display.
    fn format(&self, value: &Self::Output) -> String;

    /// Returns the error reported when `value` is rejected.
    fn error(&self, value: &Value) -> TransformValueError {
        TransformValueError::new(self.name(), value)
    }
}
