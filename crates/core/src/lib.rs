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

//! Core foundational utilities shared by the axiom schema crates.
//!
//! The crate is deliberately small and dependency-light:
//!
//! - [`correctness`]: precondition checks returning `anyhow::Result`, with `FAILED` for the
//!   panicking constructor variants.
//! - [`formatting`]: thousands separators for integers, floats, strings and decimals.
//! - [`string`]: bounded renderings of arbitrary values for error messages.

#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]

pub mod correctness;
pub mod formatting;
pub mod string;

pub use formatting::Separable;
pub use string::shortened_export;
