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

//! Number formatting utilities.

use rust_decimal::Decimal;

fn separate_with(s: &str, sep: char) -> String {
    let (neg, digits) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else {
        (false, s)
    };

    let (int_part, dec_part) = match digits.find('.') {
        Some(pos) => (&digits[..pos], Some(&digits[pos..])),
        None => (digits, None),
    };

    let mut result = String::with_capacity(s.len() + int_part.len() / 3);

    if neg {
        result.push('-');
    }

    let chars: Vec<char> = int_part.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i).is_multiple_of(3) {
            result.push(sep);
        }
        result.push(*c);
    }

    if let Some(dec) = dec_part {
        result.push_str(dec);
    }

    result
}

/// Extension trait for formatting numbers with thousands separators.
///
/// The fractional part (if any) is left untouched.
pub trait Separable {
    /// Formats the number with `sep` as the thousands separator.
    fn separate_with(&self, sep: char) -> String;

    /// Formats the number with commas as thousand separators.
    fn separate_with_commas(&self) -> String {
        self.separate_with(',')
    }

    /// Formats the number with underscores as thousand separators.
    fn separate_with_underscores(&self) -> String {
        self.separate_with('_')
    }
}

macro_rules! impl_separable {
    ($($t:ty),*) => {
        $(
            impl Separable for $t {
                fn separate_with(&self, sep: char) -> String {
                    separate_with(&self.to_string(), sep)
                }
            }
        )*
    };
}

impl_separable!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

// `Decimal` displays in plain notation at its own scale, so trailing zeros survive grouping.
impl Separable for Decimal {
    fn separate_with(&self, sep: char) -> String {
        separate_with(&self.to_string(), sep)
    }
}

impl Separable for String {
    fn separate_with(&self, sep: char) -> String {
        separate_with(self, sep)
    }
}

impl Separable for &str {
    fn separate_with(&self, sep: char) -> String {
        separate_with(self, sep)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "0")]
    #[case(123, "123")]
    #[case(1234, "1,234")]
    #[case(123456, "123,456")]
    #[case(1234567, "1,234,567")]
    #[case(-1234, "-1,234")]
    fn test_separate_with_commas(#[case] input: i64, #[case] expected: &str) {
        assert_eq!(input.separate_with_commas(), expected);
    }

    #[rstest]
    fn test_separate_with_underscores() {
        assert_eq!(1234567_i64.separate_with_underscores(), "1_234_567");
        assert_eq!(1234567.89_f64.separate_with_underscores(), "1_234_567.89");
    }

    #[rstest]
    #[case("1234.56", "1,234.56")]
    #[case("10000.00", "10,000.00")]
    #[case("1000000.00", "1,000,000.00")]
    #[case("-1234.5", "-1,234.5")]
    #[case("0.01", "0.01")]
    #[case("1000", "1,000")]
    fn test_decimal_keeps_scale(#[case] input: &str, #[case] expected: &str) {
        let value = Decimal::from_str(input).unwrap();
        assert_eq!(value.separate_with_commas(), expected);
    }

    #[rstest]
    fn test_custom_separator() {
        assert_eq!("1234567.5".separate_with('.'), "1.234.567.5");
    }
}
