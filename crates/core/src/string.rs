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

//! String manipulation functionality.

/// Renderings longer than this (in characters) are shortened.
pub const EXPORT_MAX_CHARS: usize = 40;

const EXPORT_HEAD_CHARS: usize = 30;
const EXPORT_TAIL_CHARS: usize = 7;

/// Returns a bounded single-line version of an already rendered value.
///
/// Line breaks are removed. Renderings longer than [`EXPORT_MAX_CHARS`] keep the first 30 and
/// last 7 characters joined by `...`. The result is deterministic for identical input.
///
/// # Examples
///
/// ```
/// use axiom_core::string::shortened_export;
///
/// assert_eq!(shortened_export("'foobar'"), "'foobar'");
/// assert_eq!(
///     shortened_export(&format!("'{}'", "a".repeat(50))),
///     format!("'{}...{}'", "a".repeat(29), "a".repeat(6)),
/// );
/// ```
#[must_use]
pub fn shortened_export(rendered: &str) -> String {
    // Work with Unicode scalars to avoid panicking on multibyte characters.
    let chars: Vec<char> = rendered.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    let len = chars.len();

    if len <= EXPORT_MAX_CHARS {
        return chars.into_iter().collect();
    }

    let head: String = chars[..EXPORT_HEAD_CHARS].iter().collect();
    let tail: String = chars[len - EXPORT_TAIL_CHARS..].iter().collect();

    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "")]
    #[case("'foobar'", "'foobar'")]
    #[case("123", "123")]
    #[case("'line\nbreak'", "'linebreak'")]
    fn test_shortened_export_short(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(shortened_export(input), expected);
    }

    #[rstest]
    fn test_shortened_export_at_limit_is_untouched() {
        let input = "x".repeat(EXPORT_MAX_CHARS);
        assert_eq!(shortened_export(&input), input);
    }

    #[rstest]
    fn test_shortened_export_long() {
        let input = format!("'{}'", "abcdefghij".repeat(5));
        let output = shortened_export(&input);
        assert_eq!(output, "'abcdefghijabcdefghijabcdefghi...efghij'");
        assert_eq!(output.chars().count(), 40);
    }

    #[rstest]
    fn test_shortened_export_multibyte() {
        let input = "€".repeat(45);
        let output = shortened_export(&input);
        assert_eq!(output, format!("{}...{}", "€".repeat(30), "€".repeat(7)));
    }

    #[rstest]
    fn test_shortened_export_is_deterministic() {
        let input = "£".repeat(100);
        assert_eq!(shortened_export(&input), shortened_export(&input));
    }
}
