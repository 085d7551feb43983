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

//! Logging configuration types and parsing.
//!
//! # Spec String Format
//!
//! The `AXIOM_LOG` environment variable uses a semicolon-separated format:
//!
//! ```text
//! stdout=Info;axiom_money::parser=Trace;is_colored=false
//! ```
//!
//! ## Supported Keys
//!
//! | Key            | Type      | Description                                 |
//! |----------------|-----------|---------------------------------------------|
//! | `stdout`       | Log level | Maximum level for stdout output.            |
//! | `is_colored`   | Boolean   | Enable ANSI colors (default: true).         |
//! | `print_config` | Boolean   | Print config to stdout at startup.          |
//! | `<module>`     | Log level | Module-specific log level (prefix match).   |
//!
//! Log levels are case-insensitive. Boolean keys may be given as bare flags (`is_colored`) or
//! explicitly (`is_colored=false`, `is_colored=0`, `is_colored=no`).

use std::{env, str::FromStr};

use ahash::AHashMap;
use log::LevelFilter;
use ustr::Ustr;

/// The environment variable holding the logging spec string.
pub const AXIOM_LOG: &str = "AXIOM_LOG";

/// Configuration for the axiom logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Maximum log level for stdout output (errors always go to stderr).
    pub stdout_level: LevelFilter,
    /// Per-module path log level overrides (longest prefix wins).
    pub module_level: AHashMap<Ustr, LevelFilter>,
    /// Use ANSI color codes in output.
    pub is_colored: bool,
    /// Print configuration to stdout at startup.
    pub print_config: bool,
}

impl Default for LoggerConfig {
    /// Creates a new default [`LoggerConfig`] instance.
    fn default() -> Self {
        Self {
            stdout_level: LevelFilter::Info,
            module_level: AHashMap::new(),
            is_colored: true,
            print_config: false,
        }
    }
}

impl LoggerConfig {
    /// Creates a new [`LoggerConfig`] instance.
    #[must_use]
    pub const fn new(
        stdout_level: LevelFilter,
        module_level: AHashMap<Ustr, LevelFilter>,
        is_colored: bool,
        print_config: bool,
    ) -> Self {
        Self {
            stdout_level,
            module_level,
            is_colored,
            print_config,
        }
    }

    /// Parses a configuration from a spec string.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec string contains invalid syntax or log levels.
    pub fn from_spec(spec: &str) -> anyhow::Result<Self> {
        let mut config = Self::default();

        for pair in spec.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some((k, v)) => (k.trim(), Some(v.trim())),
                None => (pair, None),
            };

            match (key.to_lowercase().as_str(), value) {
                ("is_colored", v) => config.is_colored = v.is_none_or(parse_bool_value),
                ("print_config", v) => config.print_config = v.is_none_or(parse_bool_value),
                ("stdout", Some(v)) => config.stdout_level = parse_level(v)?,
                (_, Some(v)) if !key.is_empty() => {
                    config.module_level.insert(Ustr::from(key), parse_level(v)?);
                }
                _ => anyhow::bail!("Invalid spec pair: {pair}"),
            }
        }

        Ok(config)
    }

    /// Parses configuration from the `AXIOM_LOG` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or contains invalid syntax.
    pub fn from_env() -> anyhow::Result<Self> {
        let spec = env::var(AXIOM_LOG)?;
        Self::from_spec(&spec)
    }

    /// Returns the effective level for a record `target` (a module path).
    #[must_use]
    pub fn level_for(&self, target: &str) -> LevelFilter {
        self.module_level
            .iter()
            .filter(|(module, _)| is_module_prefix(module, target))
            .max_by_key(|(module, _)| module.len())
            .map_or(self.stdout_level, |(_, level)| *level)
    }

    /// Returns the most verbose level any target can log at.
    #[must_use]
    pub fn max_level(&self) -> LevelFilter {
        self.module_level
            .values()
            .copied()
            .fold(Ord::max(self.stdout_level, LevelFilter::Error), Ord::max)
    }
}

fn is_module_prefix(module: &str, target: &str) -> bool {
    target
        .strip_prefix(module)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}

/// Returns `true` unless the value is explicitly "false", "0", or "no" (case-insensitive).
fn parse_bool_value(v: &str) -> bool {
    !matches!(v.to_lowercase().as_str(), "false" | "0" | "no")
}

fn parse_level(v: &str) -> anyhow::Result<LevelFilter> {
    LevelFilter::from_str(v).map_err(|_| anyhow::anyhow!("Invalid log level: {v}"))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.stdout_level, LevelFilter::Info);
        assert!(config.module_level.is_empty());
        assert!(config.is_colored);
        assert!(!config.print_config);
    }

    #[rstest]
    fn test_from_spec_empty_string() {
        assert_eq!(LoggerConfig::from_spec("").unwrap(), LoggerConfig::default());
    }

    #[rstest]
    #[case("stdout=Debug", LevelFilter::Debug)]
    #[case("stdout=debug", LevelFilter::Debug)]
    #[case("STDOUT=TRACE", LevelFilter::Trace)]
    #[case("  stdout = Warn ; ", LevelFilter::Warn)]
    #[case("stdout=Off", LevelFilter::Off)]
    fn test_from_spec_stdout(#[case] spec: &str, #[case] expected: LevelFilter) {
        assert_eq!(LoggerConfig::from_spec(spec).unwrap().stdout_level, expected);
    }

    #[rstest]
    #[case("is_colored", true)]
    #[case("is_colored=true", true)]
    #[case("is_colored=false", false)]
    #[case("is_colored=0", false)]
    #[case("IS_COLORED=NO", false)]
    fn test_from_spec_is_colored(#[case] spec: &str, #[case] expected: bool) {
        assert_eq!(LoggerConfig::from_spec(spec).unwrap().is_colored, expected);
    }

    #[rstest]
    fn test_from_spec_print_config() {
        assert!(LoggerConfig::from_spec("print_config").unwrap().print_config);
        assert!(!LoggerConfig::from_spec("print_config=no").unwrap().print_config);
    }

    #[rstest]
    fn test_from_spec_module_levels() {
        let config =
            LoggerConfig::from_spec("stdout=Info;axiom_money::parser=Trace;axiom_money=Warn")
                .unwrap();
        assert_eq!(
            config.module_level.get(&Ustr::from("axiom_money::parser")),
            Some(&LevelFilter::Trace)
        );
        assert_eq!(
            config.module_level.get(&Ustr::from("axiom_money")),
            Some(&LevelFilter::Warn)
        );
    }

    #[rstest]
    #[case("unknown_flag")]
    #[case("stdout")]
    #[case("stdout=Verbose")]
    #[case("axiom_money=Loud")]
    #[case("=Info")]
    fn test_from_spec_invalid(#[case] spec: &str) {
        assert!(LoggerConfig::from_spec(spec).is_err());
    }

    #[rstest]
    #[case("axiom_money::parser", LevelFilter::Trace)]
    #[case("axiom_money::parser::inner", LevelFilter::Trace)]
    #[case("axiom_money::types", LevelFilter::Warn)]
    #[case("axiom_money", LevelFilter::Warn)]
    #[case("axiom_moneyx", LevelFilter::Info)]
    #[case("other", LevelFilter::Info)]
    fn test_level_for(#[case] target: &str, #[case] expected: LevelFilter) {
        let config =
            LoggerConfig::from_spec("axiom_money::parser=Trace;axiom_money=Warn").unwrap();
        assert_eq!(config.level_for(target), expected);
    }

    #[rstest]
    fn test_max_level() {
        assert_eq!(LoggerConfig::default().max_level(), LevelFilter::Info);
        assert_eq!(
            LoggerConfig::from_spec("stdout=Off").unwrap().max_level(),
            LevelFilter::Error
        );
        assert_eq!(
            LoggerConfig::from_spec("stdout=Warn;axiom_money=Debug")
                .unwrap()
                .max_level(),
            LevelFilter::Debug
        );
    }
}
