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

//! A synchronous `log` backend writing formatted lines to stdout and stderr.

use std::{
    fmt::{Debug, Display},
    sync::Mutex,
};

use chrono::{DateTime, SecondsFormat, Utc};
use log::{Level, Log, Metadata, Record};
use ustr::Ustr;

use super::{
    config::LoggerConfig,
    writer::{LogWriter, StderrWriter, StdoutWriter},
};

/// A single log event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    /// The wall-clock time of the event.
    pub timestamp: DateTime<Utc>,
    /// The log level for the event.
    pub level: Level,
    /// The module path the event originated from.
    pub target: Ustr,
    /// The log message content.
    pub message: String,
}

impl LogLine {
    /// Returns the plain line, terminated by a newline.
    #[must_use]
    pub fn to_plain(&self) -> String {
        format!(
            "{} [{}] {}: {}\n",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true),
            self.level,
            self.target,
            self.message,
        )
    }

    /// Returns the line with ANSI colors for the level, terminated by a newline.
    #[must_use]
    pub fn to_colored(&self) -> String {
        format!(
            "\x1b[1m{}\x1b[0m {}[{}] {}: {}\x1b[0m\n",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true),
            level_ansi(self.level),
            self.level,
            self.target,
            self.message,
        )
    }
}

impl Display for LogLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.target, self.message)
    }
}

const fn level_ansi(level: Level) -> &'static str {
    match level {
        Level::Error => "\x1b[1;31m",
        Level::Warn => "\x1b[1;33m",
        Level::Info => "",
        Level::Debug => "\x1b[94m",
        Level::Trace => "\x1b[2m",
    }
}

/// A `log` implementation filtering by module and fanning out to [`LogWriter`]s.
pub struct Logger {
    config: LoggerConfig,
    writers: Mutex<Vec<Box<dyn LogWriter + Send>>>,
}

impl Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Logger))
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Creates a new [`Logger`] writing to stdout and stderr.
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        let writers: Vec<Box<dyn LogWriter + Send>> = vec![
            Box::new(StdoutWriter::new(config.max_level(), config.is_colored)),
            Box::new(StderrWriter::new(config.is_colored)),
        ];
        Self::with_writers(config, writers)
    }

    /// Creates a new [`Logger`] writing to the given `writers`.
    #[must_use]
    pub fn with_writers(config: LoggerConfig, writers: Vec<Box<dyn LogWriter + Send>>) -> Self {
        Self {
            config,
            writers: Mutex::new(writers),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &LoggerConfig {
        &self.config
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() == Level::Error
            || metadata.level() <= self.config.level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = LogLine {
            timestamp: Utc::now(),
            level: record.level(),
            target: Ustr::from(record.target()),
            message: record.args().to_string(),
        };

        let Ok(mut writers) = self.writers.lock() else {
            eprintln!("Error acquiring log writers (poisoned): {line}");
            return;
        };

        for writer in writers.iter_mut().filter(|w| w.enabled(&line)) {
            if writer.is_colored() {
                writer.write(&line.to_colored());
            } else {
                writer.write(&line.to_plain());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut writers) = self.writers.lock() {
            for writer in writers.iter_mut() {
                writer.flush();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use log::LevelFilter;
    use rstest::rstest;

    use super::*;

    #[derive(Clone, Default)]
    struct BufferWriter {
        lines: Arc<Mutex<Vec<String>>>,
        is_colored: bool,
    }

    impl LogWriter for BufferWriter {
        fn write(&mut self, line: &str) {
            self.lines.lock().unwrap().push(line.to_string());
        }

        fn flush(&mut self) {}

        fn enabled(&self, _line: &LogLine) -> bool {
            true
        }

        fn is_colored(&self) -> bool {
            self.is_colored
        }
    }

    fn logger(spec: &str, writer: &BufferWriter) -> Logger {
        Logger::with_writers(
            LoggerConfig::from_spec(spec).unwrap(),
            vec![Box::new(writer.clone())],
        )
    }

    fn emit(logger: &Logger, level: Level, target: &str, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{message}"))
                .level(level)
                .target(target)
                .build(),
        );
    }

    #[rstest]
    fn test_log_line_formats() {
        let line = LogLine {
            timestamp: DateTime::from_timestamp(0, 0).unwrap(),
            level: Level::Warn,
            target: Ustr::from("axiom_money::parser"),
            message: "hello".to_string(),
        };
        assert_eq!(
            line.to_plain(),
            "1970-01-01T00:00:00.000000000Z [WARN] axiom_money::parser: hello\n"
        );
        assert_eq!(
            line.to_colored(),
            "\x1b[1m1970-01-01T00:00:00.000000000Z\x1b[0m \x1b[1;33m[WARN] axiom_money::parser: hello\x1b[0m\n"
        );
        assert_eq!(line.to_string(), "[WARN] axiom_money::parser: hello");
    }

    #[rstest]
    fn test_logger_filters_by_module() {
        let writer = BufferWriter::default();
        let logger = logger("stdout=Info;axiom_money::parser=Trace", &writer);

        emit(&logger, Level::Trace, "axiom_money::parser", "structured");
        emit(&logger, Level::Debug, "axiom_money::types", "dropped");
        emit(&logger, Level::Info, "axiom_money::types", "kept");

        let lines = writer.lines.lock().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[TRACE] axiom_money::parser: structured\n"));
        assert!(lines[1].ends_with("[INFO] axiom_money::types: kept\n"));
    }

    #[rstest]
    fn test_logger_always_emits_errors() {
        let writer = BufferWriter::default();
        let logger = logger("stdout=Off", &writer);

        emit(&logger, Level::Warn, "axiom_money", "dropped");
        emit(&logger, Level::Error, "axiom_money", "failure");

        let lines = writer.lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[ERROR] axiom_money: failure"));
    }

    #[rstest]
    fn test_logger_colored_output() {
        let writer = BufferWriter {
            is_colored: true,
            ..Default::default()
        };
        let logger = logger("", &writer);

        emit(&logger, Level::Error, "axiom_money", "failure");

        let lines = writer.lines.lock().unwrap();
        assert!(lines[0].starts_with("\x1b[1m"));
        assert!(lines[0].contains("\x1b[1;31m[ERROR]"));
    }

    #[rstest]
    fn test_logger_default_writers() {
        let logger = Logger::new(LoggerConfig::default());
        assert_eq!(logger.config().stdout_level, LevelFilter::Info);
        assert!(logger.enabled(&Metadata::builder().level(Level::Info).target("x").build()));
        assert!(!logger.enabled(&Metadata::builder().level(Level::Debug).target("x").build()));
        logger.flush();
    }
}
