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

//! Destinations for formatted log lines.

use std::io::{self, Stderr, Stdout, Write};

use log::{Level, LevelFilter};

use crate::logging::logger::LogLine;

pub trait LogWriter {
    /// Writes a log line.
    fn write(&mut self, line: &str);
    /// Flushes buffered logs.
    fn flush(&mut self);
    /// Checks if a line needs to be written to the writer or not.
    fn enabled(&self, line: &LogLine) -> bool;
    /// Returns `true` if lines for this writer should carry ANSI colors.
    fn is_colored(&self) -> bool;
}

#[derive(Debug)]
pub struct StdoutWriter {
    pub is_colored: bool,
    io: Stdout,
    level: LevelFilter,
}

impl StdoutWriter {
    /// Creates a new [`StdoutWriter`] instance.
    #[must_use]
    pub fn new(level: LevelFilter, is_colored: bool) -> Self {
        Self {
            io: io::stdout(),
            level,
            is_colored,
        }
    }
}

impl LogWriter for StdoutWriter {
    fn write(&mut self, line: &str) {
        if let Err(e) = self.io.write_all(line.as_bytes()) {
            eprintln!("Error writing to stdout: {e:?}");
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.io.flush() {
            eprintln!("Error flushing stdout: {e:?}");
        }
    }

    fn enabled(&self, line: &LogLine) -> bool {
        // Errors go to stderr only
        line.level > Level::Error && line.level <= self.level
    }

    fn is_colored(&self) -> bool {
        self.is_colored
    }
}

#[derive(Debug)]
pub struct StderrWriter {
    pub is_colored: bool,
    io: Stderr,
}

impl StderrWriter {
    /// Creates a new [`StderrWriter`] instance.
    #[must_use]
    pub fn new(is_colored: bool) -> Self {
        Self {
            io: io::stderr(),
            is_colored,
        }
    }
}

impl LogWriter for StderrWriter {
    fn write(&mut self, line: &str) {
        if let Err(e) = self.io.write_all(line.as_bytes()) {
            eprintln!("Error writing to stderr: {e:?}");
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.io.flush() {
            eprintln!("Error flushing stderr: {e:?}");
        }
    }

    fn enabled(&self, line: &LogLine) -> bool {
        line.level == Level::Error
    }

    fn is_colored(&self) -> bool {
        self.is_colored
    }
}
