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

//! The logging subsystem for axiom crates.
//!
//! Library code logs through the `log` facade. Applications install the [`Logger`] backend once
//! with [`init_logging`], or lazily from the `AXIOM_LOG` environment variable with
//! [`ensure_logging_initialized`].

pub mod config;
pub mod logger;
pub mod writer;

use std::sync::atomic::{AtomicBool, Ordering};

pub use self::{
    config::{AXIOM_LOG, LoggerConfig},
    logger::{LogLine, Logger},
    writer::{LogWriter, StderrWriter, StdoutWriter},
};

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Returns whether the axiom logger has been installed.
pub fn logging_is_initialized() -> bool {
    LOGGING_INITIALIZED.load(Ordering::Relaxed)
}

/// Installs the [`Logger`] as the global `log` backend.
///
/// # Errors
///
/// Returns an error if a global logger has already been installed.
pub fn init_logging(config: LoggerConfig) -> anyhow::Result<()> {
    if config.print_config {
        println!("Logging config: {config:#?}");
    }

    let max_level = config.max_level();
    log::set_boxed_logger(Box::new(Logger::new(config)))?;
    log::set_max_level(max_level);
    LOGGING_INITIALIZED.store(true, Ordering::SeqCst);
    Ok(())
}

/// Ensures logging is initialized on first use.
///
/// Uses the `AXIOM_LOG` spec when set and valid, otherwise the default configuration.
///
/// Returns `true` if the axiom logger is installed.
pub fn ensure_logging_initialized() -> bool {
    if logging_is_initialized() {
        return true;
    }

    let config = LoggerConfig::from_env().unwrap_or_default();
    if let Err(e) = init_logging(config) {
        eprintln!("Error initializing logging: {e}");
    }
    logging_is_initialized()
}
