// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/logging.rs
// Version: 1.0.0
//
// This file sets up log4rs for the commit miner, located in the utils
// subdirectory. Diagnostics always go to stderr; stdout carries the mined
// commit only.
//
// Tree Location:
// - src/utils/logging.rs (logger initialisation)
// - Depends on: log, log4rs

use crate::core::error::MinerError;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

/// Level, thread name and message, e.g. `INFO  [worker-C] ...`
pub const LOG_PATTERN: &str = "{d(%H:%M:%S%.3f)} {l:<5} [{T}] {m}{n}";

const STDERR_APPENDER: &str = "stderr";

/// Built-in configuration: a single stderr console appender
pub fn default_config(level: LevelFilter) -> Result<Config, MinerError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(STDERR_APPENDER).build(level))
        .map_err(|e| MinerError::LogInit { message: e.to_string() })
}

/// Install the global logger, from a YAML file when one is given
pub fn init_logging(level: LevelFilter, config_file: Option<&Path>) -> Result<(), MinerError> {
    match config_file {
        Some(path) => log4rs::init_file(path, Default::default()).map_err(|e| MinerError::LogConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
        None => {
            let config = default_config(level)?;
            log4rs::init_config(config)
                .map(|_handle| ())
                .map_err(|e| MinerError::LogInit { message: e.to_string() })
        }
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial release.
//   - stderr console appender with an optional log4rs YAML override.
