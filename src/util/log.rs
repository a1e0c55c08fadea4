// src/util/log.rs

//! File-based logging for the terminal UI, where stdout belongs to the screen.
//!
//! Each severity goes to its own file under the configured log directory.
//! Every entry is also forwarded to `tracing`, so one-shot CLI commands that
//! install a subscriber see the same messages on stderr.
use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use chrono::Local;

pub static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Global logger instance, set once by [`init`]
pub static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Log severity levels
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// Logger that writes to separate files by severity
#[derive(Debug)]
pub struct Logger {
    log_dir: PathBuf,
    error_file: Mutex<File>,
    warn_file: Mutex<File>,
    info_file: Mutex<File>,
    debug_file: Mutex<File>,
}

/// Install the global logger. Later calls keep the first logger.
pub fn init(log_dir: &Path, debug: bool) -> std::io::Result<()> {
    DEBUG_ENABLED.get_or_init(|| {
        debug || std::env::var("DEBUG").unwrap_or_default() == "true"
    });

    if LOGGER.get().is_none() {
        let logger = Logger::new(log_dir)?;
        let _ = LOGGER.set(logger);
    }
    Ok(())
}

pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get().unwrap_or(&false)
}

impl Logger {
    /// Create a new logger with the specified directory
    pub fn new(log_dir: &Path) -> std::io::Result<Self> {
        let log_dir = log_dir.to_path_buf();

        create_dir_all(&log_dir)?;

        // start fresh each run
        let error_file = File::create(log_dir.join("error.log"))?;
        let warn_file = File::create(log_dir.join("warn.log"))?;
        let info_file = File::create(log_dir.join("info.log"))?;
        let debug_file = File::create(log_dir.join("debug.log"))?;

        Ok(Self {
            log_dir,
            error_file: Mutex::new(error_file),
            warn_file: Mutex::new(warn_file),
            info_file: Mutex::new(info_file),
            debug_file: Mutex::new(debug_file),
        })
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Write a log entry to the appropriate file
    pub fn write_log(&self, level: LogLevel, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let formatted = format!("[{}] [{}] {}\n", timestamp, level.as_str(), message);

        let file = match level {
            LogLevel::Error => &self.error_file,
            LogLevel::Warn => &self.warn_file,
            LogLevel::Info => &self.info_file,
            LogLevel::Debug => &self.debug_file,
        };

        if let Ok(mut file) = file.lock() {
            let _ = file.write_all(formatted.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Route one message to the file logger (if installed) and to `tracing`.
pub fn emit(level: LogLevel, message: &str) {
    match level {
        LogLevel::Error => tracing::error!("{}", message),
        LogLevel::Warn => tracing::warn!("{}", message),
        LogLevel::Info => tracing::info!("{}", message),
        LogLevel::Debug => tracing::debug!("{}", message),
    }
    if let Some(logger) = LOGGER.get() {
        logger.write_log(level, message);
    }
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::util::log::emit($crate::util::log::LogLevel::Error, &message);
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::util::log::emit($crate::util::log::LogLevel::Warn, &message);
    }};
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::util::log::emit($crate::util::log::LogLevel::Info, &message);
    }};
}

/// Debug entries are dropped unless debug logging was enabled at init
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if $crate::util::log::debug_enabled() {
            let message = format!($($arg)*);
            $crate::util::log::emit($crate::util::log::LogLevel::Debug, &message);
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_logger_creation() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let logger = Logger::new(temp_dir.path()).expect("Failed to create logger");

        logger.write_log(LogLevel::Error, "Test error");
        logger.write_log(LogLevel::Info, "Test info");

        assert!(temp_dir.path().join("error.log").exists());
        assert!(temp_dir.path().join("warn.log").exists());
        assert!(temp_dir.path().join("info.log").exists());
        assert!(temp_dir.path().join("debug.log").exists());

        let info = fs::read_to_string(temp_dir.path().join("info.log")).unwrap();
        assert!(info.contains("[INFO] Test info"));
        assert_eq!(logger.log_dir(), temp_dir.path());
    }
}
