use chrono::Utc;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;

const DEFAULT_LOG_FILE: &str = "default.log";

#[derive(thiserror::Error, Debug)]
pub enum LoggerError {
    #[error("failed to open log file '{path}': {source}")]
    OpenFile { path: String, source: io::Error },
    #[error("a logger is already installed: {0}")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

/// Writes log records either to the console (with colors) or appended to a file.
pub struct Logger {
    file: Option<Mutex<File>>,
    level: LevelFilter,
}

impl Logger {
    /// Creates a new `Logger` instance.
    ///
    /// # Parameters
    /// - `log_to_file`: Determines if the logger writes messages to a file (`true`) or to the console (`false`).
    /// - `log_file`: Optional file path for the log file. If `None`, defaults to "default.log".
    /// - `level`: The most verbose level that gets written.
    ///
    /// # Returns
    /// A new `Logger`, or an error when the log file cannot be opened.
    pub fn new(
        log_to_file: bool,
        log_file: Option<&str>,
        level: LevelFilter,
    ) -> Result<Self, LoggerError> {
        let file = if log_to_file {
            let path = log_file.unwrap_or(DEFAULT_LOG_FILE);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggerError::OpenFile {
                    path: path.to_string(),
                    source,
                })?;
            Some(Mutex::new(file))
        } else {
            None
        };
        Ok(Logger { file, level })
    }

    /// Installs the logger as the global `log` backend.
    pub fn install(self) -> Result<(), LoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    fn write_console(&self, level: Level, line: &str) {
        let colored_message = match level {
            Level::Error => format!("\x1b[91m{}\x1b[0m", line), // Bright Red
            Level::Warn => format!("\x1b[93m{}\x1b[0m", line),  // Bright Yellow
            Level::Info => format!("\x1b[96m{}\x1b[0m", line),  // Turquoise
            Level::Debug | Level::Trace => format!("\x1b[90m{}\x1b[0m", line),
        };
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(colored_message.as_bytes());
        let _ = stdout.flush();
    }

    fn write_file(&self, file: &Mutex<File>, line: &str) {
        // A poisoned lock only means another thread panicked mid-write; keep logging.
        let mut file = match file.lock() {
            Ok(file) => file,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = file.write_all(line.as_bytes());
        let _ = file.flush();
    }
}

/// Formats a single log line: `[LEVEL] [timestamp] target: message`.
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
    format!("[{}] [{}] {}: {}\n", level, timestamp, target, message)
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        match &self.file {
            Some(file) => self.write_file(file, &line),
            None => self.write_console(record.level(), &line),
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Builds a logger from the given options and installs it globally.
pub fn init(log_to_file: bool, log_file: Option<&str>, level: LevelFilter) -> Result<(), LoggerError> {
    Logger::new(log_to_file, log_file, level)?.install()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record_at<'a>(level: Level, args: std::fmt::Arguments<'a>) -> Record<'a> {
        Record::builder()
            .level(level)
            .target("parking_directory")
            .args(args)
            .build()
    }

    #[test]
    fn test_format_line() {
        let line = format_line(Level::Warn, "parking_directory::table", "row 3 has no place id");
        assert!(line.starts_with("[WARN] ["));
        assert!(line.contains("parking_directory::table: row 3 has no place id"));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_console_logging() {
        let logger = Logger::new(false, None, LevelFilter::Info).unwrap();
        logger.log(&record_at(Level::Info, format_args!("Test info message")));
        logger.log(&record_at(Level::Error, format_args!("Test error message")));
        // This test only verifies that logging doesn't panic in console mode.
    }

    #[test]
    fn test_file_logging() {
        let log_file = "test_parking.log";
        let logger = Logger::new(true, Some(log_file), LevelFilter::Debug).unwrap();

        logger.log(&record_at(Level::Info, format_args!("Test info message in file")));
        logger.log(&record_at(Level::Warn, format_args!("Test warning message in file")));
        logger.log(&record_at(Level::Debug, format_args!("Test debug message in file")));

        let contents = fs::read_to_string(log_file).unwrap();
        assert!(contents.contains("[INFO]"));
        assert!(contents.contains("Test info message in file"));
        assert!(contents.contains("[WARN]"));
        assert!(contents.contains("[DEBUG]"));

        // Cleanup
        fs::remove_file(log_file).unwrap();
    }

    #[test]
    fn test_level_filtering() {
        let log_file = "level_test.log";
        let logger = Logger::new(true, Some(log_file), LevelFilter::Warn).unwrap();

        logger.log(&record_at(Level::Info, format_args!("should be skipped")));
        logger.log(&record_at(Level::Error, format_args!("should be written")));

        let contents = fs::read_to_string(log_file).unwrap();
        assert!(!contents.contains("should be skipped"));
        assert!(contents.contains("should be written"));

        fs::remove_file(log_file).unwrap();
    }

    #[test]
    fn test_file_append() {
        let log_file = "append_parking_test.log";
        let logger = Logger::new(true, Some(log_file), LevelFilter::Info).unwrap();
        logger.log(&record_at(Level::Info, format_args!("First log message")));

        // Reopen logger to simulate appending to an existing file
        let logger2 = Logger::new(true, Some(log_file), LevelFilter::Info).unwrap();
        logger2.log(&record_at(Level::Info, format_args!("Second log message")));

        let contents = fs::read_to_string(log_file).unwrap();
        assert!(contents.contains("First log message"));
        assert!(contents.contains("Second log message"));

        fs::remove_file(log_file).unwrap();
    }

    #[test]
    fn test_unopenable_file() {
        let result = Logger::new(true, Some("/nonexistent-dir/parking.log"), LevelFilter::Info);
        assert!(matches!(result, Err(LoggerError::OpenFile { .. })));
    }
}
