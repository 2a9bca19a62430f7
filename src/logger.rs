//! Custom logging module.
//!
//! Records are formatted and forwarded over a channel so the render loop can
//! move them into the log panel without the logger touching application state.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};

type LogCallback = Box<dyn Fn(String) + Send + Sync>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {:<5} {}", timestamp, level_str, record.args())
}

/// Logger that hands every formatted record to a callback.
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<LogCallback>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: LogCallback) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
        // A poisoned lock only loses captured output
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(callback) = self.log_callback.lock() {
            if let Some(ref cb) = *callback {
                cb(format_log(record));
            }
        }
    }

    fn flush(&self) {}
}

/// Install the global logger at the given level and return the receiving
/// end of its output. Fails if a logger is already installed.
///
pub fn init(level: LevelFilter) -> AppResult<Receiver<String>> {
    let (tx, rx) = mpsc::channel::<String>();
    let tx = Mutex::new(tx);
    let logger = CustomLogger::new(level);
    logger.set_log_callback(Box::new(move |entry| {
        if let Ok(tx) = tx.lock() {
            // The receiver is gone once the UI loop exits
            let _ = tx.send(entry);
        }
    }));
    log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at<'a>(level: Level, args: std::fmt::Arguments<'a>) -> Record<'a> {
        Record::builder().level(level).target("sweet").args(args).build()
    }

    #[test]
    fn format_includes_level_and_message() {
        let formatted = format_log(&record_at(Level::Warn, format_args!("path not found")));
        assert!(formatted.contains("WARN"));
        assert!(formatted.ends_with("path not found"));
    }

    #[test]
    fn callback_receives_enabled_records() {
        let captured = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = Arc::clone(&captured);
        let logger = CustomLogger::new(LevelFilter::Info);
        logger.set_log_callback(Box::new(move |entry| sink.lock().unwrap().push(entry)));

        logger.log(&record_at(Level::Info, format_args!("mounted landing")));
        logger.log(&record_at(Level::Debug, format_args!("tick")));

        let captured = captured.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert!(captured[0].contains("mounted landing"));
    }

    #[test]
    fn logging_without_callback_is_silent() {
        let logger = CustomLogger::new(LevelFilter::Trace);
        logger.log(&record_at(Level::Error, format_args!("dropped")));
    }
}
