use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

/// A logger that writes every record to stdout, prefixed with an epoch
/// timestamp, the level and the call site.
pub struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        println!(
            "{} [{}] {}:{} - {}",
            format_timestamp(),
            record.level(),
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
            record.args()
        );
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

/// Seconds since the Unix epoch with millisecond resolution.
pub fn format_timestamp() -> String {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:03}", elapsed.as_secs(), elapsed.subsec_millis())
}

/// Install the stdout logger with the given maximum level.
///
/// This can only take effect once per process; later calls are silently
/// ignored.
pub fn init_stdout_logger(max_level: LevelFilter) {
    static LOGGER: StdoutLogger = StdoutLogger;

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level);
    }
}
