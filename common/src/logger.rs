use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        if !self.verbose {
            return;
        }
        eprintln!("{}", self.format_line(file, line, message));
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }
}

/// Installs the process-wide logger. Later calls keep the first configuration.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

/// Messages sent before `init_logger` are dropped, so library code and tests can log freely.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories_from_file_name() {
        let logger = Logger::new(None, true);

        let line = logger.format_line("common/src/games/tictactoe/engine.rs", 42, "hello");

        assert!(line.ends_with("[engine.rs:42] hello"));
    }

    #[test]
    fn test_format_line_includes_prefix() {
        let logger = Logger::new(Some("Client".to_string()), true);

        let line = logger.format_line("main.rs", 7, "started");

        assert!(line.contains("[Client][main.rs:7] started"));
    }

    #[test]
    fn test_log_before_init_does_not_panic() {
        log("main.rs", 1, "dropped");
    }
}
