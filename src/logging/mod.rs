//! Verbose/debug logging for the CLI
//!
//! Provides a small logger with two optional levels above normal output:
//! verbose (pipeline progress) and debug (HTTP method, URL, status, timing).
//! All diagnostic output goes to stderr so it never mixes with rendered
//! results on stdout.

pub mod level;

pub use level::LogLevel;

/// Logger for CLI diagnostics
pub struct Logger {
    level: LogLevel,
    color: bool,
}

impl Logger {
    /// Create a new logger at the given level
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            color: std::env::var("NO_COLOR").is_err(),
        }
    }

    /// Check if verbose output is enabled
    pub fn is_verbose(&self) -> bool {
        self.level.is_verbose()
    }

    /// Check if debug output is enabled
    pub fn is_debug(&self) -> bool {
        self.level.is_debug()
    }

    /// Log a verbose progress message
    pub fn verbose(&self, message: impl Into<String>) {
        if !self.level.is_verbose() {
            return;
        }
        self.write("VERBOSE", &message.into());
    }

    /// Log an outgoing HTTP request at debug level
    pub fn debug_request(&self, method: &str, url: &str) {
        if !self.level.is_debug() {
            return;
        }
        self.write("DEBUG", &format!("→ {} {}", method, url));
    }

    /// Log an HTTP response at debug level
    pub fn debug_response(&self, status: u16, timing_ms: u64) {
        if !self.level.is_debug() {
            return;
        }
        self.write("DEBUG", &format!("← {} ({}ms)", status, timing_ms));
    }

    fn write(&self, tag: &str, message: &str) {
        if self.color {
            eprintln!("\x1b[2m[{}]\x1b[0m {}", tag, message);
        } else {
            eprintln!("[{}] {}", tag, message);
        }
    }
}

/// Global logger instance for use throughout the CLI
static GLOBAL_LOGGER: std::sync::OnceLock<Logger> = std::sync::OnceLock::new();

/// Initialize the global logger.
///
/// Called once at startup with the resolved level; a second call is ignored.
pub fn init_global_logger(level: LogLevel) {
    let _ = GLOBAL_LOGGER.set(Logger::new(level));
}

/// Get a reference to the global logger, if initialized
pub fn global_logger() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}

/// Log a verbose message using the global logger
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if let Some(logger) = $crate::logging::global_logger() {
            logger.verbose(format!($($arg)*));
        }
    };
}
