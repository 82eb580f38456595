//! Log level definitions for CLI verbose/debug output

use std::fmt;

/// Verbosity level for CLI output
///
/// Levels are ordered: Normal < Verbose < Debug.
/// Higher levels include all output from lower levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Standard CLI output only (default)
    #[default]
    Normal = 0,
    /// Progress messages for each step of the invocation
    Verbose = 1,
    /// HTTP method, URL, status code, timing
    Debug = 2,
}

impl LogLevel {
    /// Create a LogLevel from CLI flags and environment.
    ///
    /// Precedence: `--debug` flag, then `CIRRUS_DEBUG`, then `CIRRUS_VERBOSE`.
    pub fn from_flags_and_env(debug: bool) -> Self {
        if debug || env_truthy("CIRRUS_DEBUG") {
            Self::Debug
        } else if env_truthy("CIRRUS_VERBOSE") {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this level enables verbose output
    pub fn is_verbose(&self) -> bool {
        *self >= Self::Verbose
    }

    /// Check if this level enables debug output
    pub fn is_debug(&self) -> bool {
        *self >= Self::Debug
    }

    /// Get the display name for this level
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Verbose => "VERBOSE",
            Self::Debug => "DEBUG",
        }
    }
}

fn env_truthy(name: &str) -> bool {
    std::env::var(name)
        .map(|v| {
            let v = v.trim().to_lowercase();
            !v.is_empty() && v != "0" && v != "false"
        })
        .unwrap_or(false)
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Normal < LogLevel::Verbose);
        assert!(LogLevel::Verbose < LogLevel::Debug);
    }

    #[test]
    fn test_debug_includes_verbose() {
        assert!(LogLevel::Debug.is_verbose());
        assert!(LogLevel::Debug.is_debug());
        assert!(LogLevel::Verbose.is_verbose());
        assert!(!LogLevel::Verbose.is_debug());
        assert!(!LogLevel::Normal.is_verbose());
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(LogLevel::from_flags_and_env(true), LogLevel::Debug);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(LogLevel::Normal.to_string(), "NORMAL");
        assert_eq!(LogLevel::Debug.to_string(), "DEBUG");
    }
}
