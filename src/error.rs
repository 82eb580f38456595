//! CLI error types and exit codes

use thiserror::Error;

/// Exit codes for the CLI
/// - 0: Success
/// - 1: I/O or rendering error
/// - 2: Usage error
/// - 3: Configuration error (credentials, environment)
/// - 4: Flag decode error
/// - 5: Service error
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid value for --{flag}: {details}")]
    Decode { flag: String, details: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Service error (status {status}): {message}")]
    Transport { status: u16, message: String },

    #[error("Request failed: {0}")]
    Connection(String),

    #[error("Output error: {0}")]
    Render(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Config(_) => 3,
            CliError::Decode { .. } => 4,
            CliError::Io(_) => 1,
            CliError::Transport { .. } | CliError::Connection(_) => 5,
            CliError::Render(_) => 1,
        }
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        // Usage errors arrive pre-rendered by the parser, usage text included.
        if let CliError::Usage(message) = self {
            eprintln!("{}", message);
            return;
        }

        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }

        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {}", suggestion);
            } else {
                eprintln!("\nSuggestion: {}", suggestion);
            }
        }
    }

    /// Get a suggested action for this error
    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::Config(_) => {
                Some("Check the service's environment variables (e.g. ASSISTANT_APIKEY).")
            }
            CliError::Connection(_) => Some("Check your network connection and try again."),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CliError::Connection("Request timed out".to_string())
        } else {
            CliError::Connection(e.to_string())
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Render(format!("JSON error: {}", e))
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(e: serde_yaml::Error) -> Self {
        CliError::Render(format!("YAML error: {}", e))
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(e: dialoguer::Error) -> Self {
        CliError::Io(format!("Prompt error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_usage() {
        assert_eq!(CliError::Usage("bad flag".to_string()).exit_code(), 2);
    }

    #[test]
    fn test_exit_code_config() {
        assert_eq!(CliError::Config("no credentials".to_string()).exit_code(), 3);
    }

    #[test]
    fn test_exit_code_decode() {
        let e = CliError::Decode {
            flag: "features".to_string(),
            details: "expected a JSON object".to_string(),
        };
        assert_eq!(e.exit_code(), 4);
    }

    #[test]
    fn test_exit_code_io() {
        assert_eq!(CliError::Io("missing file".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_exit_code_transport() {
        let e = CliError::Transport {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(e.exit_code(), 5);
    }

    #[test]
    fn test_exit_code_render() {
        assert_eq!(CliError::Render("bad value".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_decode_display_names_flag() {
        let e = CliError::Decode {
            flag: "collection".to_string(),
            details: "expected a JSON array".to_string(),
        };
        assert!(e.to_string().contains("--collection"));
    }

    #[test]
    fn test_transport_display_includes_status() {
        let e = CliError::Transport {
            status: 404,
            message: "Model not found".to_string(),
        };
        assert!(e.to_string().contains("404"));
        assert!(e.to_string().contains("Model not found"));
    }
}
