//! Error handling for the speed analytics dashboard

use thiserror::Error;

/// Custom error types for the speed analytics dashboard
///
/// The view pipeline itself never fails; these cover the surfaces around it
/// (configuration, dataset loading, the terminal front end).
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dataset or input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(String),

    /// Parsing errors (JSON, tab keys, sort keys, etc.)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// Export panel errors
    #[error("Export error: {0}")]
    Export(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new export error
    pub fn export<S: Into<String>>(message: S) -> Self {
        Self::Export(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Validation(_) => "VALIDATION",
            Self::Io(_) => "IO",
            Self::Parse(_) => "PARSE",
            Self::Export(_) => "EXPORT",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Config(msg) => format!(
                "Configuration problem: {}\n\n\
                 Suggestions:\n\
                 \x20 - Check your .env file format (KEY=VALUE per line)\n\
                 \x20 - DEFAULT_TAB must be one of table, analytics, settings, help, export\n\
                 \x20 - SPEED_DATA_FILE and --data must point to an existing JSON file\n\
                 \x20 - Run with --help-topic config for the full reference",
                msg
            ),
            Self::Validation(msg) | Self::Parse(msg) => format!(
                "Invalid input: {}\n\n\
                 Suggestions:\n\
                 \x20 - Sortable columns: service, testType, speed, location, date\n\
                 \x20 - Export actions: csv, excel, json, print, share-link, email\n\
                 \x20 - Datasets are JSON arrays of records with unique ids and finite speeds\n\
                 \x20 - Run with --help for all options",
                msg
            ),
            Self::Io(msg) => format!(
                "File operation failed: {}\n\nSuggestion: Check that the dataset path exists and is readable.",
                msg
            ),
            Self::Export(msg) => format!(
                "Export failed: {}\n\nSuggestion: Export actions are placeholders in this release.",
                msg
            ),
            Self::Internal(msg) => format!(
                "Internal error: {}\n\nThis is likely a bug. Please report this issue with the error details.",
                msg
            ),
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Validation(_) | Self::Parse(_) => 1,  // Invalid configuration/usage
            Self::Io(_) => 5,
            Self::Export(_) => 6,
            Self::Internal(_) => 99,
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Config(_) | Self::Validation(_) | Self::Parse(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::Io(_) | Self::Export(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
                Self::Internal(_) => {
                    format!("[{}] {}", category.bright_red().bold(), message.bright_red())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Standard library error conversions
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse(format!("JSON parse error: {}", error))
    }
}

impl From<dotenv::Error> for AppError {
    fn from(error: dotenv::Error) -> Self {
        Self::config(format!("Environment file error: {}", error))
    }
}

impl From<std::str::ParseBoolError> for AppError {
    fn from(error: std::str::ParseBoolError) -> Self {
        Self::parse(format!("Boolean parse error: {}", error))
    }
}

// Anyhow integration
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(error.to_string())
    }
}

/// Turns a failed run into the text printed on stderr
pub struct ErrorReporter {
    pub use_color: bool,
}

impl ErrorReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Category line, then the explanation with suggestions
    pub fn render(&self, error: &AppError) -> String {
        format!("{}\n\n{}", error.format_for_console(self.use_color), error.user_friendly_message())
    }

    /// Report an error to the user
    pub fn report_error(&self, error: &AppError) {
        eprintln!("{}", self.render(error));
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Error context trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error, keeping its category
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let context = f();
            match e.into() {
                AppError::Config(msg) => AppError::Config(format!("{}: {}", context, msg)),
                AppError::Validation(msg) => AppError::Validation(format!("{}: {}", context, msg)),
                AppError::Io(msg) => AppError::Io(format!("{}: {}", context, msg)),
                AppError::Parse(msg) => AppError::Parse(format!("{}: {}", context, msg)),
                AppError::Export(msg) => AppError::Export(format!("{}: {}", context, msg)),
                AppError::Internal(msg) => AppError::Internal(format!("{}: {}", context, msg)),
            }
        })
    }
}
