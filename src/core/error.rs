//! Error handling for portfolio
//!
//! Two layers cooperate here:
//! - [`PortfolioError`] - typed failures raised by the loader, renderer and config code
//! - [`ErrorContext`] - a wrapper that adds details and an actionable suggestion for CLI users
//!
//! Commands return [`anyhow::Result`] and attach context as errors bubble up.
//! At the top level, [`user_friendly_error`] walks the error chain, finds the most
//! specific known error, and builds an [`ErrorContext`] that `main` prints in colour.
//!
//! # Examples
//!
//! ```rust,no_run
//! use portfolio_cli::core::{ErrorContext, PortfolioError, user_friendly_error};
//!
//! let error = PortfolioError::ConfigError {
//!     message: "projects_dir must not be empty".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::frontmatter::FrontMatterError;

/// The main error type for portfolio operations.
///
/// Front-matter extraction has its own narrow error type,
/// [`FrontMatterError`]; the loader lifts it into
/// [`PortfolioError::MalformedFrontMatter`] with the offending file attached.
#[derive(Error, Debug, Clone)]
pub enum PortfolioError {
    /// A project file could not be read
    #[error("Failed to load project file '{file}'")]
    ProjectLoad {
        /// File name within the projects directory
        file: String,
        /// Underlying cause
        reason: String,
    },

    /// A project file has a `{ ... }` value that is not valid JSON
    #[error("Malformed front matter in '{file}': value for '{key}' is not a valid object")]
    MalformedFrontMatter {
        /// File name within the projects directory
        file: String,
        /// Front-matter key whose value failed to parse
        key: String,
        /// JSON parser message
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration file parsing error
    #[error("Invalid configuration file syntax in {file}")]
    ConfigParseError {
        /// Path to the configuration file that failed to parse
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// Page rendering failed
    #[error("Failed to render projects page: {reason}")]
    RenderError {
        /// Template engine message
        reason: String,
    },

    /// File system operation failed
    #[error("File system error during {operation}: {path}")]
    FileSystemError {
        /// The operation that failed (e.g. "read", "write")
        operation: String,
        /// Path involved in the failure
        path: String,
    },

    /// Permission denied
    #[error("Permission denied: {operation} on {path}")]
    PermissionDenied {
        /// The operation that was denied
        operation: String,
        /// Path involved in the failure
        path: String,
    },

    /// Anything without a more specific variant
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl PortfolioError {
    /// Lift a front-matter error for `file` into a [`PortfolioError`].
    pub fn from_front_matter(file: impl Into<String>, error: &FrontMatterError) -> Self {
        match error {
            FrontMatterError::MalformedObject {
                key,
                source,
            } => Self::MalformedFrontMatter {
                file: file.into(),
                key: key.clone(),
                reason: source.to_string(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// Pairs a [`PortfolioError`] with optional details (why it happened) and a
/// suggestion (what to do next).
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: PortfolioError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: PortfolioError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: red and bold
    /// - Details: yellow
    /// - Suggestion: green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Attach the standard details and suggestion for a known [`PortfolioError`].
pub fn create_error_context(error: &PortfolioError) -> ErrorContext {
    let ctx = ErrorContext::new(error.clone());
    match error {
        PortfolioError::ProjectLoad {
            reason,
            ..
        } => ctx
            .with_details(reason.clone())
            .with_suggestion("Check that the file is readable UTF-8 text"),
        PortfolioError::MalformedFrontMatter {
            key,
            reason,
            ..
        } => ctx.with_details(reason.clone()).with_suggestion(format!(
            "Values wrapped in braces are parsed as JSON; quote the keys and strings in '{key}', e.g. {{\"github\": \"https://...\"}}"
        )),
        PortfolioError::ConfigError {
            ..
        } => ctx.with_suggestion("Check the settings in portfolio.toml"),
        PortfolioError::ConfigParseError {
            reason,
            ..
        } => ctx
            .with_details(reason.clone())
            .with_suggestion("Check the TOML syntax in your portfolio.toml file. Verify quotes and brackets"),
        PortfolioError::RenderError {
            ..
        } => ctx.with_suggestion("If you use a custom template, check its Tera syntax and variable names"),
        PortfolioError::FileSystemError {
            ..
        } => ctx.with_suggestion("Check that the path exists and you have the necessary permissions"),
        PortfolioError::PermissionDenied {
            ..
        } => ctx.with_suggestion("Check file permissions and try running with appropriate privileges"),
        PortfolioError::Other {
            ..
        } => ctx,
    }
}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// Walks the `anyhow` chain looking for a [`PortfolioError`], a
/// [`FrontMatterError`], or a [`std::io::Error`]; falls back to the full
/// chain rendered as one message.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(portfolio_error) = cause.downcast_ref::<PortfolioError>() {
            return create_error_context(portfolio_error);
        }

        if let Some(fm_error) = cause.downcast_ref::<FrontMatterError>() {
            return create_error_context(&PortfolioError::from_front_matter("<input>", fm_error));
        }

        if let Some(io_error) = cause.downcast_ref::<std::io::Error>() {
            match io_error.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    return ErrorContext::new(PortfolioError::PermissionDenied {
                        operation: "file access".to_string(),
                        path: "unknown".to_string(),
                    })
                    .with_details(format!("{error:#}"))
                    .with_suggestion("Check file permissions and try running with appropriate privileges");
                }
                std::io::ErrorKind::NotFound => {
                    return ErrorContext::new(PortfolioError::FileSystemError {
                        operation: "file access".to_string(),
                        path: "unknown".to_string(),
                    })
                    .with_details(format!("{error:#}"))
                    .with_suggestion("Check that the file or directory exists and the path is correct");
                }
                _ => {}
            }
        }
    }

    ErrorContext::new(PortfolioError::Other {
        message: format!("{error:#}"),
    })
}
