use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between bad invocations
/// and failures that happened while building or rendering the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the graph was rendered
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing index, unreadable index, unknown package, render failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency graph visualization.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing messages next to the variants.
#[derive(Debug, Error)]
pub enum DepgraphError {
    #[error("Package index not found: {path}\n\n💡 Hint: {suggestion}")]
    IndexNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read package index: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a plain or gzip-compressed Packages file")]
    IndexFormatError { path: PathBuf, details: String },

    #[error("Invalid package index path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a regular Packages or Packages.gz file")]
    InvalidIndexPath { path: PathBuf, reason: String },

    #[error("Package '{package}' was not found in the package index\n\n💡 Hint: Check the spelling, or make sure the index contains a 'Package: {package}' stanza")]
    PackageNotFound { package: String },

    #[error("Failed to render dependency graph: {output}\nDetails: {details}\n\n💡 Hint: {hint}")]
    RenderError {
        output: PathBuf,
        details: String,
        hint: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Invalid value in the configuration file
    #[error("Invalid config: {message}")]
    ConfigError { message: String },
}
