#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use oas_resolver_core::{AppError, ResolveError};

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Error raised by the resolver core.
    #[display("{}", _0)]
    App(AppError),

    /// JSON decode/encode failure.
    #[display("JSON Error: {}", _0)]
    Json(serde_json::Error),

    /// YAML decode/encode failure.
    #[display("YAML Error: {}", _0)]
    Yaml(serde_yaml::Error),

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

impl From<ResolveError> for CliError {
    fn from(err: ResolveError) -> Self {
        Self::App(AppError::Resolve(err))
    }
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because the `General(String)`
/// variant contains a `String`, which does not implement `std::error::Error`, causing
/// auto-derived `source()` implementations to fail compilation.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
