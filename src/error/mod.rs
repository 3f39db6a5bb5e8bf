//! Error types and handling for assetpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration errors
//! - [`deps`]: Dependency graph errors
//! - [`fs`]: File system and compressor errors

pub mod config;
pub mod deps;
pub mod fs;

pub use config::{
    invalid as config_invalid, missing_option, name_collision, parse_failed as config_parse_failed,
    unknown_option,
};
pub use deps::{ambiguous_owner, circular as circular_dependency, unknown_bundle};
pub use fs::{compressor_failed, read_failed as file_read_failed, write_failed as file_write_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for assetpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum AssetError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(assetpack::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(assetpack::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(assetpack::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Unknown configuration option: {name}")]
    #[diagnostic(
        code(assetpack::config::unknown_option),
        help("Recognized options are: bundles, extensions, targets, assetManager")
    )]
    UnknownOption { name: String },

    #[error("Please specify '{option}' for {owner}")]
    #[diagnostic(code(assetpack::config::missing_option))]
    MissingOption { option: String, owner: String },

    #[error("Name '{name}' is used by both a bundle and a target")]
    #[diagnostic(
        code(assetpack::config::name_collision),
        help("Bundle names and target names share one namespace in the generated manifest")
    )]
    NameCollision { name: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(assetpack::config::invalid))]
    ConfigInvalid { message: String },

    // Dependency errors
    #[error("Unknown bundle: {name} (referenced by '{referrer}')")]
    #[diagnostic(
        code(assetpack::deps::unknown_bundle),
        help("Declare the bundle inline or in an extension's assets.yaml")
    )]
    UnknownBundle { name: String, referrer: String },

    #[error("A circular dependency is detected for '{name}': {chain}")]
    #[diagnostic(
        code(assetpack::deps::circular),
        help("Remove the circular dependency from your bundle or target configuration")
    )]
    CircularDependency { name: String, chain: String },

    #[error("Bundle '{bundle}' is found in both target '{first}' and '{second}'")]
    #[diagnostic(
        code(assetpack::deps::ambiguous_owner),
        help("A bundle may be listed directly by at most one target")
    )]
    AmbiguousOwnership {
        bundle: String,
        first: String,
        second: String,
    },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(assetpack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(assetpack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Compressor '{tool}' failed: {reason}")]
    #[diagnostic(code(assetpack::fs::compressor_failed))]
    CompressorFailed { tool: String, reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(assetpack::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl From<serde_yaml::Error> for AssetError {
    fn from(err: serde_yaml::Error) -> Self {
        AssetError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AssetError>;
