//! Error types and handling for Playprep
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! Every variant aborts the whole validation pass on first occurrence; there
//! is no retry or partial recovery, and no upload is attempted after a
//! failure. Advisory findings are not errors, they travel as warning strings
//! alongside results.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Playprep operations
#[derive(Error, Diagnostic, Debug)]
pub enum PlayprepError {
    // Credential errors
    #[error("json key path not exist at: {path}")]
    #[diagnostic(
        code(playprep::key::not_found),
        help(
            "service_account_json_key_path with a file:// scheme must point at an existing JSON key file"
        )
    )]
    JsonKeyNotFound { path: String },

    // Optional input path errors
    #[error("what's new directory not exist at: {path}")]
    #[diagnostic(code(playprep::whatsnews::not_found))]
    WhatsnewsDirNotFound { path: String },

    #[error("mapping file not exist at: {path}")]
    #[diagnostic(code(playprep::mapping::not_found))]
    MappingFileNotFound { path: String },

    // App binary errors
    #[error("app not exist at: {path}")]
    #[diagnostic(
        code(playprep::app::not_found),
        help("check that the build step producing the artifact ran before this one")
    )]
    AppNotFound { path: String },

    #[error("no app provided")]
    #[diagnostic(
        code(playprep::app::none_provided),
        help("app_path must list at least one existing .apk or .aab file")
    )]
    NoAppProvided,

    // Expansion file errors
    #[error("mismatching number of APKs({apps}) and Expansionfiles({entries})")]
    #[diagnostic(
        code(playprep::expansion::count_mismatch),
        help(
            "expansionfile_path must carry exactly one pipe-separated entry per uploaded app; leave an entry empty to skip that app"
        )
    )]
    ExpansionCountMismatch { apps: usize, entries: usize },

    // Scalar range errors
    #[error("user fraction out of range ]0.0..1.0[: {value}")]
    #[diagnostic(
        code(playprep::rollout::fraction_out_of_range),
        help("omit user_fraction entirely to release to all users at once")
    )]
    UserFractionOutOfRange { value: f64 },

    #[error("update priority out of range [0..5]: {value}")]
    #[diagnostic(code(playprep::rollout::priority_out_of_range))]
    UpdatePriorityOutOfRange { value: i64 },

    // File system errors
    #[error("failed to check if {what} exist at: {path}, error: {reason}")]
    #[diagnostic(code(playprep::fs::check_failed))]
    PathCheckFailed {
        what: String,
        path: String,
        reason: String,
    },
}

/// Wrap an I/O failure from an existence probe
pub fn path_check_failed(what: &str, path: &str, err: &std::io::Error) -> PlayprepError {
    PlayprepError::PathCheckFailed {
        what: what.to_string(),
        path: path.to_string(),
        reason: err.to_string(),
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PlayprepError>;
