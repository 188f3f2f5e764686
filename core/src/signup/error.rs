//! Error types for the signup form and its local store

use std::path::PathBuf;
use thiserror::Error;

/// Errors reading or writing the local key-value store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read local storage {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write local storage {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create storage directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt local storage data in {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode local storage data")]
    Encode(#[source] serde_json::Error),

    #[error("no storage location available")]
    NoLocation,
}

/// Errors a signup submission can end with. Display text is user-facing.
#[derive(Debug, Error)]
pub enum SignupError {
    #[error("Please enter your email address.")]
    EmptyEmail,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Server error. Please try again.")]
    Submission,

    #[error("could not update the subscriber list")]
    Storage(#[from] StorageError),
}
