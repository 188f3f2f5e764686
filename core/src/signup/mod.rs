//! Email capture for launch notifications
//!
//! Independent of the countdown: validation, a local key-value store holding
//! the subscriber list, and a simulated submission.

mod email;
mod error;
mod form;
mod storage;

pub use email::{EmailFieldState, classify_email, is_valid_email};
pub use error::{SignupError, StorageError};
pub use form::{SignupForm, SignupOutcome};
pub use storage::{LocalStorage, SubscriberList};
