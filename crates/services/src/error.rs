//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `RegistrationService`.
///
/// These never escalate past the form surface; callers show them and move on.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistrationError {
    #[error("{0} is required")]
    EmptyField(&'static str),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
