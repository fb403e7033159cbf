#![forbid(unsafe_code)]

pub mod error;
pub mod listener;
pub mod progress_tracker;
pub mod registration_service;

pub use error::RegistrationError;
pub use listener::CompletionListener;
pub use progress_tracker::{PROGRESS_KEY, ProgressTracker, ToggleOutcome};
pub use registration_service::{DEFAULT_INTAKE_URL, Registration, RegistrationService};
