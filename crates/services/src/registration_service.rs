use std::env;

use reqwest::Client;
use serde::Serialize;
use tracing::info;

use crate::error::RegistrationError;

/// Default intake endpoint, overridable via `TRACKER_INTAKE_URL`.
pub const DEFAULT_INTAKE_URL: &str =
    "https://script.google.com/macros/s/AKfycbxr50GtbIX4qAM40Rls1Y3oE-dzlWHAxWmkEbpGuKCvk9JuEEx6CoPg-CKWisEgHblpIg/exec";

/// Registration details collected by the form surface.
///
/// Field names follow the intake endpoint's expected payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub college: String,
    pub branch: String,
}

impl Registration {
    /// Check that every field carries a non-blank value.
    ///
    /// # Errors
    ///
    /// Returns `RegistrationError::EmptyField` naming the first blank field.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        for (label, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone number", &self.phone_number),
            ("college", &self.college),
            ("branch", &self.branch),
        ] {
            if value.trim().is_empty() {
                return Err(RegistrationError::EmptyField(label));
            }
        }
        Ok(())
    }
}

/// Forwards registration details to the remote intake endpoint.
///
/// Fire-and-forget: the endpoint publishes no response contract, so the body
/// and status are ignored. Only transport failures are reported, and those
/// stop at the form surface.
#[derive(Clone)]
pub struct RegistrationService {
    client: Client,
    endpoint: String,
}

impl RegistrationService {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        let endpoint =
            env::var("TRACKER_INTAKE_URL").unwrap_or_else(|_| DEFAULT_INTAKE_URL.into());
        Self::new(endpoint)
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit a registration.
    ///
    /// # Errors
    ///
    /// Returns `RegistrationError::EmptyField` for blank fields and
    /// `RegistrationError::Http` if the request cannot be sent.
    pub async fn submit(&self, registration: &Registration) -> Result<(), RegistrationError> {
        registration.validate()?;

        self.client
            .post(&self.endpoint)
            .json(registration)
            .send()
            .await?;

        info!("registration forwarded to intake endpoint");
        Ok(())
    }
}
