use std::sync::Arc;

use services::{ProgressTracker, RegistrationService};
use tracker_core::model::Catalog;

use crate::toast::ToastHub;

pub trait UiApp: Send + Sync {
    fn tracker(&self) -> Arc<ProgressTracker>;
    fn registration(&self) -> Arc<RegistrationService>;
    fn toasts(&self) -> Arc<ToastHub>;
}

#[derive(Clone)]
pub struct AppContext {
    tracker: Arc<ProgressTracker>,
    registration: Arc<RegistrationService>,
    toasts: Arc<ToastHub>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            tracker: app.tracker(),
            registration: app.registration(),
            toasts: app.toasts(),
        }
    }

    #[must_use]
    pub fn tracker(&self) -> Arc<ProgressTracker> {
        Arc::clone(&self.tracker)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        self.tracker.catalog()
    }

    #[must_use]
    pub fn registration(&self) -> Arc<RegistrationService> {
        Arc::clone(&self.registration)
    }

    #[must_use]
    pub fn toasts(&self) -> Arc<ToastHub> {
        Arc::clone(&self.toasts)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
