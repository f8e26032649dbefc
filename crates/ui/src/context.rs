use std::sync::Arc;

use services::{CourseCatalog, ResumeController, ResumeService};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> CourseCatalog;

    fn resume(&self) -> Arc<ResumeService>;
    fn resume_controller(&self) -> Arc<ResumeController>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: CourseCatalog,
    resume: Arc<ResumeService>,
    resume_controller: Arc<ResumeController>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            resume: app.resume(),
            resume_controller: app.resume_controller(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> CourseCatalog {
        self.catalog.clone()
    }

    #[must_use]
    pub fn resume(&self) -> Arc<ResumeService> {
        Arc::clone(&self.resume)
    }

    #[must_use]
    pub fn resume_controller(&self) -> Arc<ResumeController> {
        Arc::clone(&self.resume_controller)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
