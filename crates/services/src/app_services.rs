use std::sync::Arc;
use std::time::Duration;

use storage::repository::Storage;

use crate::Clock;
use crate::catalog::CourseCatalog;
use crate::error::AppServicesError;
use crate::resume_controller::ResumeController;
use crate::resume_service::ResumeService;

/// Assembles app-facing services over a storage backend and a catalog.
#[derive(Clone)]
pub struct AppServices {
    catalog: CourseCatalog,
    resume: Arc<ResumeService>,
    resume_controller: Arc<ResumeController>,
}

impl AppServices {
    #[must_use]
    pub fn new(
        storage: &Storage,
        catalog: CourseCatalog,
        clock: Clock,
        resume_delay: Duration,
    ) -> Self {
        let resume = Arc::new(ResumeService::new(clock, Arc::clone(&storage.kv)));
        let resume_controller = Arc::new(ResumeController::new(Arc::clone(&resume), resume_delay));
        Self {
            catalog,
            resume,
            resume_controller,
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        catalog: CourseCatalog,
        clock: Clock,
        resume_delay: Duration,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(&storage, catalog, clock, resume_delay))
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

    /// Drop any persisted last-viewed resource before the UI starts.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Resume` if the store cannot be written.
    pub async fn forget_last_viewed(&self) -> Result<bool, AppServicesError> {
        Ok(self.resume.clear().await?)
    }
}
