use std::path::Path;
use std::sync::Arc;

use course_core::model::{Course, Module, ModuleDraft, ModuleId, Resource, ResourceId};

use crate::error::CatalogError;

/// Read-only course content shared by the shell, the resume flow and views.
#[derive(Clone, Debug)]
pub struct CourseCatalog {
    course: Arc<Course>,
}

impl CourseCatalog {
    #[must_use]
    pub fn new(course: Course) -> Self {
        Self {
            course: Arc::new(course),
        }
    }

    /// The compiled-in course.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Course::default_fixture())
    }

    /// Parse a catalog from a JSON array of modules.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the JSON is malformed, empty, or fails
    /// validation.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let drafts: Vec<ModuleDraft> = serde_json::from_str(json)?;
        if drafts.is_empty() {
            return Err(CatalogError::Empty);
        }
        let course = Course::from_drafts(drafts)?;
        Ok(Self::new(course))
    }

    /// Load a catalog from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise the
    /// same errors as [`CourseCatalog::from_json_str`].
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            modules = catalog.modules().len(),
            "loaded course catalog"
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        self.course.modules()
    }

    #[must_use]
    pub fn find_resource(
        &self,
        module_id: ModuleId,
        resource_id: &ResourceId,
    ) -> Option<&Resource> {
        self.course.find_resource(module_id, resource_id)
    }
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PartialEq for CourseCatalog {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.course, &other.course) || self.course == other.course
    }
}
