use std::collections::HashSet;
use thiserror::Error;

use crate::error::Error;
use crate::model::ids::{ModuleId, ResourceId};
use crate::model::module::{Module, ModuleDraft};
use crate::model::resource::Resource;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("duplicate module id {0}")]
    DuplicateModule(ModuleId),
}

/// The read-only content fixture: an ordered collection of modules.
///
/// Lookups return `None` rather than an error; callers render a "not found"
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    modules: Vec<Module>,
}

impl Course {
    /// Build a course from already validated modules.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::DuplicateModule` if two modules share an id.
    pub fn new(modules: Vec<Module>) -> Result<Self, CourseError> {
        let mut seen = HashSet::with_capacity(modules.len());
        for module in &modules {
            if !seen.insert(module.id()) {
                return Err(CourseError::DuplicateModule(module.id()));
            }
        }
        Ok(Self { modules })
    }

    /// Validate drafts (e.g. from a JSON fixture) into a course.
    ///
    /// # Errors
    ///
    /// Returns the first module or course validation failure.
    pub fn from_drafts(drafts: Vec<ModuleDraft>) -> Result<Self, Error> {
        let modules = drafts
            .into_iter()
            .map(ModuleDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(modules)?)
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    #[must_use]
    pub fn find_module(&self, module_id: ModuleId) -> Option<&Module> {
        self.modules.iter().find(|module| module.id() == module_id)
    }

    #[must_use]
    pub fn find_resource(
        &self,
        module_id: ModuleId,
        resource_id: &ResourceId,
    ) -> Option<&Resource> {
        self.find_module(module_id)?.find_resource(resource_id)
    }
}
