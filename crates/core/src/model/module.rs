use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::model::ids::{ModuleId, ResourceId};
use crate::model::resource::{Resource, ResourceDraft, ResourceError, normalize_optional};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModuleError {
    #[error("module title cannot be empty")]
    EmptyTitle,

    #[error("module progress must be between 0 and 100, got {0}")]
    ProgressOutOfRange(u8),

    #[error("module score must be a finite, non-negative number")]
    InvalidScore,

    #[error("duplicate resource id {0} in module")]
    DuplicateResource(ResourceId),

    #[error("invalid resource at position {index}: {source}")]
    Resource {
        index: usize,
        #[source]
        source: ResourceError,
    },
}

//
// ─── MODULE ────────────────────────────────────────────────────────────────────
//

/// A top-level course unit with an ordered list of resources.
///
/// `progress` and `score` are supplied by the content fixture and displayed
/// as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    id: ModuleId,
    title: String,
    duration: Option<String>,
    description: Option<String>,
    objectives: Vec<String>,
    resources: Vec<Resource>,
    progress: u8,
    score: f32,
}

impl Module {
    #[must_use]
    pub fn id(&self) -> ModuleId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn objectives(&self) -> &[String] {
        &self.objectives
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Progress percentage in `0..=100`.
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn score(&self) -> f32 {
        self.score
    }

    /// Look up a resource by id within this module.
    #[must_use]
    pub fn find_resource(&self, resource_id: &ResourceId) -> Option<&Resource> {
        self.resources
            .iter()
            .find(|resource| resource.id() == resource_id)
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated module as it appears in a content fixture.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDraft {
    pub id: ModuleId,
    pub title: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub resources: Vec<ResourceDraft>,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub score: f32,
}

impl ModuleDraft {
    #[must_use]
    pub fn new(id: ModuleId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            duration: None,
            description: None,
            objectives: Vec::new(),
            resources: Vec::new(),
            progress: 0,
            score: 0.0,
        }
    }

    /// Validate the module and every resource it owns.
    ///
    /// # Errors
    ///
    /// Returns `ModuleError` for a blank title, out-of-range progress, an
    /// invalid score, an invalid resource, or a resource id used twice.
    pub fn validate(self) -> Result<Module, ModuleError> {
        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return Err(ModuleError::EmptyTitle);
        }
        if self.progress > 100 {
            return Err(ModuleError::ProgressOutOfRange(self.progress));
        }
        if !self.score.is_finite() || self.score < 0.0 {
            return Err(ModuleError::InvalidScore);
        }

        let mut seen = HashSet::with_capacity(self.resources.len());
        let mut resources = Vec::with_capacity(self.resources.len());
        for (index, draft) in self.resources.into_iter().enumerate() {
            let resource = draft
                .validate()
                .map_err(|source| ModuleError::Resource { index, source })?;
            if !seen.insert(resource.id().clone()) {
                return Err(ModuleError::DuplicateResource(resource.id().clone()));
            }
            resources.push(resource);
        }

        let objectives = self
            .objectives
            .into_iter()
            .map(|objective| objective.trim().to_owned())
            .filter(|objective| !objective.is_empty())
            .collect();

        Ok(Module {
            id: self.id,
            title,
            duration: normalize_optional(self.duration),
            description: normalize_optional(self.description),
            objectives,
            resources,
            progress: self.progress,
            score: self.score,
        })
    }
}
