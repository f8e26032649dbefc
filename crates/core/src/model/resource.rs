use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::ResourceId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResourceError {
    #[error("resource id cannot be empty")]
    EmptyId,

    #[error("resource title cannot be empty")]
    EmptyTitle,
}

//
// ─── KIND ──────────────────────────────────────────────────────────────────────
//

/// What sort of learning item a resource is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Reading,
    Task,
    Application,
    Discussion,
}

impl ResourceKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Reading => "reading",
            Self::Task => "task",
            Self::Application => "application",
            Self::Discussion => "discussion",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── RESOURCE ──────────────────────────────────────────────────────────────────
//

/// An individual learning item inside a module.
///
/// `completed`, `deadline` and `timer_active` come from the content fixture and
/// are never changed by the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    id: ResourceId,
    kind: ResourceKind,
    title: String,
    duration: Option<String>,
    bloom: Option<String>,
    completed: bool,
    deadline: Option<String>,
    timer_active: bool,
}

impl Resource {
    #[must_use]
    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    /// Cognitive level tag (Bloom's taxonomy), free text.
    #[must_use]
    pub fn bloom(&self) -> Option<&str> {
        self.bloom.as_deref()
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn deadline(&self) -> Option<&str> {
        self.deadline.as_deref()
    }

    #[must_use]
    pub fn timer_active(&self) -> bool {
        self.timer_active
    }

    /// The raw deadline, only when it should be shown to the learner.
    ///
    /// A deadline is displayed iff it is non-empty and the timer is active.
    #[must_use]
    pub fn visible_deadline(&self) -> Option<&str> {
        if self.timer_active {
            self.deadline()
        } else {
            None
        }
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated resource as it appears in a content fixture.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDraft {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub title: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub bloom: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub timer_active: bool,
}

impl ResourceDraft {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: ResourceKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            duration: None,
            bloom: None,
            completed: false,
            deadline: None,
            timer_active: false,
        }
    }

    /// Validate and normalize the draft.
    ///
    /// Blank optional strings collapse to `None`, so an empty deadline is the
    /// same as no deadline.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError` if the id or title is blank.
    pub fn validate(self) -> Result<Resource, ResourceError> {
        let id = ResourceId::new(self.id.trim());
        if id.is_blank() {
            return Err(ResourceError::EmptyId);
        }
        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return Err(ResourceError::EmptyTitle);
        }

        Ok(Resource {
            id,
            kind: self.kind,
            title,
            duration: normalize_optional(self.duration),
            bloom: normalize_optional(self.bloom),
            completed: self.completed,
            deadline: normalize_optional(self.deadline),
            timer_active: self.timer_active,
        })
    }
}

pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
