use serde::{Deserialize, Serialize};

use crate::model::ids::{ModuleId, ResourceId};

/// The last resource the learner navigated to.
///
/// The mode is not stored; it comes from the toggle at the moment the resume
/// redirect fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeState {
    pub module_id: ModuleId,
    pub resource_id: ResourceId,
}

impl ResumeState {
    #[must_use]
    pub fn new(module_id: ModuleId, resource_id: impl Into<ResourceId>) -> Self {
        Self {
            module_id,
            resource_id: resource_id.into(),
        }
    }
}
