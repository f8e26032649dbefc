mod course;
mod fixture;
mod ids;
mod mode;
mod module;
mod resource;
mod resume;

pub use course::{Course, CourseError};
pub use ids::{ModuleId, ParseIdError, ResourceId};
pub use mode::Mode;
pub use module::{Module, ModuleDraft, ModuleError};
pub use resource::{Resource, ResourceDraft, ResourceError, ResourceKind};
pub use resume::ResumeState;
