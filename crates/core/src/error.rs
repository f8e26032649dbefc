use thiserror::Error;

use crate::model::{CourseError, ModuleError, ParseIdError, ResourceError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Module(#[from] ModuleError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}
