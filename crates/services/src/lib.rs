#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog;
pub mod error;
pub mod resume_controller;
pub mod resume_service;

pub use course_core::Clock;

pub use app_services::AppServices;
pub use catalog::CourseCatalog;
pub use error::{AppServicesError, CatalogError, ResumeServiceError};
pub use resume_controller::{DEFAULT_RESUME_DELAY, ResumeController, ResumePhase, ResumePlan};
pub use resume_service::{LAST_VIEWED_KEY, ResumeService};
