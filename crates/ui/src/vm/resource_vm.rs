use course_core::model::{ModuleId, ResourceId};
use services::CourseCatalog;

use super::time_fmt::format_deadline;

/// UI-ready representation of a resource for the detail pane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceDetailVm {
    pub title: String,
    pub kind: String,
    pub duration: String,
    pub bloom: Option<String>,
    pub deadline: Option<String>,
}

impl ResourceDetailVm {
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!("Tipo: {} | Duración: {}", self.kind, self.duration)
    }
}

/// Look up a resource and shape it for display; `None` when it does not exist.
#[must_use]
pub fn map_resource_detail(
    catalog: &CourseCatalog,
    module_id: ModuleId,
    resource_id: &ResourceId,
) -> Option<ResourceDetailVm> {
    let resource = catalog.find_resource(module_id, resource_id)?;
    Some(ResourceDetailVm {
        title: resource.title().to_owned(),
        kind: resource.kind().to_string(),
        duration: resource.duration().unwrap_or("N/A").to_owned(),
        bloom: resource.bloom().map(str::to_owned),
        deadline: resource.visible_deadline().map(format_deadline),
    })
}
