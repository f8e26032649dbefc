use dioxus::prelude::*;

use course_core::model::{ModuleId, ResourceId};

use crate::context::AppContext;
use crate::views::use_record_last_viewed;

/// Edit-mode placeholder for a resource.
///
/// The placeholder renders for any pair; only resources that exist are
/// recorded as last viewed.
#[component]
pub fn EditorView(module_id: ModuleId, resource_id: ResourceId) -> Element {
    let ctx = use_context::<AppContext>();
    let found = ctx.catalog().find_resource(module_id, &resource_id).is_some();
    use_record_last_viewed(module_id, resource_id, found);

    rsx! {
        div { class: "page editor", "🛠 Editor de recurso en desarrollo" }
    }
}
