use dioxus::prelude::*;

use course_core::model::{ModuleId, ResourceId, ResumeState};

use crate::context::AppContext;
use crate::views::NotFoundNotice;
use crate::vm::map_resource_detail;

const RESOURCE_BODY: &str =
    "🧾 Aquí se presentaría el contenido del recurso o un enlace al material correspondiente.";

#[component]
pub fn ResourceView(module_id: ModuleId, resource_id: ResourceId) -> Element {
    let ctx = use_context::<AppContext>();
    let detail = map_resource_detail(&ctx.catalog(), module_id, &resource_id);
    use_record_last_viewed(module_id, resource_id, detail.is_some());

    let Some(detail) = detail else {
        return rsx! { NotFoundNotice {} };
    };
    let summary = detail.summary_line();

    rsx! {
        article { class: "page resource",
            h2 { "{detail.title}" }
            p { class: "resource-meta", "{summary}" }
            if let Some(bloom) = detail.bloom.as_deref() {
                p { class: "resource-bloom", "Nivel Bloom: {bloom}" }
            }
            if let Some(deadline) = detail.deadline.as_deref() {
                p { class: "resource-deadline", "Fecha límite: {deadline}" }
            }
            div { class: "resource-body",
                "{RESOURCE_BODY}"
            }
        }
    }
}

/// Persist the resource as the last one viewed whenever the routed pair
/// changes and resolves to a real resource.
///
/// Storage failures are logged and never reach the page.
pub fn use_record_last_viewed(module_id: ModuleId, resource_id: ResourceId, found: bool) {
    let ctx = use_context::<AppContext>();
    use_effect(use_reactive(
        (&module_id, &resource_id, &found),
        move |(module_id, resource_id, found)| {
            if !found {
                return;
            }
            let resume = ctx.resume();
            spawn(async move {
                let state = ResumeState::new(module_id, resource_id);
                if let Err(err) = resume.record(&state).await {
                    tracing::warn!(error = %err, "failed to record last-viewed resource");
                }
            });
        },
    ));
}
