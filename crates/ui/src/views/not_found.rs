use dioxus::prelude::*;

#[component]
pub fn NotFoundNotice() -> Element {
    rsx! {
        div { class: "page not-found", "Recurso no encontrado" }
    }
}

/// Any path outside the course routes.
#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "no route matched");
    rsx! { NotFoundNotice {} }
}
