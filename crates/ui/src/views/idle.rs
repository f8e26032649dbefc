use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::map_module_overviews;

#[component]
pub fn IdleView() -> Element {
    let ctx = use_context::<AppContext>();
    let overviews = map_module_overviews(ctx.catalog().modules());

    rsx! {
        div { class: "page idle",
            p { class: "idle-hint", "Selecciona un tema del menú izquierdo." }
            for unit in overviews {
                section { key: "{unit.id}", class: "module-overview",
                    h3 { "{unit.title}" }
                    if let Some(duration) = unit.duration.as_deref() {
                        p { class: "module-duration", "Duración: {duration}" }
                    }
                    if let Some(description) = unit.description.as_deref() {
                        p { class: "module-description", "{description}" }
                    }
                    if !unit.objectives.is_empty() {
                        ul { class: "module-objectives",
                            for objective in unit.objectives.iter() {
                                li { "{objective}" }
                            }
                        }
                    }
                    p { class: "module-progress",
                        "Progreso: {unit.progress}% | Puntaje: {unit.score}"
                    }
                }
            }
        }
    }
}
