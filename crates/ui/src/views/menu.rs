use dioxus::prelude::*;
use dioxus_router::Link;

use crate::vm::MenuVm;

/// Left-hand course navigation with the view/edit toggle.
#[component]
pub fn CourseMenu(menu: MenuVm, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        nav { class: "course-menu",
            h2 { "📚 Curso" }
            label { class: "mode-toggle",
                input {
                    r#type: "checkbox",
                    checked: menu.is_view,
                    onchange: move |_| on_toggle.call(()),
                }
                span { "{menu.mode_label}" }
            }
            for module in menu.modules {
                div { key: "{module.id}", class: "menu-module",
                    h3 { "{module.title}" }
                    ul {
                        for link in module.links {
                            li { key: "{link.href}",
                                Link {
                                    class: link.class_name(),
                                    to: link.target.clone(),
                                    "{link.title}"
                                }
                                if link.completed {
                                    span { class: "menu-completed", " ✓" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
