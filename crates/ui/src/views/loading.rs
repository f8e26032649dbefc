use dioxus::prelude::*;

#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div { class: "loading-screen",
            div { class: "loading-card",
                div { class: "spinner" }
                h2 { "Cargando tu última sesión" }
                p { "Por favor, espera un momento..." }
            }
        }
    }
}
