use dioxus::prelude::*;

/// Static assistant panel. Nothing is wired to the input or the button.
#[component]
pub fn AssistantPanel() -> Element {
    rsx! {
        aside { class: "assistant",
            h2 { "🤖 Asistente Virtual" }
            div { class: "assistant-body",
                p { "¿Tienes dudas? Escribe tu pregunta aquí." }
                textarea {
                    class: "assistant-input",
                    rows: "4",
                    placeholder: "Ej: ¿Qué es ventaja competitiva?",
                }
                button { class: "assistant-send", r#type: "button", "Enviar" }
            }
        }
    }
}
