use dioxus::prelude::*;

/// Labelled text input with an inline validation message.
#[component]
pub fn FormField(
    label: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] multiline: bool,
    #[props(default)] error: Option<String>,
    #[props(default)] hint: Option<String>,
) -> Element {
    rsx! {
        div { class: "form-field",
            label { "{label}" }
            if multiline {
                textarea {
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
            } else {
                input {
                    r#type: "{input_type}",
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
            }
            if let Some(error) = error {
                span { class: "field-error", "{error}" }
            } else if let Some(hint) = hint {
                span { class: "field-hint", "{hint}" }
            }
        }
    }
}
