use dioxus::prelude::*;

/// Dropdown over `(value, label)` pairs, used for season and role selection.
#[component]
pub fn Picker(
    options: Vec<(String, String)>,
    selected: String,
    onselect: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            class: "picker",
            value: "{selected}",
            onchange: move |evt| onselect.call(evt.value()),
            for (value, label) in options {
                option { value: "{value}", selected: value == selected, "{label}" }
            }
        }
    }
}
