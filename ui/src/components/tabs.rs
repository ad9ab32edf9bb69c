use dioxus::prelude::*;

/// Horizontal tab strip. `selected` is the index into `labels`.
#[component]
pub fn TabBar(labels: Vec<String>, selected: usize, onselect: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "tab-bar",
            for (index, label) in labels.into_iter().enumerate() {
                button {
                    class: if index == selected { "tab tab-active" } else { "tab" },
                    onclick: move |_| onselect.call(index),
                    "{label}"
                }
            }
        }
    }
}
