//! Small building blocks shared across screens.

mod button;
pub use button::{Button, ButtonVariant};

mod form_field;
pub use form_field::FormField;

mod tabs;
pub use tabs::TabBar;

mod picker;
pub use picker::Picker;

use dioxus::prelude::*;

/// Centered spinner shown while an [`crate::Endpoint`] has no data yet.
#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading",
            div { class: "spinner" }
        }
    }
}

/// Placeholder for an empty list or a failed fetch.
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "empty-state",
            p { "{message}" }
        }
    }
}
