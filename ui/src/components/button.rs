use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

/// Action button. While `loading` it is disabled and shows a busy label so a
/// submit cannot be fired twice.
#[component]
pub fn Button(
    label: String,
    onclick: EventHandler<MouseEvent>,
    #[props(default)] variant: ButtonVariant,
    #[props(default = false)] loading: bool,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        button {
            class: variant.class(),
            disabled: disabled || loading,
            onclick: move |evt| onclick.call(evt),
            if loading {
                "Please wait..."
            } else {
                "{label}"
            }
        }
    }
}
