use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Training() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::TrainingView {
            on_open_training: move |training_id| {
                nav.push(Route::TrainingDetail { training_id });
            },
        }
    }
}

#[component]
pub fn TrainingDetail(training_id: String) -> Element {
    rsx! {
        ui::views::TrainingDetailView { training_id }
    }
}
