use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::HomeView {
            on_open_post: move |post_id| {
                nav.push(Route::PostDetail { post_id });
            },
        }
    }
}

#[component]
pub fn PostDetail(post_id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::PostDetailView {
            post_id,
            on_deleted: move |_| {
                nav.replace(Route::Home {});
            },
            on_require_sign_in: move |_| {
                nav.push(Route::SignIn {});
            },
        }
    }
}

#[component]
pub fn Create() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::CreatePostView {
            on_created: move |_| {
                nav.replace(Route::Home {});
            },
            on_require_sign_in: move |_| {
                nav.push(Route::SignIn {});
            },
        }
    }
}
