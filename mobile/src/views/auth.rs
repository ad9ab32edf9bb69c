use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn SignIn() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::SignInView {
            on_signed_in: move |user: api::User| {
                if user.is_onboarding_completed {
                    nav.replace(Route::Home {});
                } else {
                    nav.replace(Route::Onboarding {});
                }
            },
            on_navigate_sign_up: move |_| {
                nav.push(Route::SignUp {});
            },
        }
    }
}

#[component]
pub fn SignUp() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::SignUpView {
            on_signed_up: move |_| {
                nav.replace(Route::SignIn {});
            },
            on_navigate_sign_in: move |_| {
                nav.replace(Route::SignIn {});
            },
        }
    }
}

#[component]
pub fn Onboarding() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::OnboardingView {
            on_completed: move |_| {
                nav.replace(Route::Home {});
            },
        }
    }
}
