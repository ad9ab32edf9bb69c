use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Settings() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::SettingsView {
            on_signed_out: move |_| {
                nav.replace(Route::SignIn {});
            },
            on_edit_profile: move |_| {
                nav.push(Route::Profile {});
            },
            on_edit_role_profile: move |_| {
                nav.push(Route::RoleProfile {});
            },
        }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        ui::views::ProfileView {}
    }
}

#[component]
pub fn RoleProfile() -> Element {
    rsx! {
        ui::views::RoleProfileView {}
    }
}
