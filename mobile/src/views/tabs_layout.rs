use dioxus::prelude::*;

use ui::{icons, Icon};

use crate::Route;

/// Bottom tab bar wrapped around the five main screens.
#[component]
pub fn TabsLayout() -> Element {
    let route: Route = use_route();
    let nav = use_navigator();

    let tab = |target: Route, label: &'static str, icon: Element, active: bool| {
        rsx! {
            button {
                class: if active { "tab-item active" } else { "tab-item" },
                onclick: move |_| {
                    nav.replace(target.clone());
                },
                {icon}
                span { "{label}" }
            }
        }
    };

    rsx! {
        div { class: "tabs-layout",
            main { class: "tab-content", Outlet::<Route> {} }
            nav { class: "tab-bar-bottom",
                {tab(
                    Route::Home {},
                    "Home",
                    rsx! { Icon { icon: icons::FaHouse, width: 20, height: 20 } },
                    matches!(route, Route::Home {}),
                )}
                {tab(
                    Route::Explore {},
                    "Explore",
                    rsx! { Icon { icon: icons::FaCompass, width: 20, height: 20 } },
                    matches!(route, Route::Explore {}),
                )}
                {tab(
                    Route::Create {},
                    "Post",
                    rsx! { Icon { icon: icons::FaPlus, width: 20, height: 20 } },
                    matches!(route, Route::Create {}),
                )}
                {tab(
                    Route::Leagues {},
                    "Leagues",
                    rsx! { Icon { icon: icons::FaTrophy, width: 20, height: 20 } },
                    matches!(route, Route::Leagues {}),
                )}
                {tab(
                    Route::Training {},
                    "Training",
                    rsx! { Icon { icon: icons::FaPersonRunning, width: 20, height: 20 } },
                    matches!(route, Route::Training {}),
                )}
                button {
                    class: "tab-item",
                    onclick: move |_| {
                        nav.push(Route::Settings {});
                    },
                    Icon { icon: icons::FaGear, width: 20, height: 20 }
                    span { "Account" }
                }
            }
        }
    }
}
