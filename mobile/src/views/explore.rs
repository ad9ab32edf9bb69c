use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Explore() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::ExploreView {
            on_open_search: move |_| {
                nav.push(Route::Search {});
            },
        }
    }
}

#[component]
pub fn Search() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::SearchView {
            on_open_player: move |player_id| {
                nav.push(Route::PlayerDetail { player_id });
            },
            on_open_team: move |team_id| {
                nav.push(Route::TeamDetail { team_id });
            },
        }
    }
}
