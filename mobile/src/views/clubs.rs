use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Leagues() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::LeaguesView {
            on_open_league: move |league_id| {
                nav.push(Route::LeagueDetail { league_id });
            },
        }
    }
}

#[component]
pub fn LeagueDetail(league_id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::LeagueDetailView {
            league_id,
            on_open_team: move |team_id| {
                nav.push(Route::TeamDetail { team_id });
            },
        }
    }
}

#[component]
pub fn TeamDetail(team_id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::TeamDetailView {
            team_id,
            on_open_player: move |player_id| {
                nav.push(Route::PlayerDetail { player_id });
            },
            on_require_sign_in: move |_| {
                nav.push(Route::SignIn {});
            },
        }
    }
}

#[component]
pub fn PlayerDetail(player_id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::PlayerDetailView {
            player_id,
            on_require_sign_in: move |_| {
                nav.push(Route::SignIn {});
            },
        }
    }
}
