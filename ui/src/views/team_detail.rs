use dioxus::prelude::*;

use crate::components::{EmptyState, Loading, Picker, TabBar};
use crate::{format, use_endpoint, use_membership, use_session};

/// Team page: follow toggle, squad, fixtures and results by season, and a
/// profile tab. Fixtures and results reload when the season changes.
#[component]
pub fn TeamDetailView(
    team_id: String,
    on_open_player: EventHandler<String>,
    on_require_sign_in: EventHandler<()>,
) -> Element {
    let session = use_session();
    let mut tab = use_signal(|| 0usize);

    let id = team_id.clone();
    let team = use_endpoint(move || {
        let id = id.clone();
        Some(async move { api::clubs::team(&id).await })
    });

    let mut fans = use_membership();
    use_effect(move || {
        if let Some(loaded) = team.data.read().as_ref() {
            fans.sync(loaded.fans.clone());
        }
    });

    let seasons = use_endpoint(|| Some(api::clubs::seasons()));
    let mut season = use_signal(String::new);
    use_effect(move || {
        if season.read().is_empty() {
            if let Some(list) = seasons.data.read().as_ref() {
                if let Some(latest) = list.last() {
                    season.set(latest.id.clone());
                }
            }
        }
    });

    let id = team_id.clone();
    let squad = use_endpoint(move || {
        let id = id.clone();
        Some(async move { api::clubs::team_players(&id).await })
    });
    let id = team_id.clone();
    let fixtures = use_endpoint(move || {
        let season = season();
        if season.is_empty() {
            return None;
        }
        let id = id.clone();
        Some(async move { api::clubs::team_matches(&id, &season).await })
    });
    let id = team_id.clone();
    let results = use_endpoint(move || {
        let season = season();
        if season.is_empty() {
            return None;
        }
        let id = id.clone();
        Some(async move { api::clubs::team_results(&id, &season).await })
    });

    let follow_id = team_id;
    let mut fans_for_toggle = fans;
    let on_follow = move |_| {
        let Some(user_id) = session.read().user_id() else {
            on_require_sign_in.call(());
            return;
        };
        let team_id = follow_id.clone();
        let join = {
            let team_id = team_id.clone();
            let user_id = user_id.clone();
            async move { api::clubs::follow_team(&team_id, &user_id).await }
        };
        let leave = {
            let user_id = user_id.clone();
            async move { api::clubs::unfollow_team(&team_id, &user_id).await }
        };
        fans_for_toggle.toggle(user_id, join, leave);
    };

    let following = session
        .read()
        .user_id()
        .map(|uid| fans.contains(&uid))
        .unwrap_or(false);

    let season_options: Vec<(String, String)> = seasons
        .data
        .read()
        .as_ref()
        .map(|list| list.iter().map(|s| (s.id.clone(), s.name.clone())).collect())
        .unwrap_or_default();

    rsx! {
        div { class: "screen",
            if let Some(loaded) = team.data.read().as_ref() {
                header { class: "entity-header",
                    if let Some(url) = loaded.logo_url.as_ref() {
                        img { class: "team-logo", src: "{url}" }
                    }
                    h1 { "{loaded.name}" }
                    button {
                        class: if following { "follow-button following" } else { "follow-button" },
                        disabled: fans.is_pending(),
                        onclick: on_follow,
                        if following { "Following" } else { "Follow" }
                        " ({fans.count()})"
                    }
                }

                TabBar {
                    labels: vec![
                        "Squad".to_string(),
                        "Fixtures".to_string(),
                        "Results".to_string(),
                        "About".to_string(),
                    ],
                    selected: tab(),
                    onselect: move |index| tab.set(index),
                }

                if tab() == 1 || tab() == 2 {
                    if !season_options.is_empty() {
                        Picker {
                            options: season_options.clone(),
                            selected: season(),
                            onselect: move |value| season.set(value),
                        }
                    }
                }

                match tab() {
                    0 => rsx! {
                        if let Some(players) = squad.data.read().as_ref() {
                            if players.is_empty() {
                                EmptyState { message: "No registered players" }
                            }
                            for player in players.iter() {
                                {
                                    let id = player.id.clone();
                                    rsx! {
                                        button {
                                            class: "player-row",
                                            key: "{player.id}",
                                            onclick: move |_| on_open_player.call(id.clone()),
                                            span { "{player.name} {player.surname}" }
                                            if let Some(position) = player.position.as_ref() {
                                                span { class: "player-position", "{position}" }
                                            }
                                        }
                                    }
                                }
                            }
                        } else {
                            Loading {}
                        }
                    },
                    1 => rsx! {
                        if let Some(list) = fixtures.data.read().as_ref() {
                            if list.is_empty() {
                                EmptyState { message: "No upcoming matches" }
                            }
                            for fixture in list.iter() {
                                div { class: "fixture-row", key: "{fixture.match_id}",
                                    span { "{fixture.home_team} vs {fixture.away_team}" }
                                    if let Some(at) = fixture.match_date {
                                        span { "{format::short_date(at)} {format::short_time(at)}" }
                                    }
                                }
                            }
                        } else {
                            Loading {}
                        }
                    },
                    2 => rsx! {
                        if let Some(list) = results.data.read().as_ref() {
                            if list.is_empty() {
                                EmptyState { message: "No results this season" }
                            }
                            for result in list.iter() {
                                div { class: "result-row", key: "{result.result_id}",
                                    span { "{result.home_team} {result.home_score} - {result.away_score} {result.away_team}" }
                                    if let Some(at) = result.match_date {
                                        span { "{format::short_date(at)}" }
                                    }
                                }
                            }
                        } else {
                            Loading {}
                        }
                    },
                    _ => rsx! {
                        section { class: "entity-about",
                            if !loaded.bio.is_empty() {
                                p { "{loaded.bio}" }
                            }
                            if let Some(year) = loaded.year_founded {
                                p { "Founded {year}" }
                            }
                            if let Some(stadium) = loaded.stadium.as_ref() {
                                p { "Stadium: {stadium.name}" }
                            }
                            if let Some(coach) = loaded.coach.as_ref() {
                                p { "Coach: {coach.name} {coach.surname}" }
                            }
                            if let Some(league) = loaded.league.as_ref() {
                                p { "League: {league.name}" }
                            }
                            if let Some(country) = loaded.country.as_ref() {
                                p { "Country: {country.name}" }
                            }
                        }
                    },
                }
            } else if let Some(message) = team.error.read().as_ref() {
                EmptyState { message: "{message}" }
            } else {
                Loading {}
            }
        }
    }
}
