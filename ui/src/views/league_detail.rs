use dioxus::prelude::*;

use crate::components::{EmptyState, Loading, TabBar};
use crate::use_endpoint;

/// One league in three tabs: registered teams, the standings table, and the
/// per-metric player leaderboards.
#[component]
pub fn LeagueDetailView(league_id: String, on_open_team: EventHandler<String>) -> Element {
    let mut tab = use_signal(|| 0usize);

    let id = league_id.clone();
    let teams = use_endpoint(move || {
        let id = id.clone();
        Some(async move { api::clubs::league_teams(&id).await })
    });
    let id = league_id.clone();
    let standings = use_endpoint(move || {
        let id = id.clone();
        Some(async move { api::clubs::league_standings(&id).await })
    });
    let id = league_id;
    let top_stats = use_endpoint(move || {
        let id = id.clone();
        Some(async move { api::clubs::league_top_stats(&id).await })
    });

    rsx! {
        div { class: "screen",
            TabBar {
                labels: vec!["Teams".to_string(), "Standings".to_string(), "Top stats".to_string()],
                selected: tab(),
                onselect: move |index| tab.set(index),
            }

            match tab() {
                0 => rsx! {
                    if let Some(list) = teams.data.read().as_ref() {
                        if list.is_empty() {
                            EmptyState { message: "No teams registered" }
                        }
                        for team in list.iter() {
                            {
                                let id = team.id.clone();
                                rsx! {
                                    button {
                                        class: "team-row",
                                        key: "{team.id}",
                                        onclick: move |_| on_open_team.call(id.clone()),
                                        if let Some(url) = team.logo_url.as_ref() {
                                            img { class: "team-logo", src: "{url}" }
                                        }
                                        span { "{team.name}" }
                                    }
                                }
                            }
                        }
                    } else if let Some(message) = teams.error.read().as_ref() {
                        EmptyState { message: "{message}" }
                    } else {
                        Loading {}
                    }
                },
                1 => rsx! {
                    if let Some(rows) = standings.data.read().as_ref() {
                        table { class: "standings",
                            thead {
                                tr {
                                    th { "Team" }
                                    th { "P" }
                                    th { "W" }
                                    th { "D" }
                                    th { "L" }
                                    th { "GF" }
                                    th { "GA" }
                                    th { "Pts" }
                                }
                            }
                            tbody {
                                for row in rows.iter() {
                                    tr { key: "{row.team}",
                                        td { "{row.team}" }
                                        td { "{row.played}" }
                                        td { "{row.wins}" }
                                        td { "{row.draws}" }
                                        td { "{row.losses}" }
                                        td { "{row.goals_for}" }
                                        td { "{row.goals_against}" }
                                        td { "{row.points}" }
                                    }
                                }
                            }
                        }
                    } else if let Some(message) = standings.error.read().as_ref() {
                        EmptyState { message: "{message}" }
                    } else {
                        Loading {}
                    }
                },
                _ => rsx! {
                    if let Some(stats) = top_stats.data.read().as_ref() {
                        Leaderboard { title: "Goals", entries: stats.goals.clone() }
                        Leaderboard { title: "Assists", entries: stats.assists.clone() }
                        Leaderboard { title: "Yellow cards", entries: stats.yellow_cards.clone() }
                        Leaderboard { title: "Red cards", entries: stats.red_cards.clone() }
                        Leaderboard { title: "Clean sheets", entries: stats.clean_sheets.clone() }
                    } else if let Some(message) = top_stats.error.read().as_ref() {
                        EmptyState { message: "{message}" }
                    } else {
                        Loading {}
                    }
                },
            }
        }
    }
}

#[component]
fn Leaderboard(title: String, entries: Vec<api::TopStatEntry>) -> Element {
    if entries.is_empty() {
        return rsx! {};
    }
    rsx! {
        section { class: "leaderboard",
            h2 { "{title}" }
            for (place, entry) in (1..).zip(entries.iter()) {
                div { class: "leaderboard-row", key: "{title}-{place}",
                    span { class: "rank", "{place}." }
                    span { "{entry.player}" }
                    if let Some(team) = entry.team.as_ref() {
                        span { class: "leaderboard-team", "{team}" }
                    }
                    span { class: "value", "{entry.value}" }
                }
            }
        }
    }
}
