use dioxus::prelude::*;

use crate::components::EmptyState;
use crate::membership::sleep_ms;

/// Typing pause before a query is sent.
const DEBOUNCE_MS: u64 = 300;

/// Free-text search over players, teams, coaches and referees. Requests are
/// debounced; a response for a superseded query is discarded by checking the
/// keystroke serial after the await.
#[component]
pub fn SearchView(
    on_open_player: EventHandler<String>,
    on_open_team: EventHandler<String>,
) -> Element {
    let mut query = use_signal(String::new);
    let mut results = use_signal(api::SearchResults::default);
    let mut searching = use_signal(|| false);
    let mut serial = use_signal(|| 0u64);

    let oninput = move |evt: FormEvent| {
        let text = evt.value();
        query.set(text.clone());
        let mine = *serial.read() + 1;
        serial.set(mine);
        spawn(async move {
            sleep_ms(DEBOUNCE_MS).await;
            if *serial.read() != mine {
                return;
            }
            let text = text.trim().to_string();
            if text.is_empty() {
                results.set(api::SearchResults::default());
                return;
            }
            searching.set(true);
            match api::clubs::search(&text).await {
                Ok(found) => {
                    if *serial.read() == mine {
                        results.set(found);
                    }
                }
                Err(err) => tracing::warn!("search failed: {err}"),
            }
            searching.set(false);
        });
    };

    let found = results.read().clone();
    let idle = query.read().trim().is_empty();

    rsx! {
        div { class: "screen",
            h1 { "Search" }
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Players, teams, coaches...",
                value: "{query}",
                oninput,
            }

            if idle {
                EmptyState { message: "Type to search" }
            } else if found.is_empty() && !searching() {
                EmptyState { message: "No results" }
            } else {
                if !found.players.is_empty() {
                    section {
                        h2 { "Players" }
                        for player in found.players.iter() {
                            {
                                let id = player.id.clone();
                                rsx! {
                                    button {
                                        class: "search-row",
                                        key: "{player.id}",
                                        onclick: move |_| on_open_player.call(id.clone()),
                                        "{player.name} {player.surname}"
                                    }
                                }
                            }
                        }
                    }
                }
                if !found.teams.is_empty() {
                    section {
                        h2 { "Teams" }
                        for team in found.teams.iter() {
                            {
                                let id = team.id.clone();
                                rsx! {
                                    button {
                                        class: "search-row",
                                        key: "{team.id}",
                                        onclick: move |_| on_open_team.call(id.clone()),
                                        "{team.name}"
                                    }
                                }
                            }
                        }
                    }
                }
                if !found.coaches.is_empty() {
                    section {
                        h2 { "Coaches" }
                        for coach in found.coaches.iter() {
                            div { class: "search-row", key: "{coach.id}", "{coach.name} {coach.surname}" }
                        }
                    }
                }
                if !found.referees.is_empty() {
                    section {
                        h2 { "Referees" }
                        for referee in found.referees.iter() {
                            div { class: "search-row", key: "{referee.id}", "{referee.name} {referee.surname}" }
                        }
                    }
                }
            }
        }
    }
}
