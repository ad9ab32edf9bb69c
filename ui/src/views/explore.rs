use dioxus::prelude::*;

use crate::components::{EmptyState, Loading};
use crate::{format, use_endpoint};

/// Today's fixtures and the latest final scores across all leagues.
#[component]
pub fn ExploreView(on_open_search: EventHandler<()>) -> Element {
    let today = use_endpoint(|| Some(api::clubs::today_matches()));
    let recent = use_endpoint(|| Some(api::clubs::recent_results()));

    rsx! {
        div { class: "screen",
            header { class: "screen-header",
                h1 { "Explore" }
                button { class: "link", onclick: move |_| on_open_search.call(()), "Search" }
            }

            section {
                h2 { "Today's matches" }
                if let Some(fixtures) = today.data.read().as_ref() {
                    if fixtures.is_empty() {
                        EmptyState { message: "No matches today" }
                    }
                    for fixture in fixtures.iter() {
                        div { class: "fixture-row", key: "{fixture.match_id}",
                            span { "{fixture.home_team} vs {fixture.away_team}" }
                            if let Some(at) = fixture.match_date {
                                span { class: "fixture-time", "{format::short_time(at)}" }
                            }
                            if let Some(league) = fixture.league.as_ref() {
                                span { class: "fixture-league", "{league}" }
                            }
                        }
                    }
                } else if let Some(message) = today.error.read().as_ref() {
                    EmptyState { message: "{message}" }
                } else {
                    Loading {}
                }
            }

            section {
                h2 { "Recent results" }
                if let Some(results) = recent.data.read().as_ref() {
                    if results.is_empty() {
                        EmptyState { message: "No results yet" }
                    }
                    for result in results.iter() {
                        div { class: "result-row", key: "{result.result_id}",
                            span { "{result.home_team} {result.home_score} - {result.away_score} {result.away_team}" }
                            if let Some(at) = result.match_date {
                                span { class: "result-date", "{format::short_date(at)}" }
                            }
                        }
                    }
                } else if let Some(message) = recent.error.read().as_ref() {
                    EmptyState { message: "{message}" }
                } else {
                    Loading {}
                }
            }
        }
    }
}
