use dioxus::prelude::*;

use crate::components::{EmptyState, Loading, Picker};
use crate::use_endpoint;

/// Leagues for a chosen season, defaulting to the most recent season.
#[component]
pub fn LeaguesView(on_open_league: EventHandler<String>) -> Element {
    let seasons = use_endpoint(|| Some(api::clubs::seasons()));
    let mut selected = use_signal(String::new);

    use_effect(move || {
        if selected.read().is_empty() {
            if let Some(list) = seasons.data.read().as_ref() {
                if let Some(latest) = list.last() {
                    selected.set(latest.id.clone());
                }
            }
        }
    });

    let leagues = use_endpoint(move || {
        let season = selected();
        (!season.is_empty()).then(|| async move { api::clubs::leagues(&season).await })
    });

    let season_options: Vec<(String, String)> = seasons
        .data
        .read()
        .as_ref()
        .map(|list| list.iter().map(|s| (s.id.clone(), s.name.clone())).collect())
        .unwrap_or_default();

    rsx! {
        div { class: "screen",
            header { class: "screen-header",
                h1 { "Leagues" }
                if !season_options.is_empty() {
                    Picker {
                        options: season_options,
                        selected: selected(),
                        onselect: move |value| selected.set(value),
                    }
                }
            }

            if let Some(list) = leagues.data.read().as_ref() {
                if list.is_empty() {
                    EmptyState { message: "No leagues this season" }
                }
                for league in list.iter() {
                    {
                        let id = league.id.clone();
                        rsx! {
                            button {
                                class: "league-row",
                                key: "{league.id}",
                                onclick: move |_| on_open_league.call(id.clone()),
                                if let Some(url) = league.logo_url.as_ref() {
                                    img { class: "league-logo", src: "{url}" }
                                }
                                span { "{league.name}" }
                                if let Some(country) = league.country.as_ref() {
                                    span { class: "league-country", "{country.name}" }
                                }
                            }
                        }
                    }
                }
            } else if let Some(message) = leagues.error.read().as_ref() {
                EmptyState { message: "{message}" }
            } else {
                Loading {}
            }
        }
    }
}
