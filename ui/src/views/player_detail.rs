use dioxus::prelude::*;

use crate::components::{EmptyState, Loading};
use crate::{use_endpoint, use_membership, use_session};

/// Player page: profile card, follow toggle and season-by-season numbers.
#[component]
pub fn PlayerDetailView(
    player_id: String,
    on_require_sign_in: EventHandler<()>,
) -> Element {
    let session = use_session();

    let id = player_id.clone();
    let player = use_endpoint(move || {
        let id = id.clone();
        Some(async move { api::clubs::player(&id).await })
    });
    let id = player_id.clone();
    let stats = use_endpoint(move || {
        let id = id.clone();
        Some(async move { api::clubs::player_season_stats(&id).await })
    });

    let mut fans = use_membership();
    use_effect(move || {
        if let Some(loaded) = player.data.read().as_ref() {
            fans.sync(loaded.fans.clone());
        }
    });

    let follow_id = player_id;
    let mut fans_for_toggle = fans;
    let on_follow = move |_| {
        let Some(user_id) = session.read().user_id() else {
            on_require_sign_in.call(());
            return;
        };
        let player_id = follow_id.clone();
        let join = {
            let player_id = player_id.clone();
            let user_id = user_id.clone();
            async move { api::clubs::follow_player(&player_id, &user_id).await }
        };
        let leave = {
            let user_id = user_id.clone();
            async move { api::clubs::unfollow_player(&player_id, &user_id).await }
        };
        fans_for_toggle.toggle(user_id, join, leave);
    };

    let following = session
        .read()
        .user_id()
        .map(|uid| fans.contains(&uid))
        .unwrap_or(false);

    rsx! {
        div { class: "screen",
            if let Some(loaded) = player.data.read().as_ref() {
                header { class: "entity-header",
                    if let Some(url) = loaded.image_url.as_ref() {
                        img { class: "player-photo", src: "{url}" }
                    }
                    h1 { "{loaded.name} {loaded.surname}" }
                    button {
                        class: if following { "follow-button following" } else { "follow-button" },
                        disabled: fans.is_pending(),
                        onclick: on_follow,
                        if following { "Following" } else { "Follow" }
                        " ({fans.count()})"
                    }
                }

                section { class: "entity-about",
                    if let Some(position) = loaded.position.as_ref() {
                        p { "Position: {position}" }
                    }
                    if let Some(team) = loaded.current_team.as_ref() {
                        p { "Team: {team.name}" }
                    }
                    if let Some(nationality) = loaded.nationality.as_ref() {
                        p { "Nationality: {nationality}" }
                    }
                    if let Some(age) = loaded.age {
                        p { "Age: {age}" }
                    }
                    if let Some(height) = loaded.height {
                        p { "Height: {height} cm" }
                    }
                    if let Some(weight) = loaded.weight {
                        p { "Weight: {weight} kg" }
                    }
                }

                section {
                    h2 { "Career" }
                    if let Some(rows) = stats.data.read().as_ref() {
                        if rows.is_empty() {
                            EmptyState { message: "No recorded stats" }
                        } else {
                            table { class: "stats-table",
                                thead {
                                    tr {
                                        th { "Season" }
                                        th { "Team" }
                                        th { "G" }
                                        th { "A" }
                                        th { "YC" }
                                        th { "RC" }
                                        th { "CS" }
                                        th { "Min" }
                                    }
                                }
                                tbody {
                                    for row in rows.iter() {
                                        tr { key: "{row.season}",
                                            td { "{row.season}" }
                                            td { "{row.team}" }
                                            td { "{row.goals}" }
                                            td { "{row.assists}" }
                                            td { "{row.yellow_cards}" }
                                            td { "{row.red_cards}" }
                                            td { "{row.clean_sheets}" }
                                            td { "{row.minutes_played}" }
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        Loading {}
                    }
                }
            } else if let Some(message) = player.error.read().as_ref() {
                EmptyState { message: "{message}" }
            } else {
                Loading {}
            }
        }
    }
}
