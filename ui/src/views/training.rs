use dioxus::prelude::*;

use chrono::Utc;

use crate::components::{EmptyState, Loading};
use crate::{format, use_endpoint, use_session};

/// Training sessions for the user's club. The lookup chain mirrors how the
/// backend links things: user -> player/coach record -> team -> the coach
/// whose sessions these are.
#[component]
pub fn TrainingView(on_open_training: EventHandler<String>) -> Element {
    let session = use_session();
    let user_id = session.read().user_id();

    let uid = user_id.clone();
    let player = use_endpoint(move || {
        let uid = uid.clone()?;
        Some(async move { api::trainings::player_for_user(&uid).await })
    });
    let uid = user_id.clone();
    let coach = use_endpoint(move || {
        let uid = uid.clone()?;
        Some(async move { api::trainings::coach_for_user(&uid).await })
    });

    let team = use_endpoint(move || {
        let team_id = player
            .data
            .read()
            .as_ref()
            .and_then(|p| p.as_ref())
            .and_then(|p| p.current_team.as_ref())
            .map(|t| t.id.clone())
            .or_else(|| {
                coach
                    .data
                    .read()
                    .as_ref()
                    .and_then(|c| c.as_ref())
                    .and_then(|c| c.current_team.as_ref())
                    .map(|t| t.id.clone())
            })?;
        Some(async move { api::clubs::team(&team_id).await })
    });

    let trainings = use_endpoint(move || {
        let coach_id = coach
            .data
            .read()
            .as_ref()
            .and_then(|c| c.as_ref())
            .map(|c| c.id.clone())
            .or_else(|| {
                team.data
                    .read()
                    .as_ref()
                    .and_then(|t| t.coach.as_ref())
                    .map(|c| c.id.clone())
            })?;
        Some(async move { api::trainings::trainings_for_coach(&coach_id).await })
    });

    if user_id.is_none() {
        return rsx! {
            div { class: "screen",
                h1 { "Training" }
                EmptyState { message: "Sign in to see your club's sessions" }
            }
        };
    }

    let no_club = matches!(player.data.read().as_ref(), Some(None))
        && matches!(coach.data.read().as_ref(), Some(None));

    rsx! {
        div { class: "screen",
            header { class: "screen-header",
                h1 { "Training" }
                button { class: "link", onclick: move |_| trainings.refetch(), "Refresh" }
            }

            if let Some(club) = team.data.read().as_ref() {
                div { class: "club-card",
                    if let Some(url) = club.logo_url.as_ref() {
                        img { class: "team-logo", src: "{url}" }
                    }
                    span { "{club.name}" }
                    if let Some(coach) = club.coach.as_ref() {
                        span { class: "club-coach", "Coach: {coach.name} {coach.surname}" }
                    }
                }
            }

            if no_club {
                EmptyState { message: "You are not part of a club yet" }
            } else if let Some(list) = trainings.data.read().as_ref() {
                {
                    let now = Utc::now();
                    let active: Vec<_> = list.iter().filter(|t| t.is_active && !t.is_completed).cloned().collect();
                    let completed: Vec<_> = list.iter().filter(|t| t.is_completed).cloned().collect();
                    rsx! {
                        section {
                            h2 { "Active" }
                            if active.is_empty() {
                                EmptyState { message: "No active sessions" }
                            }
                            for training in active.iter() {
                                {
                                    let id = training.id.clone();
                                    rsx! {
                                        button {
                                            class: "training-row",
                                            key: "{training.id}",
                                            onclick: move |_| on_open_training.call(id.clone()),
                                            span { "{training.name}" }
                                            if let Some(at) = training.training_date {
                                                span { class: "training-countdown", "{format::remaining_time(at, now)}" }
                                            }
                                            span { class: "training-count", "{training.participants.len()} attending" }
                                        }
                                    }
                                }
                            }
                        }
                        section {
                            h2 { "Completed" }
                            if completed.is_empty() {
                                EmptyState { message: "No completed sessions" }
                            }
                            for training in completed.iter() {
                                {
                                    let id = training.id.clone();
                                    rsx! {
                                        button {
                                            class: "training-row completed",
                                            key: "{training.id}",
                                            onclick: move |_| on_open_training.call(id.clone()),
                                            span { "{training.name}" }
                                            if let Some(at) = training.training_date {
                                                span { "{format::short_date(at)}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            } else if let Some(message) = trainings.error.read().as_ref() {
                EmptyState { message: "{message}" }
            } else {
                Loading {}
            }
        }
    }
}
