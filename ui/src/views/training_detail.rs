use dioxus::prelude::*;

use chrono::Utc;

use crate::components::{Button, ButtonVariant, EmptyState, Loading};
use crate::{fetch, format, use_endpoint, use_session, use_toast};

/// One training session. A player toggles their own attendance; a coach can
/// drop participants. Attendance is keyed by the player record, not the user
/// account, so the screen resolves the user's player id first.
#[component]
pub fn TrainingDetailView(training_id: String) -> Element {
    let session = use_session();
    let mut toast = use_toast();
    let mut busy = use_signal(|| false);

    let id = training_id.clone();
    let training = use_endpoint(move || {
        let id = id.clone();
        Some(async move { api::trainings::training(&id).await })
    });

    let user_id = session.read().user_id();
    let uid = user_id.clone();
    let player = use_endpoint(move || {
        let uid = uid.clone()?;
        Some(async move { api::trainings::player_for_user(&uid).await })
    });
    let uid = user_id;
    let coach = use_endpoint(move || {
        let uid = uid.clone()?;
        Some(async move { api::trainings::coach_for_user(&uid).await })
    });

    let player_id = player
        .data
        .read()
        .as_ref()
        .and_then(|p| p.as_ref())
        .map(|p| p.id.clone());
    let is_coach = matches!(coach.data.read().as_ref(), Some(Some(_)));

    let attending = match (&player_id, training.data.read().as_ref()) {
        (Some(pid), Some(loaded)) => loaded.participants.iter().any(|p| p == pid),
        _ => false,
    };

    let toggle_id = training_id.clone();
    let toggle_player = player_id.clone();
    let on_attendance = move |_| {
        if *busy.read() {
            return;
        }
        let Some(player_id) = toggle_player.clone() else {
            return;
        };
        let training_id = toggle_id.clone();
        let next = !attending;
        busy.set(true);
        spawn(async move {
            match api::trainings::set_attendance(&training_id, &player_id, next).await {
                Ok(()) => training.refetch(),
                Err(err) => toast.error(fetch::describe(&err)),
            }
            busy.set(false);
        });
    };

    let remove_training = training_id;

    rsx! {
        div { class: "screen",
            if let Some(loaded) = training.data.read().as_ref() {
                h1 { "{loaded.name}" }
                if let Some(description) = loaded.description.as_ref() {
                    p { "{description}" }
                }
                if let Some(at) = loaded.training_date {
                    p { class: "training-when",
                        "{format::short_date(at)} at {format::short_time(at)}"
                    }
                    if loaded.is_active && !loaded.is_completed {
                        p { class: "training-countdown", "Starts in {format::remaining_time(at, Utc::now())}" }
                    }
                }
                if loaded.is_completed {
                    p { class: "training-state", "Completed" }
                }

                if player_id.is_some() && loaded.is_active && !loaded.is_completed {
                    Button {
                        label: if attending { "Withdraw".to_string() } else { "Attend".to_string() },
                        variant: if attending { ButtonVariant::Secondary } else { ButtonVariant::Primary },
                        loading: busy(),
                        onclick: on_attendance,
                    }
                }

                section { class: "participants",
                    h2 { "Participants ({loaded.participants.len()})" }
                    if loaded.participants.is_empty() {
                        EmptyState { message: "Nobody has signed up yet" }
                    }
                    for participant in loaded.participants.iter().cloned() {
                        div { class: "participant-row", key: "{participant}",
                            ParticipantName { player_id: participant.clone() }
                            if is_coach {
                                {
                                    let training_id = remove_training.clone();
                                    let participant = participant.clone();
                                    rsx! {
                                        button {
                                            class: "link link-danger",
                                            onclick: move |_| {
                                                let training_id = training_id.clone();
                                                let participant = participant.clone();
                                                spawn(async move {
                                                    match api::trainings::remove_participant(&training_id, &participant).await {
                                                        Ok(()) => training.refetch(),
                                                        Err(err) => tracing::warn!("remove failed: {err}"),
                                                    }
                                                });
                                            },
                                            "Remove"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            } else if let Some(message) = training.error.read().as_ref() {
                EmptyState { message: "{message}" }
            } else {
                Loading {}
            }
        }
    }
}

/// Resolves a participant's player record for display.
#[component]
fn ParticipantName(player_id: String) -> Element {
    let id = player_id.clone();
    let player = use_endpoint(move || {
        let id = id.clone();
        Some(async move { api::clubs::player(&id).await })
    });

    rsx! {
        if let Some(loaded) = player.data.read().as_ref() {
            span { "{loaded.name} {loaded.surname}" }
        } else {
            span { class: "participant-id", "{player_id}" }
        }
    }
}
