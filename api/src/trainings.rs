//! Training-session endpoints.
//!
//! Sessions belong to a coach; attendance is a membership edit on the
//! session's `participants` list. The role-specific lookups answer `null`
//! when the user has no player/coach record, so they decode to `Option`.

use serde_json::json;

use crate::client::client;
use crate::error::ApiError;
use crate::models::{Coach, Player, Training};

/// The player record backing a user account, if any.
pub async fn player_for_user(user_id: &str) -> Result<Option<Player>, ApiError> {
    client().get_json(&format!("/api/player/get/{user_id}")).await
}

/// The coach record backing a user account, if any.
pub async fn coach_for_user(user_id: &str) -> Result<Option<Coach>, ApiError> {
    client().get_json(&format!("/api/coach/get/{user_id}")).await
}

/// Every session scheduled by a coach, active and completed.
pub async fn trainings_for_coach(coach_id: &str) -> Result<Vec<Training>, ApiError> {
    client().get_json(&format!("/api/admin/training/{coach_id}")).await
}

/// One session with its participant list.
pub async fn training(training_id: &str) -> Result<Training, ApiError> {
    client()
        .get_json(&format!("/api/admin/training/get/{training_id}"))
        .await
}

/// Set or withdraw a player's attendance.
pub async fn set_attendance(
    training_id: &str,
    player_id: &str,
    attendance: bool,
) -> Result<(), ApiError> {
    client()
        .post_unit(
            &format!("/api/admin/training/attendance/{training_id}"),
            &json!({ "playerId": player_id, "attendance": attendance }),
        )
        .await
}

/// Coach-side: drop a player from a session.
pub async fn remove_participant(training_id: &str, player_id: &str) -> Result<(), ApiError> {
    client()
        .delete(&format!("/api/training/{training_id}/participants/{player_id}"))
        .await
}
