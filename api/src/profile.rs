//! Profile editor endpoints: the account profile and the role records.
//!
//! Each editor reads the existing record, lets the user fill it in, and posts
//! the whole form back as multipart (a photo part rides along when replaced).
//! Reference data for the pickers lives under `/api/admin`.

use chrono::NaiveDate;

use crate::client::client;
use crate::error::ApiError;
use crate::models::{NamedRef, Referee};
use crate::posts::ImageAsset;

/// Countries for the nationality pickers.
pub async fn countries() -> Result<Vec<NamedRef>, ApiError> {
    client().get_json("/api/admin/country").await
}

/// Playing positions.
pub async fn positions() -> Result<Vec<NamedRef>, ApiError> {
    client().get_json("/api/admin/position").await
}

/// Every team, for the preferred-team picker.
pub async fn team_options() -> Result<Vec<NamedRef>, ApiError> {
    client().get_json("/api/admin/team").await
}

/// The referee record backing a user account, if any.
pub async fn referee_for_user(user_id: &str) -> Result<Option<Referee>, ApiError> {
    client().get_json(&format!("/api/referee/get/{user_id}")).await
}

fn attach_photo(
    form: reqwest::multipart::Form,
    photo: Option<ImageAsset>,
) -> Result<reqwest::multipart::Form, ApiError> {
    match photo {
        Some(photo) => {
            let part = reqwest::multipart::Part::bytes(photo.bytes)
                .file_name(photo.file_name)
                .mime_str(&photo.mime)?;
            Ok(form.part("photo", part))
        }
        None => Ok(form),
    }
}

/// Account-level profile form.
#[derive(Clone, Debug)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
    pub bio: String,
    pub wanted_role: String,
    pub photo: Option<ImageAsset>,
}

/// Save the account profile.
pub async fn update_user(user_id: &str, update: ProfileUpdate) -> Result<(), ApiError> {
    let form = reqwest::multipart::Form::new()
        .text("username", update.username)
        .text("email", update.email)
        .text("bio", update.bio)
        .text("wantedRole", update.wanted_role);
    let form = attach_photo(form, update.photo)?;
    client()
        .post_multipart::<serde_json::Value>(&format!("/api/user/add/{user_id}"), form)
        .await?;
    Ok(())
}

/// Player record form. Numbers arrive pre-validated from the screen.
#[derive(Clone, Debug)]
pub struct PlayerProfile {
    pub name: String,
    pub surname: String,
    pub bio: String,
    pub nationality: String,
    pub wanted_team: String,
    pub height: u32,
    pub weight: u32,
    pub age: u32,
    pub number: u32,
    pub footed: String,
    pub position: String,
    pub photo: Option<ImageAsset>,
}

/// Create or update the player record for `user_id`.
pub async fn save_player_profile(user_id: &str, profile: PlayerProfile) -> Result<(), ApiError> {
    let form = reqwest::multipart::Form::new()
        .text("name", profile.name)
        .text("surname", profile.surname)
        .text("user", user_id.to_string())
        .text("bio", profile.bio)
        .text("nationality", profile.nationality)
        .text("height", profile.height.to_string())
        .text("weight", profile.weight.to_string())
        .text("age", profile.age.to_string())
        .text("number", profile.number.to_string())
        .text("footed", profile.footed)
        .text("position", profile.position)
        .text("wantedTeam", profile.wanted_team);
    let form = attach_photo(form, profile.photo)?;
    client()
        .post_multipart::<serde_json::Value>("/api/player/add", form)
        .await?;
    Ok(())
}

/// Coach and referee records share one form shape.
#[derive(Clone, Debug)]
pub struct StaffProfile {
    pub name: String,
    pub surname: String,
    pub nationality: String,
    pub city: String,
    pub bio: String,
    pub birth_date: NaiveDate,
    pub photo: Option<ImageAsset>,
}

fn staff_form(
    user_id: Option<&str>,
    profile: StaffProfile,
) -> Result<reqwest::multipart::Form, ApiError> {
    let mut form = reqwest::multipart::Form::new()
        .text("name", profile.name)
        .text("surname", profile.surname)
        .text("nationality", profile.nationality)
        .text("city", profile.city)
        .text("bio", profile.bio)
        .text("birthDate", iso_midnight(profile.birth_date));
    if let Some(user_id) = user_id {
        form = form.text("user", user_id.to_string());
    }
    attach_photo(form, profile.photo)
}

fn iso_midnight(date: NaiveDate) -> String {
    format!("{date}T00:00:00.000Z")
}

/// Create or update the coach record. The backend resolves the coach from
/// the session token, so no user id travels in the form.
pub async fn save_coach_profile(profile: StaffProfile) -> Result<(), ApiError> {
    let form = staff_form(None, profile)?;
    client()
        .post_multipart::<serde_json::Value>("/api/coach/create", form)
        .await?;
    Ok(())
}

/// Create or update the referee record for `user_id`.
pub async fn save_referee_profile(user_id: &str, profile: StaffProfile) -> Result<(), ApiError> {
    let form = staff_form(Some(user_id), profile)?;
    client()
        .post_multipart::<serde_json::Value>("/api/referee/add", form)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birth_dates_post_as_utc_midnight() {
        let date = NaiveDate::from_ymd_opt(1971, 1, 18).unwrap();
        assert_eq!(iso_midnight(date), "1971-01-18T00:00:00.000Z");
    }
}
