use chrono::{DateTime, NaiveDate, Utc};
use dioxus::prelude::*;

use crate::components::{Button, EmptyState, FormField, Loading, Picker};
use crate::forms::{self, FormErrors};
use crate::views::picked_image;
use crate::{fetch, use_endpoint, use_session, use_toast};

/// Role-record editor for the signed-in user. Players get the full playing
/// profile; coaches and referees share the staff form, which differs only in
/// the endpoint it posts to.
#[component]
pub fn RoleProfileView() -> Element {
    let session = use_session();
    let (signed_in, role) = {
        let state = session.read();
        (
            state.user.is_some(),
            state.user.as_ref().and_then(|u| u.role),
        )
    };

    let editor = if !signed_in {
        rsx! { EmptyState { message: "Sign in to edit your profile" } }
    } else {
        match role {
            Some(api::Role::Player) => rsx! { PlayerProfileEditor {} },
            Some(role @ (api::Role::Coach | api::Role::Referee)) => {
                rsx! { StaffProfileEditor { role } }
            }
            _ => rsx! { EmptyState { message: "Your role has not been granted yet" } },
        }
    };

    rsx! {
        div { class: "screen", {editor} }
    }
}

/// Options for a reference-data picker, with a leading placeholder entry.
fn options(items: Option<&Vec<api::NamedRef>>, placeholder: &str) -> Vec<(String, String)> {
    std::iter::once(("".to_string(), placeholder.to_string()))
        .chain(
            items
                .into_iter()
                .flatten()
                .map(|r| (r.id.clone(), r.name.clone())),
        )
        .collect()
}

#[component]
fn PlayerProfileEditor() -> Element {
    let session = use_session();
    let mut toast = use_toast();

    let record = use_endpoint(move || {
        let user_id = session.read().user_id()?;
        Some(async move { api::trainings::player_for_user(&user_id).await })
    });
    let countries = use_endpoint(|| Some(api::profile::countries()));
    let positions = use_endpoint(|| Some(api::profile::positions()));
    let teams = use_endpoint(|| Some(api::profile::team_options()));

    let mut name = use_signal(String::new);
    let mut surname = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut nationality = use_signal(String::new);
    let mut position = use_signal(String::new);
    let mut wanted_team = use_signal(String::new);
    let mut height = use_signal(String::new);
    let mut weight = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut number = use_signal(String::new);
    let mut footed = use_signal(String::new);
    let mut photo = use_signal(|| None::<api::ImageAsset>);
    let mut errors = use_signal(FormErrors::default);
    let mut saving = use_signal(|| false);

    use_effect(move || {
        if let Some(Some(player)) = record.data.read().as_ref() {
            name.set(player.name.clone());
            surname.set(player.surname.clone());
            bio.set(player.bio.clone());
            nationality.set(player.nationality.clone().unwrap_or_default());
            position.set(player.position.clone().unwrap_or_default());
            wanted_team.set(player.wanted_team.clone().unwrap_or_default());
            height.set(whole(player.height));
            weight.set(whole(player.weight));
            age.set(player.age.map(|v| v.to_string()).unwrap_or_default());
            number.set(player.number.map(|v| v.to_string()).unwrap_or_default());
            footed.set(player.footed.clone().unwrap_or_default());
        }
    });

    let on_save = move |_| {
        if *saving.read() {
            return;
        }
        let Some(user_id) = session.read().user_id() else {
            return;
        };
        let name_value = name().trim().to_string();
        let surname_value = surname().trim().to_string();
        let nationality_value = nationality();
        let position_value = position();
        let footed_value = footed();
        let height_value = height();
        let weight_value = weight();
        let age_value = age();
        let number_value = number();

        let local = forms::player_profile(
            &name_value,
            &surname_value,
            &nationality_value,
            &position_value,
            &footed_value,
            &height_value,
            &weight_value,
            &age_value,
            &number_value,
        );
        if !local.is_empty() {
            errors.set(local);
            return;
        }
        errors.set(FormErrors::default());
        saving.set(true);

        let profile = api::profile::PlayerProfile {
            name: name_value,
            surname: surname_value,
            bio: bio().trim().to_string(),
            nationality: nationality_value,
            wanted_team: wanted_team(),
            height: height_value.trim().parse().unwrap_or_default(),
            weight: weight_value.trim().parse().unwrap_or_default(),
            age: age_value.trim().parse().unwrap_or_default(),
            number: number_value.trim().parse().unwrap_or_default(),
            footed: footed_value,
            position: position_value,
            photo: photo(),
        };
        spawn(async move {
            match api::profile::save_player_profile(&user_id, profile).await {
                Ok(()) => {
                    toast.success("Player profile saved");
                    photo.set(None);
                    record.refetch();
                }
                Err(err) => toast.error(fetch::describe(&err)),
            }
            saving.set(false);
        });
    };

    let loaded = record.data.read().is_some();
    let current_team = record
        .data
        .read()
        .as_ref()
        .and_then(|r| r.as_ref())
        .and_then(|p| p.current_team.as_ref().map(|t| t.name.clone()));
    let current_photo = record
        .data
        .read()
        .as_ref()
        .and_then(|r| r.as_ref())
        .and_then(|p| p.image_url.clone());
    let country_options = options(countries.data.read().as_ref(), "Select nationality");
    let position_options = options(positions.data.read().as_ref(), "Select position");
    let team_options = options(teams.data.read().as_ref(), "Select preferred team");
    let footed_options: Vec<(String, String)> = [("", "Select foot"), ("Left", "Left"), ("Right", "Right")]
        .iter()
        .map(|(v, l)| (v.to_string(), l.to_string()))
        .collect();

    rsx! {
        h1 { "Player profile" }

        if !loaded {
            if let Some(message) = record.error.read().as_ref() {
                EmptyState { message: "{message}" }
            } else {
                Loading {}
            }
        } else {
            div { class: "form-field",
                label { "Photo" }
                if let Some(url) = current_photo {
                    img { class: "avatar", src: "{url}" }
                }
                input {
                    r#type: "file",
                    accept: "image/*",
                    onchange: move |evt: FormEvent| {
                        spawn(async move {
                            if let Some(asset) = picked_image(evt).await {
                                photo.set(Some(asset));
                            }
                        });
                    },
                }
            }

            div { class: "field-row",
                FormField {
                    label: "First name",
                    value: name(),
                    error: errors.read().get("name").map(str::to_string),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                FormField {
                    label: "Last name",
                    value: surname(),
                    error: errors.read().get("surname").map(str::to_string),
                    oninput: move |evt: FormEvent| surname.set(evt.value()),
                }
            }

            FormField {
                label: "Bio",
                value: bio(),
                multiline: true,
                oninput: move |evt: FormEvent| bio.set(evt.value()),
            }

            div { class: "form-field",
                label { "Nationality" }
                Picker {
                    options: country_options,
                    selected: nationality(),
                    onselect: move |value| nationality.set(value),
                }
                if let Some(message) = errors.read().get("nationality") {
                    span { class: "field-error", "{message}" }
                }
            }

            div { class: "form-field",
                if let Some(team_name) = current_team {
                    label { "Current team" }
                    p { class: "readonly-value", "{team_name}" }
                    span { class: "field-hint", "To change your current team, contact your coach" }
                } else {
                    label { "Preferred team" }
                    Picker {
                        options: team_options,
                        selected: wanted_team(),
                        onselect: move |value| wanted_team.set(value),
                    }
                    span { class: "field-hint", "Choosing a team will notify the coach" }
                }
            }

            div { class: "field-row",
                FormField {
                    label: "Height (cm)",
                    value: height(),
                    input_type: "number",
                    error: errors.read().get("height").map(str::to_string),
                    oninput: move |evt: FormEvent| height.set(evt.value()),
                }
                FormField {
                    label: "Weight (kg)",
                    value: weight(),
                    input_type: "number",
                    error: errors.read().get("weight").map(str::to_string),
                    oninput: move |evt: FormEvent| weight.set(evt.value()),
                }
            }
            div { class: "field-row",
                FormField {
                    label: "Age",
                    value: age(),
                    input_type: "number",
                    error: errors.read().get("age").map(str::to_string),
                    oninput: move |evt: FormEvent| age.set(evt.value()),
                }
                FormField {
                    label: "Jersey number",
                    value: number(),
                    input_type: "number",
                    error: errors.read().get("number").map(str::to_string),
                    oninput: move |evt: FormEvent| number.set(evt.value()),
                }
            }

            div { class: "field-row",
                div { class: "form-field",
                    label { "Position" }
                    Picker {
                        options: position_options,
                        selected: position(),
                        onselect: move |value| position.set(value),
                    }
                    if let Some(message) = errors.read().get("position") {
                        span { class: "field-error", "{message}" }
                    }
                }
                div { class: "form-field",
                    label { "Preferred foot" }
                    Picker {
                        options: footed_options,
                        selected: footed(),
                        onselect: move |value| footed.set(value),
                    }
                    if let Some(message) = errors.read().get("footed") {
                        span { class: "field-error", "{message}" }
                    }
                }
            }

            Button { label: "Save changes", loading: saving(), onclick: on_save }
        }
    }
}

/// Common prefill shape for the coach and referee records.
#[derive(Clone, PartialEq)]
struct StaffRecord {
    name: String,
    surname: String,
    nationality: Option<String>,
    city: String,
    bio: String,
    birth_date: Option<DateTime<Utc>>,
    image_url: Option<String>,
}

impl From<api::Coach> for StaffRecord {
    fn from(coach: api::Coach) -> Self {
        Self {
            name: coach.name,
            surname: coach.surname,
            nationality: coach.nationality,
            city: coach.city,
            bio: coach.bio,
            birth_date: coach.birth_date,
            image_url: coach.image_url,
        }
    }
}

impl From<api::Referee> for StaffRecord {
    fn from(referee: api::Referee) -> Self {
        Self {
            name: referee.name,
            surname: referee.surname,
            nationality: referee.nationality,
            city: referee.city,
            bio: referee.bio,
            birth_date: referee.birth_date,
            image_url: referee.image_url,
        }
    }
}

#[component]
fn StaffProfileEditor(role: api::Role) -> Element {
    let session = use_session();
    let mut toast = use_toast();

    let record = use_endpoint(move || {
        let user_id = session.read().user_id()?;
        Some(async move {
            match role {
                api::Role::Coach => api::trainings::coach_for_user(&user_id)
                    .await
                    .map(|c| c.map(StaffRecord::from)),
                _ => api::profile::referee_for_user(&user_id)
                    .await
                    .map(|r| r.map(StaffRecord::from)),
            }
        })
    });
    let countries = use_endpoint(|| Some(api::profile::countries()));

    let mut name = use_signal(String::new);
    let mut surname = use_signal(String::new);
    let mut nationality = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut birth = use_signal(String::new);
    let mut photo = use_signal(|| None::<api::ImageAsset>);
    let mut errors = use_signal(FormErrors::default);
    let mut saving = use_signal(|| false);

    use_effect(move || {
        if let Some(Some(staff)) = record.data.read().as_ref() {
            name.set(staff.name.clone());
            surname.set(staff.surname.clone());
            nationality.set(staff.nationality.clone().unwrap_or_default());
            city.set(staff.city.clone());
            bio.set(staff.bio.clone());
            birth.set(
                staff
                    .birth_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            );
        }
    });

    let on_save = move |_| {
        if *saving.read() {
            return;
        }
        let Some(user_id) = session.read().user_id() else {
            return;
        };
        let name_value = name().trim().to_string();
        let surname_value = surname().trim().to_string();
        let nationality_value = nationality();
        let city_value = city().trim().to_string();
        let birth_value = birth();

        let local = forms::staff_profile(
            &name_value,
            &surname_value,
            &nationality_value,
            &city_value,
            &birth_value,
        );
        if !local.is_empty() {
            errors.set(local);
            return;
        }
        let Ok(birth_date) = NaiveDate::parse_from_str(birth_value.trim(), "%Y-%m-%d") else {
            return;
        };
        errors.set(FormErrors::default());
        saving.set(true);

        let profile = api::profile::StaffProfile {
            name: name_value,
            surname: surname_value,
            nationality: nationality_value,
            city: city_value,
            bio: bio().trim().to_string(),
            birth_date,
            photo: photo(),
        };
        spawn(async move {
            let outcome = match role {
                api::Role::Coach => api::profile::save_coach_profile(profile).await,
                _ => api::profile::save_referee_profile(&user_id, profile).await,
            };
            match outcome {
                Ok(()) => {
                    toast.success(format!("{} profile saved", role.as_str()));
                    photo.set(None);
                    record.refetch();
                }
                Err(err) => toast.error(fetch::describe(&err)),
            }
            saving.set(false);
        });
    };

    let loaded = record.data.read().is_some();
    let current_photo = record
        .data
        .read()
        .as_ref()
        .and_then(|r| r.as_ref())
        .and_then(|s| s.image_url.clone());
    let country_options = options(countries.data.read().as_ref(), "Select nationality");

    rsx! {
        h1 { "{role.as_str()} profile" }

        if !loaded {
            if let Some(message) = record.error.read().as_ref() {
                EmptyState { message: "{message}" }
            } else {
                Loading {}
            }
        } else {
            div { class: "form-field",
                label { "Photo" }
                if let Some(url) = current_photo {
                    img { class: "avatar", src: "{url}" }
                }
                input {
                    r#type: "file",
                    accept: "image/*",
                    onchange: move |evt: FormEvent| {
                        spawn(async move {
                            if let Some(asset) = picked_image(evt).await {
                                photo.set(Some(asset));
                            }
                        });
                    },
                }
            }

            div { class: "field-row",
                FormField {
                    label: "First name",
                    value: name(),
                    error: errors.read().get("name").map(str::to_string),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                FormField {
                    label: "Last name",
                    value: surname(),
                    error: errors.read().get("surname").map(str::to_string),
                    oninput: move |evt: FormEvent| surname.set(evt.value()),
                }
            }

            div { class: "form-field",
                label { "Nationality" }
                Picker {
                    options: country_options,
                    selected: nationality(),
                    onselect: move |value| nationality.set(value),
                }
                if let Some(message) = errors.read().get("nationality") {
                    span { class: "field-error", "{message}" }
                }
            }

            FormField {
                label: "City",
                value: city(),
                error: errors.read().get("city").map(str::to_string),
                oninput: move |evt: FormEvent| city.set(evt.value()),
            }
            FormField {
                label: "Birth date",
                value: birth(),
                input_type: "date",
                error: errors.read().get("birth_date").map(str::to_string),
                oninput: move |evt: FormEvent| birth.set(evt.value()),
            }
            FormField {
                label: "Bio",
                value: bio(),
                multiline: true,
                oninput: move |evt: FormEvent| bio.set(evt.value()),
            }

            Button { label: "Save changes", loading: saving(), onclick: on_save }
        }
    }
}

/// Render a stored measurement back into the numeric input.
fn whole(value: Option<f32>) -> String {
    value.map(|v| (v.round() as i64).to_string()).unwrap_or_default()
}
