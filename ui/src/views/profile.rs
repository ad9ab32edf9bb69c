use dioxus::prelude::*;

use crate::components::{Button, EmptyState, FormField, Loading, Picker};
use crate::forms::{self, FormErrors};
use crate::views::picked_image;
use crate::{fetch, use_endpoint, use_session, use_toast};

/// Account profile editor: photo, username, email, bio and requested role.
/// The role is a request like during onboarding; an admin grants it.
#[component]
pub fn ProfileView() -> Element {
    let session = use_session();
    let mut toast = use_toast();

    let user = use_endpoint(move || {
        let user_id = session.read().user_id()?;
        Some(async move { api::auth::get_user(&user_id).await })
    });

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut role = use_signal(String::new);
    let mut photo = use_signal(|| None::<api::ImageAsset>);
    let mut errors = use_signal(FormErrors::default);
    let mut saving = use_signal(|| false);

    use_effect(move || {
        if let Some(loaded) = user.data.read().as_ref() {
            username.set(loaded.username.clone());
            email.set(loaded.email.clone());
            bio.set(loaded.bio.clone());
            role.set(loaded.role.map(|r| r.as_str().to_string()).unwrap_or_default());
        }
    });

    let on_save = move |_| {
        if *saving.read() {
            return;
        }
        let Some(user_id) = session.read().user_id() else {
            return;
        };
        let username_value = username().trim().to_string();
        let email_value = email().trim().to_string();
        let role_value = forms::parse_role(&role());

        let local = forms::profile(&username_value, &email_value, role_value);
        let (Some(role_value), true) = (role_value, local.is_empty()) else {
            errors.set(local);
            return;
        };
        errors.set(FormErrors::default());
        saving.set(true);

        let update = api::profile::ProfileUpdate {
            username: username_value,
            email: email_value,
            bio: bio().trim().to_string(),
            wanted_role: role_value.as_str().to_string(),
            photo: photo(),
        };
        spawn(async move {
            match api::profile::update_user(&user_id, update).await {
                Ok(()) => {
                    toast.success("Profile updated");
                    photo.set(None);
                    user.refetch();
                }
                Err(err) => toast.error(fetch::describe(&err)),
            }
            saving.set(false);
        });
    };

    let signed_in = session.read().user.is_some();
    let current_photo = user.data.read().as_ref().and_then(|u| u.image_url.clone());
    let role_options: Vec<(String, String)> =
        std::iter::once(("".to_string(), "Pick a role".to_string()))
            .chain(
                forms::SELECTABLE_ROLES
                    .iter()
                    .map(|r| (r.as_str().to_string(), r.as_str().to_string())),
            )
            .collect();

    rsx! {
        div { class: "screen",
            h1 { "Edit profile" }

            if !signed_in {
                EmptyState { message: "Sign in to edit your profile" }
            } else if user.data.read().is_some() {
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

                FormField {
                    label: "Username",
                    value: username(),
                    error: errors.read().get("username").map(str::to_string),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                FormField {
                    label: "Email",
                    value: email(),
                    input_type: "email",
                    error: errors.read().get("email").map(str::to_string),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                FormField {
                    label: "Bio",
                    value: bio(),
                    multiline: true,
                    oninput: move |evt: FormEvent| bio.set(evt.value()),
                }

                div { class: "form-field",
                    label { "Role" }
                    Picker {
                        options: role_options,
                        selected: role(),
                        onselect: move |value| role.set(value),
                    }
                    if let Some(message) = errors.read().get("role") {
                        span { class: "field-error", "{message}" }
                    }
                }

                Button { label: "Save changes", loading: saving(), onclick: on_save }
            } else if let Some(message) = user.error.read().as_ref() {
                EmptyState { message: "{message}" }
            } else {
                Loading {}
            }
        }
    }
}
