use dioxus::prelude::*;

use crate::components::{Button, FormField, Picker};
use crate::forms::{self, FormErrors};
use crate::{fetch, use_session, use_toast};

/// First-login profile: confirm the username, add a bio, request a role.
/// The role is a request; an admin grants it server-side.
#[component]
pub fn OnboardingView(on_completed: EventHandler<api::User>) -> Element {
    let mut session = use_session();
    let mut username = use_signal(|| {
        session
            .read()
            .user
            .as_ref()
            .map(|u| u.username.clone())
            .unwrap_or_default()
    });
    let mut bio = use_signal(String::new);
    let mut role = use_signal(String::new);
    let mut errors = use_signal(FormErrors::default);
    let mut busy = use_signal(|| false);
    let mut toast = use_toast();

    let submit = move |_| {
        if *busy.read() {
            return;
        }
        let Some(user_id) = session.read().user_id() else {
            toast.error("Sign in first");
            return;
        };
        let username_value = username().trim().to_string();
        let bio_value = bio().trim().to_string();
        let role_value = forms::parse_role(&role());

        let mut local = FormErrors::default();
        local.check("username", forms::required(&username_value, "Username"));
        local.check("username", forms::length(&username_value, 3, 20, "Username"));
        local.check("role", forms::role(role_value));
        let (Some(role_value), true) = (role_value, local.is_empty()) else {
            errors.set(local);
            return;
        };
        errors.set(FormErrors::default());
        busy.set(true);

        spawn(async move {
            let outcome: Result<api::User, api::ApiError> = async {
                api::auth::complete_onboarding(
                    &user_id,
                    &username_value,
                    &bio_value,
                    role_value.as_str(),
                )
                .await?;
                api::auth::get_user(&user_id).await
            }
            .await;

            match outcome {
                Ok(user) => {
                    session.write().user = Some(user.clone());
                    toast.success("You're all set");
                    on_completed.call(user);
                }
                Err(err) => toast.error(fetch::describe(&err)),
            }
            busy.set(false);
        });
    };

    let role_options: Vec<(String, String)> = std::iter::once(("".to_string(), "Pick a role".to_string()))
        .chain(
            forms::SELECTABLE_ROLES
                .iter()
                .map(|r| (r.as_str().to_string(), r.as_str().to_string())),
        )
        .collect();

    rsx! {
        div { class: "screen auth-screen",
            h1 { "Complete your profile" }

            FormField {
                label: "Username",
                value: username(),
                error: errors.read().get("username").map(str::to_string),
                oninput: move |evt: FormEvent| username.set(evt.value()),
            }
            FormField {
                label: "Bio",
                value: bio(),
                multiline: true,
                oninput: move |evt: FormEvent| bio.set(evt.value()),
            }

            div { class: "form-field",
                label { "I am a..." }
                Picker {
                    options: role_options,
                    selected: role(),
                    onselect: move |value| role.set(value),
                }
                if let Some(message) = errors.read().get("role") {
                    span { class: "field-error", "{message}" }
                }
            }

            Button { label: "Finish", loading: busy(), onclick: submit }
        }
    }
}
