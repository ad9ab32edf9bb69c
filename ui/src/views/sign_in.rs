use dioxus::prelude::*;

use crate::components::{Button, FormField};
use crate::forms::{self, FormErrors};
use crate::{fetch, format, use_session, use_toast};

/// Email/password sign-in. A wrong password renders inline on the password
/// field; a suspended account renders the ban details above the form.
#[component]
pub fn SignInView(
    on_signed_in: EventHandler<api::User>,
    on_navigate_sign_up: EventHandler<()>,
) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FormErrors::default);
    let mut busy = use_signal(|| false);
    let mut ban = use_signal(|| None::<api::BanInfo>);
    let mut session = use_session();
    let mut toast = use_toast();

    let submit = move |_| {
        if *busy.read() {
            return;
        }
        let email_value = email().trim().to_string();
        let password_value = password();
        let local = forms::sign_in(&email_value, &password_value);
        if !local.is_empty() {
            errors.set(local);
            return;
        }
        errors.set(FormErrors::default());
        busy.set(true);
        ban.set(None);
        spawn(async move {
            match api::auth::sign_in(&email_value, &password_value).await {
                Ok(api::SignIn::Success { user, .. }) => {
                    session.write().user = Some(user.clone());
                    toast.success(format!("Welcome back, {}", user.username));
                    on_signed_in.call(user);
                }
                Ok(api::SignIn::InvalidPassword) => {
                    errors.set(forms::rejected_credentials());
                }
                Ok(api::SignIn::Banned(info)) => {
                    ban.set(Some(info));
                }
                Err(err) => toast.error(fetch::describe(&err)),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "screen auth-screen",
            h1 { "Sign in" }

            if let Some(info) = ban() {
                div { class: "ban-banner",
                    h2 { "Account suspended" }
                    p { "{info.reason}" }
                    if let Some(end) = info.end_date {
                        p { "Until {format::short_date(end)}" }
                    }
                    if let Some(moderator) = info.banned_by {
                        p { class: "ban-moderator", "Issued by {moderator.username}" }
                    }
                }
            }

            FormField {
                label: "Email",
                value: email(),
                input_type: "email",
                error: errors.read().get("email").map(str::to_string),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            FormField {
                label: "Password",
                value: password(),
                input_type: "password",
                error: errors.read().get("password").map(str::to_string),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            Button { label: "Sign in", loading: busy(), onclick: submit }

            button {
                class: "link",
                onclick: move |_| on_navigate_sign_up.call(()),
                "No account yet? Sign up"
            }
        }
    }
}
