use dioxus::prelude::*;

use crate::components::{Button, FormField};
use crate::forms::{self, FormErrors};
use crate::{fetch, use_toast};

/// Account creation. Username and email availability are probed against the
/// server after local validation passes, so a taken name surfaces as a field
/// error rather than a failed submit.
#[component]
pub fn SignUpView(
    on_signed_up: EventHandler<()>,
    on_navigate_sign_in: EventHandler<()>,
) -> Element {
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut errors = use_signal(FormErrors::default);
    let mut busy = use_signal(|| false);
    let mut toast = use_toast();

    let submit = move |_| {
        if *busy.read() {
            return;
        }
        let username_value = username().trim().to_string();
        let email_value = email().trim().to_string();
        let password_value = password();
        let confirm_value = confirm();

        let local = forms::sign_up(&username_value, &email_value, &password_value, &confirm_value);
        if !local.is_empty() {
            errors.set(local);
            return;
        }
        errors.set(FormErrors::default());
        busy.set(true);

        spawn(async move {
            type Taken = Option<(&'static str, &'static str)>;
            let outcome: Result<Taken, api::ApiError> = async {
                if api::auth::check_username(&username_value).await? {
                    return Ok(Some(("username", "Username is taken")));
                }
                if api::auth::check_email(&email_value).await? {
                    return Ok(Some(("email", "Email is already registered")));
                }
                api::auth::sign_up(&username_value, &email_value, &password_value).await?;
                Ok(None)
            }
            .await;

            match outcome {
                Ok(None) => {
                    toast.success("Account created, sign in to continue");
                    on_signed_up.call(());
                }
                Ok(Some((field, message))) => {
                    errors.write().check(field, Some(message.to_string()));
                }
                Err(err) => toast.error(fetch::describe(&err)),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "screen auth-screen",
            h1 { "Sign up" }

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
                label: "Password",
                value: password(),
                input_type: "password",
                error: errors.read().get("password").map(str::to_string),
                hint: "8+ characters with letters, numbers and symbols",
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            FormField {
                label: "Confirm password",
                value: confirm(),
                input_type: "password",
                error: errors.read().get("confirm").map(str::to_string),
                oninput: move |evt: FormEvent| confirm.set(evt.value()),
            }

            Button { label: "Create account", loading: busy(), onclick: submit }

            button {
                class: "link",
                onclick: move |_| on_navigate_sign_in.call(()),
                "Already registered? Sign in"
            }
        }
    }
}
