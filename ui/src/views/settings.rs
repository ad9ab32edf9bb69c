use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, FormField};
use crate::forms::{self, FormErrors};
use crate::{fetch, use_session, use_toast};

/// Account screen: profile summary with links to the editors, password
/// change, sign-out and the two-tap account deletion.
#[component]
pub fn SettingsView(
    on_signed_out: EventHandler<()>,
    on_edit_profile: EventHandler<()>,
    on_edit_role_profile: EventHandler<()>,
) -> Element {
    let mut session = use_session();
    let mut toast = use_toast();

    let mut current = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut errors = use_signal(FormErrors::default);
    let mut busy = use_signal(|| false);
    let mut delete_armed = use_signal(|| false);

    let user = session.read().user.clone();

    let on_change_password = move |_| {
        if *busy.read() {
            return;
        }
        let Some(user_id) = session.read().user_id() else {
            return;
        };
        let current_value = current();
        let new_value = new_password();
        let confirm_value = confirm();

        let mut local = FormErrors::default();
        local.check("current", forms::required(&current_value, "Current password"));
        local.check("new", forms::password(&new_value));
        local.check("confirm", forms::matches(&confirm_value, &new_value, "Confirmation"));
        if !local.is_empty() {
            errors.set(local);
            return;
        }
        errors.set(FormErrors::default());
        busy.set(true);

        spawn(async move {
            match api::auth::change_password(&user_id, &current_value, &new_value).await {
                Ok(()) => {
                    current.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                    toast.success("Password changed");
                }
                Err(err) => toast.error(fetch::describe(&err)),
            }
            busy.set(false);
        });
    };

    let on_sign_out = move |_| {
        spawn(async move {
            if let Err(err) = api::auth::sign_out().await {
                tracing::warn!("sign-out: {err}");
            }
            session.write().user = None;
            on_signed_out.call(());
        });
    };

    let on_delete = move |_| {
        if !*delete_armed.read() {
            delete_armed.set(true);
            return;
        }
        let Some(user_id) = session.read().user_id() else {
            return;
        };
        spawn(async move {
            match api::auth::delete_account(&user_id).await {
                Ok(()) => {
                    session.write().user = None;
                    toast.success("Account deleted");
                    on_signed_out.call(());
                }
                Err(err) => toast.error(fetch::describe(&err)),
            }
        });
    };

    rsx! {
        div { class: "screen",
            h1 { "Settings" }

            if let Some(user) = user {
                section { class: "profile-summary",
                    if let Some(url) = user.image_url.as_ref() {
                        img { class: "avatar", src: "{url}" }
                    }
                    h2 { "{user.username}" }
                    p { "{user.email}" }
                    if !user.bio.is_empty() {
                        p { class: "profile-bio", "{user.bio}" }
                    }
                    if let Some(role) = user.role {
                        p { class: "profile-role", "{role.as_str()}" }
                    }
                    if !user.is_profile_filled {
                        p { class: "profile-nudge", "Your profile is incomplete." }
                    }
                    div { class: "profile-links",
                        Button {
                            label: "Edit profile",
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| on_edit_profile.call(()),
                        }
                        if let Some(role) = user.role {
                            if role != api::Role::Admin {
                                Button {
                                    label: format!("{} profile", role.as_str()),
                                    variant: ButtonVariant::Secondary,
                                    onclick: move |_| on_edit_role_profile.call(()),
                                }
                            }
                        }
                    }
                }

                section { class: "password-change",
                    h2 { "Change password" }
                    FormField {
                        label: "Current password",
                        value: current(),
                        input_type: "password",
                        error: errors.read().get("current").map(str::to_string),
                        oninput: move |evt: FormEvent| current.set(evt.value()),
                    }
                    FormField {
                        label: "New password",
                        value: new_password(),
                        input_type: "password",
                        error: errors.read().get("new").map(str::to_string),
                        oninput: move |evt: FormEvent| new_password.set(evt.value()),
                    }
                    FormField {
                        label: "Confirm new password",
                        value: confirm(),
                        input_type: "password",
                        error: errors.read().get("confirm").map(str::to_string),
                        oninput: move |evt: FormEvent| confirm.set(evt.value()),
                    }
                    Button { label: "Update password", loading: busy(), onclick: on_change_password }
                }

                section { class: "danger-zone",
                    Button {
                        label: "Sign out",
                        variant: ButtonVariant::Secondary,
                        onclick: on_sign_out,
                    }
                    Button {
                        label: if delete_armed() { "Tap again to delete your account".to_string() } else { "Delete account".to_string() },
                        variant: ButtonVariant::Danger,
                        onclick: on_delete,
                    }
                }
            } else {
                p { "You are not signed in." }
                Button { label: "Back", onclick: move |_| on_signed_out.call(()) }
            }
        }
    }
}
