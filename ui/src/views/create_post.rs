use dioxus::prelude::*;

use crate::components::{Button, FormField};
use crate::forms::{self, FormErrors};
use crate::views::picked_image;
use crate::{fetch, use_session, use_toast};

/// New post composer. A photo is required here, unlike on edit.
#[component]
pub fn CreatePostView(
    on_created: EventHandler<()>,
    on_require_sign_in: EventHandler<()>,
) -> Element {
    let session = use_session();
    let mut toast = use_toast();
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut photo = use_signal(|| None::<api::ImageAsset>);
    let mut errors = use_signal(FormErrors::default);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        if *busy.read() {
            return;
        }
        let Some(user_id) = session.read().user_id() else {
            on_require_sign_in.call(());
            return;
        };
        let title_value = title().trim().to_string();
        let content_value = content().trim().to_string();
        let image = photo();

        let local = forms::post(&title_value, &content_value, image.is_some(), true);
        if !local.is_empty() {
            errors.set(local);
            return;
        }
        errors.set(FormErrors::default());
        busy.set(true);

        spawn(async move {
            match api::posts::create_post(&user_id, &title_value, &content_value, image).await {
                Ok(()) => {
                    title.set(String::new());
                    content.set(String::new());
                    photo.set(None);
                    toast.success("Post published");
                    on_created.call(());
                }
                Err(err) => toast.error(fetch::describe(&err)),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "screen",
            h1 { "New post" }

            FormField {
                label: "Title",
                value: title(),
                error: errors.read().get("title").map(str::to_string),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }
            FormField {
                label: "Content",
                value: content(),
                multiline: true,
                error: errors.read().get("content").map(str::to_string),
                oninput: move |evt: FormEvent| content.set(evt.value()),
            }

            div { class: "form-field",
                label { "Photo" }
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
                if let Some(asset) = photo.read().as_ref() {
                    span { class: "field-hint", "Selected: {asset.file_name}" }
                }
                if let Some(message) = errors.read().get("photo") {
                    span { class: "field-error", "{message}" }
                }
            }

            Button { label: "Publish", loading: busy(), onclick: submit }
        }
    }
}
