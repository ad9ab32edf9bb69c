use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, EmptyState, FormField, Loading};
use crate::views::picked_image;
use crate::{fetch, format, forms, use_endpoint, use_membership, use_session, use_toast};

/// One post with its like toggle, comment composer and comment tree. The
/// author gets inline edit and delete controls.
#[component]
pub fn PostDetailView(
    post_id: String,
    on_deleted: EventHandler<()>,
    on_require_sign_in: EventHandler<()>,
) -> Element {
    let session = use_session();
    let mut toast = use_toast();

    let id = post_id.clone();
    let post = use_endpoint(move || {
        let id = id.clone();
        Some(async move { api::posts::get_post(&id).await })
    });

    let mut likes = use_membership();
    use_effect(move || {
        if let Some(loaded) = post.data.read().as_ref() {
            likes.sync(loaded.likes.clone());
        }
    });

    let like_id = post_id.clone();
    let mut likes_for_toggle = likes;
    let on_like = move |_| {
        let Some(user_id) = session.read().user_id() else {
            on_require_sign_in.call(());
            return;
        };
        let post_id = like_id.clone();
        let join = {
            let post_id = post_id.clone();
            let user_id = user_id.clone();
            async move { api::posts::like(&post_id, &user_id).await }
        };
        let leave = {
            let user_id = user_id.clone();
            async move { api::posts::unlike(&post_id, &user_id).await }
        };
        likes_for_toggle.toggle(user_id, join, leave);
    };

    // comment composer
    let mut comment = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let comment_parent = post_id.clone();
    let on_comment = move |_| {
        if *sending.read() {
            return;
        }
        let Some(user_id) = session.read().user_id() else {
            on_require_sign_in.call(());
            return;
        };
        let text = comment().trim().to_string();
        if text.is_empty() {
            return;
        }
        let parent = comment_parent.clone();
        sending.set(true);
        spawn(async move {
            match api::posts::add_comment(&parent, &user_id, &text).await {
                Ok(()) => {
                    comment.set(String::new());
                    post.refetch();
                }
                Err(err) => toast.error(fetch::describe(&err)),
            }
            sending.set(false);
        });
    };

    let user_id = session.read().user_id();
    let liked = user_id
        .as_deref()
        .map(|uid| likes.contains(uid))
        .unwrap_or(false);

    rsx! {
        div { class: "screen",
            if let Some(loaded) = post.data.read().as_ref() {
                PostBody {
                    post: loaded.clone(),
                    user_id: user_id.clone(),
                    on_changed: move |_| post.refetch(),
                    on_deleted,
                }

                div { class: "post-actions",
                    button {
                        class: if liked { "like-button liked" } else { "like-button" },
                        disabled: likes.is_pending(),
                        onclick: on_like,
                        if liked { "Liked" } else { "Like" }
                        " ({likes.count()})"
                    }
                }

                div { class: "comment-composer",
                    FormField {
                        label: "Add a comment",
                        value: comment(),
                        multiline: true,
                        oninput: move |evt: FormEvent| comment.set(evt.value()),
                    }
                    Button { label: "Post comment", loading: sending(), onclick: on_comment }
                }

                section { class: "comments",
                    h2 { "Comments" }
                    if loaded.children.is_empty() {
                        EmptyState { message: "No comments yet" }
                    }
                    for child in loaded.children.iter().cloned() {
                        CommentItem {
                            comment: child,
                            user_id: user_id.clone(),
                            on_changed: move |_| post.refetch(),
                        }
                    }
                }
            } else if let Some(message) = post.error.read().as_ref() {
                EmptyState { message: "{message}" }
            } else {
                Loading {}
            }
        }
    }
}

/// Title, photo and content, plus the author's edit/delete controls.
#[component]
fn PostBody(
    post: api::Post,
    user_id: Option<String>,
    on_changed: EventHandler<()>,
    on_deleted: EventHandler<()>,
) -> Element {
    let mut toast = use_toast();
    let mut editing = use_signal(|| false);
    let mut title = use_signal(|| post.title.clone());
    let mut content = use_signal(|| post.post_content.clone());
    let mut new_photo = use_signal(|| None::<api::ImageAsset>);
    let mut busy = use_signal(|| false);
    let mut delete_armed = use_signal(|| false);

    let is_author = match (&user_id, &post.author) {
        (Some(uid), Some(author)) => *uid == author.id,
        _ => false,
    };
    let author_name = post
        .author
        .as_ref()
        .map(|a| a.username.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let edit_id = post.id.clone();
    let on_save = move |_| {
        if *busy.read() {
            return;
        }
        let title_value = title().trim().to_string();
        let content_value = content().trim().to_string();
        // the existing photo survives unless replaced
        let errors = forms::post(&title_value, &content_value, true, false);
        if let Some(message) = errors.get("title").or(errors.get("content")) {
            toast.error(message.to_string());
            return;
        }
        let post_id = edit_id.clone();
        let image = new_photo();
        busy.set(true);
        spawn(async move {
            match api::posts::edit_post(&post_id, &title_value, &content_value, image).await {
                Ok(()) => {
                    editing.set(false);
                    new_photo.set(None);
                    on_changed.call(());
                }
                Err(err) => toast.error(fetch::describe(&err)),
            }
            busy.set(false);
        });
    };

    let delete_id = post.id.clone();
    let on_delete = move |_| {
        if !*delete_armed.read() {
            delete_armed.set(true);
            return;
        }
        let post_id = delete_id.clone();
        spawn(async move {
            match api::posts::delete_post(&post_id).await {
                Ok(()) => {
                    toast.success("Post deleted");
                    on_deleted.call(());
                }
                Err(err) => toast.error(fetch::describe(&err)),
            }
        });
    };

    rsx! {
        if editing() {
            div { class: "post-edit",
                FormField {
                    label: "Title",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
                FormField {
                    label: "Content",
                    value: content(),
                    multiline: true,
                    oninput: move |evt: FormEvent| content.set(evt.value()),
                }
                div { class: "form-field",
                    label { "Replace photo" }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        onchange: move |evt: FormEvent| {
                            spawn(async move {
                                if let Some(asset) = picked_image(evt).await {
                                    new_photo.set(Some(asset));
                                }
                            });
                        },
                    }
                }
                Button { label: "Save", loading: busy(), onclick: on_save }
                Button {
                    label: "Cancel",
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| editing.set(false),
                }
            }
        } else {
            article { class: "post-full",
                h1 { "{post.title}" }
                p { class: "post-meta",
                    "by {author_name}"
                    if let Some(at) = post.created_at {
                        " on {format::short_date(at)}"
                    }
                }
                if let Some(url) = post.image_url.as_ref() {
                    img { class: "post-photo", src: "{url}" }
                }
                p { "{post.post_content}" }

                if is_author {
                    div { class: "author-actions",
                        Button {
                            label: "Edit",
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| editing.set(true),
                        }
                        Button {
                            label: if delete_armed() { "Tap again to delete".to_string() } else { "Delete".to_string() },
                            variant: ButtonVariant::Danger,
                            onclick: on_delete,
                        }
                    }
                }
            }
        }
    }
}

/// A comment and its replies. Comments are posts, so the tree recurses
/// through `children`. Replies, edits and deletions bubble up as `on_changed`
/// and the screen refetches the whole tree; likes patch locally through the
/// shared toggle.
#[component]
fn CommentItem(
    comment: api::Post,
    user_id: Option<String>,
    on_changed: EventHandler<()>,
) -> Element {
    let mut toast = use_toast();
    let mut replying = use_signal(|| false);
    let mut reply = use_signal(String::new);
    let mut editing = use_signal(|| false);
    let mut draft = use_signal(|| comment.post_content.clone());
    let mut busy = use_signal(|| false);

    let is_author = match (&user_id, &comment.author) {
        (Some(uid), Some(author)) => *uid == author.id,
        _ => false,
    };
    let author_name = comment
        .author
        .as_ref()
        .map(|a| a.username.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let reply_parent = comment.id.clone();
    let reply_user = user_id.clone();
    let on_reply = move |_| {
        if *busy.read() {
            return;
        }
        let Some(user_id) = reply_user.clone() else {
            return;
        };
        let text = reply().trim().to_string();
        if text.is_empty() {
            return;
        }
        let parent = reply_parent.clone();
        busy.set(true);
        spawn(async move {
            match api::posts::add_comment(&parent, &user_id, &text).await {
                Ok(()) => {
                    reply.set(String::new());
                    replying.set(false);
                    on_changed.call(());
                }
                Err(err) => toast.error(fetch::describe(&err)),
            }
            busy.set(false);
        });
    };

    let edit_id = comment.id.clone();
    let on_save = move |_| {
        if *busy.read() {
            return;
        }
        let text = draft().trim().to_string();
        if text.is_empty() {
            return;
        }
        let comment_id = edit_id.clone();
        busy.set(true);
        spawn(async move {
            match api::posts::edit_comment(&comment_id, &text).await {
                Ok(()) => {
                    editing.set(false);
                    on_changed.call(());
                }
                Err(err) => toast.error(fetch::describe(&err)),
            }
            busy.set(false);
        });
    };

    let delete_id = comment.id.clone();
    let on_delete = move |_| {
        let comment_id = delete_id.clone();
        spawn(async move {
            match api::posts::delete_post(&comment_id).await {
                Ok(()) => on_changed.call(()),
                Err(err) => toast.error(fetch::describe(&err)),
            }
        });
    };

    // comments are posts, so likes go through the same membership toggle
    let mut likes = use_membership();
    let seed = comment.likes.clone();
    use_effect(move || likes.sync(seed.clone()));

    let liked = user_id
        .as_deref()
        .map(|uid| likes.contains(uid))
        .unwrap_or(false);
    let like_id = comment.id.clone();
    let like_user = user_id.clone();
    let mut likes_for_toggle = likes;
    let on_like = move |_| {
        let Some(uid) = like_user.clone() else {
            return;
        };
        let comment_id = like_id.clone();
        let join = {
            let comment_id = comment_id.clone();
            let uid = uid.clone();
            async move { api::posts::like(&comment_id, &uid).await }
        };
        let leave = {
            let uid = uid.clone();
            async move { api::posts::unlike(&comment_id, &uid).await }
        };
        likes_for_toggle.toggle(uid, join, leave);
    };
    let like_label = if liked { "Liked" } else { "Like" };

    rsx! {
        div { class: "comment",
            p { class: "comment-author", "{author_name}" }
            if editing() {
                FormField {
                    label: "Edit comment",
                    value: draft(),
                    multiline: true,
                    oninput: move |evt: FormEvent| draft.set(evt.value()),
                }
                Button { label: "Save", loading: busy(), onclick: on_save }
                Button {
                    label: "Cancel",
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| editing.set(false),
                }
            } else {
                p { "{comment.post_content}" }
            }

            div { class: "comment-actions",
                if user_id.is_some() {
                    button {
                        class: if liked { "link liked" } else { "link" },
                        disabled: likes.is_pending(),
                        onclick: on_like,
                        "{like_label} ({likes.count()})"
                    }
                    button { class: "link", onclick: move |_| replying.set(!replying()), "Reply" }
                }
                if is_author && !editing() {
                    button { class: "link", onclick: move |_| editing.set(true), "Edit" }
                    button { class: "link link-danger", onclick: on_delete, "Delete" }
                }
            }

            if replying() {
                div { class: "reply-composer",
                    FormField {
                        label: "Reply",
                        value: reply(),
                        multiline: true,
                        oninput: move |evt: FormEvent| reply.set(evt.value()),
                    }
                    Button { label: "Send", loading: busy(), onclick: on_reply }
                }
            }

            div { class: "comment-children",
                for child in comment.children.iter().cloned() {
                    CommentItem { comment: child, user_id: user_id.clone(), on_changed }
                }
            }
        }
    }
}
