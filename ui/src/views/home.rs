use dioxus::prelude::*;

use crate::components::{EmptyState, Loading};
use crate::{format, use_endpoint};

/// The community feed, newest first. Rows open the post detail screen.
#[component]
pub fn HomeView(on_open_post: EventHandler<String>) -> Element {
    let feed = use_endpoint(|| Some(api::posts::feed()));

    rsx! {
        div { class: "screen",
            header { class: "screen-header",
                h1 { "KickZone" }
                button { class: "link", onclick: move |_| feed.refetch(), "Refresh" }
            }

            if let Some(posts) = feed.data.read().as_ref() {
                if posts.is_empty() {
                    EmptyState { message: "Nothing posted yet" }
                }
                for post in posts.iter().cloned() {
                    PostCard { post, on_open: on_open_post }
                }
            } else if let Some(message) = feed.error.read().as_ref() {
                EmptyState { message: "{message}" }
            } else if *feed.loading.read() {
                Loading {}
            }
        }
    }
}

#[component]
fn PostCard(post: api::Post, on_open: EventHandler<String>) -> Element {
    let author = post
        .author
        .as_ref()
        .map(|a| a.username.clone())
        .unwrap_or_else(|| "unknown".to_string());
    let id = post.id.clone();

    rsx! {
        article { class: "post-card", onclick: move |_| on_open.call(id.clone()),
            if let Some(url) = post.image_url.as_ref() {
                img { class: "post-photo", src: "{url}" }
            }
            h2 { "{post.title}" }
            p { class: "post-excerpt", "{post.post_content}" }
            footer { class: "post-meta",
                span { "by {author}" }
                if let Some(at) = post.created_at {
                    span { "{format::short_date(at)}" }
                }
                span { "{post.likes.len()} likes" }
                span { "{post.children.len()} comments" }
            }
        }
    }
}
