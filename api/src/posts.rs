//! Feed, post and comment endpoints.
//!
//! Likes are membership edits on a post's `likes` list; comments are posts
//! attached through `children`, so the comment endpoints work for replies at
//! any depth. Creating or editing a post uses multipart when an image asset
//! rides along.

use serde_json::json;

use crate::client::client;
use crate::error::ApiError;
use crate::models::Post;

/// An image picked on the device, ready to upload.
#[derive(Clone, Debug)]
pub struct ImageAsset {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime: String,
}

/// The whole feed, newest first (server-ordered).
pub async fn feed() -> Result<Vec<Post>, ApiError> {
    client().get_json("/api/post/all").await
}

/// One post with its comment tree.
pub async fn get_post(post_id: &str) -> Result<Post, ApiError> {
    client().get_json(&format!("/api/post/get/{post_id}")).await
}

/// Add the acting user to a post's like list.
pub async fn like(post_id: &str, user_id: &str) -> Result<(), ApiError> {
    client()
        .post_unit(&format!("/api/post/like/{post_id}"), &json!({ "userId": user_id }))
        .await
}

/// Remove the acting user from a post's like list.
pub async fn unlike(post_id: &str, user_id: &str) -> Result<(), ApiError> {
    client()
        .post_unit(&format!("/api/post/unlike/{post_id}"), &json!({ "userId": user_id }))
        .await
}

/// Attach a comment to a post or another comment.
pub async fn add_comment(parent_id: &str, author_id: &str, content: &str) -> Result<(), ApiError> {
    client()
        .post_unit(
            &format!("/api/post/comment/{parent_id}"),
            &json!({ "author": author_id, "commentContent": content }),
        )
        .await
}

/// Replace a comment's content.
pub async fn edit_comment(comment_id: &str, content: &str) -> Result<(), ApiError> {
    client()
        .post_unit(
            &format!("/api/post/comment/edit/{comment_id}"),
            &json!({ "post": content }),
        )
        .await
}

/// Delete a post or comment (same endpoint server-side).
pub async fn delete_post(post_id: &str) -> Result<(), ApiError> {
    client().delete(&format!("/api/post/delete/{post_id}")).await
}

fn post_form(
    title: &str,
    content: &str,
    image: Option<ImageAsset>,
) -> Result<reqwest::multipart::Form, ApiError> {
    let mut form = reqwest::multipart::Form::new()
        .text("title", title.to_string())
        .text("postContent", content.to_string());
    if let Some(image) = image {
        let part = reqwest::multipart::Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.mime)?;
        form = form.part("postPhoto", part);
    }
    Ok(form)
}

/// Publish a new post.
pub async fn create_post(
    author_id: &str,
    title: &str,
    content: &str,
    image: Option<ImageAsset>,
) -> Result<(), ApiError> {
    let form = post_form(title, content, image)?.text("author", author_id.to_string());
    client()
        .post_multipart::<serde_json::Value>("/api/post/add", form)
        .await?;
    Ok(())
}

/// Update an existing post; `image` only when the photo changed.
pub async fn edit_post(
    post_id: &str,
    title: &str,
    content: &str,
    image: Option<ImageAsset>,
) -> Result<(), ApiError> {
    let form = post_form(title, content, image)?;
    client()
        .post_multipart::<serde_json::Value>(&format!("/api/post/edit/{post_id}"), form)
        .await?;
    Ok(())
}
