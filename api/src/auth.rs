//! Authentication and account endpoints.
//!
//! Sign-in is the one place the client cares about individual statuses: the
//! backend answers 403 for a wrong password and 405 with a ban payload for a
//! suspended account, both of which are outcomes rather than errors. The
//! session token arrives in a `set-cookie` header as `access_token=...` and is
//! persisted through the encrypted store on success.

use serde::Serialize;
use serde_json::json;

use crate::client::client;
use crate::error::ApiError;
use crate::models::{BanInfo, Exists, User};
use crate::token;

/// Outcome of a sign-in attempt. Transport and unexpected-status failures are
/// `ApiError`s instead.
#[derive(Clone, Debug, PartialEq)]
pub enum SignIn {
    /// Signed in; the token has been persisted.
    Success { user: User, token: String },
    /// HTTP 403: wrong credentials.
    InvalidPassword,
    /// HTTP 405: account suspended, render the ban details.
    Banned(BanInfo),
}

/// Whether an account exists for this email.
pub async fn check_email(email: &str) -> Result<bool, ApiError> {
    let path = format!("/api/auth/check-email?email={}", urlencoding::encode(email));
    let exists: Exists = client().get_json(&path).await?;
    Ok(exists.exists)
}

/// Whether a username is already taken.
pub async fn check_username(username: &str) -> Result<bool, ApiError> {
    let path = format!(
        "/api/auth/check-username?username={}",
        urlencoding::encode(username)
    );
    let exists: Exists = client().get_json(&path).await?;
    Ok(exists.exists)
}

/// Attempt to sign in. On success the bearer token is stored before returning.
pub async fn sign_in(email: &str, password: &str) -> Result<SignIn, ApiError> {
    let response = client()
        .post_raw("/api/auth/signin", &json!({ "email": email, "password": password }))
        .await?;

    let status = response.status().as_u16();
    let set_cookie = response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.text().await?;

    let outcome = classify_sign_in(status, &body, set_cookie.as_deref())?;
    if let SignIn::Success { token, .. } = &outcome {
        token::save(token)?;
    }
    Ok(outcome)
}

/// Map a sign-in response to its outcome. 2xx must carry an `access_token`
/// cookie and a user body; 403 and 405 are application outcomes; everything
/// else is a plain status error.
fn classify_sign_in(status: u16, body: &str, set_cookie: Option<&str>) -> Result<SignIn, ApiError> {
    match status {
        403 => Ok(SignIn::InvalidPassword),
        405 => {
            #[derive(serde::Deserialize)]
            #[serde(rename_all = "camelCase")]
            struct BanBody {
                ban_info: BanInfo,
            }
            let ban: BanBody = serde_json::from_str(body).map_err(|source| ApiError::Decode {
                endpoint: "/api/auth/signin".to_string(),
                source,
            })?;
            Ok(SignIn::Banned(ban.ban_info))
        }
        s if (200..300).contains(&s) => {
            let token = set_cookie
                .and_then(extract_access_token)
                .ok_or_else(|| ApiError::Token("no access token in sign-in response".to_string()))?;
            let user: User = serde_json::from_str(body).map_err(|source| ApiError::Decode {
                endpoint: "/api/auth/signin".to_string(),
                source,
            })?;
            Ok(SignIn::Success { user, token })
        }
        s => Err(ApiError::Status {
            status: s,
            message: crate::client::extract_message(body),
        }),
    }
}

/// Pull the `access_token` value out of a `set-cookie` header.
fn extract_access_token(cookie: &str) -> Option<String> {
    cookie.split(';').find_map(|part| {
        let (name, value) = part.trim().split_once('=')?;
        (name == "access_token" && !value.is_empty()).then(|| value.to_string())
    })
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Create an account. The caller routes to sign-in afterwards.
pub async fn sign_up(username: &str, email: &str, password: &str) -> Result<(), ApiError> {
    client()
        .post_unit(
            "/api/auth/signup",
            &SignUpBody {
                username,
                email,
                password,
            },
        )
        .await
}

/// Submit the first-login profile (username, bio, wanted role).
pub async fn complete_onboarding(
    user_id: &str,
    username: &str,
    bio: &str,
    wanted_role: &str,
) -> Result<(), ApiError> {
    client()
        .post_unit(
            "/api/auth/complete-onboarding",
            &json!({
                "userId": user_id,
                "username": username,
                "bio": bio,
                "wantedRole": wanted_role,
            }),
        )
        .await
}

/// Fetch a user document by id.
pub async fn get_user(user_id: &str) -> Result<User, ApiError> {
    let path = format!("/api/user/get?userId={}", urlencoding::encode(user_id));
    client().get_json(&path).await
}

/// Sign out: tell the server, then drop the local token either way. A dead
/// network must not leave the device signed in.
pub async fn sign_out() -> Result<(), ApiError> {
    let result = client().post_unit("/api/auth/signout", &json!({})).await;
    if let Err(e) = &result {
        tracing::warn!("server sign-out failed, clearing local token anyway: {e}");
    }
    token::clear()?;
    result.or(Ok(()))
}

/// Change the account password.
pub async fn change_password(
    user_id: &str,
    current_password: &str,
    new_password: &str,
) -> Result<(), ApiError> {
    client()
        .post_unit(
            &format!("/api/user/change-password/{user_id}"),
            &json!({
                "currentPassword": current_password,
                "newPassword": new_password,
            }),
        )
        .await
}

/// Permanently delete the account, then drop the local token.
pub async fn delete_account(user_id: &str) -> Result<(), ApiError> {
    client().delete(&format!("/api/user/delete/{user_id}")).await?;
    token::clear()
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_BODY: &str = r#"{"_id": "u1", "username": "alice", "isOnboardingCompleted": true}"#;

    #[test]
    fn extracts_token_from_cookie() {
        assert_eq!(
            extract_access_token("access_token=abc123; Path=/; HttpOnly").as_deref(),
            Some("abc123")
        );
        assert_eq!(
            extract_access_token("theme=dark; access_token=xyz").as_deref(),
            Some("xyz")
        );
        assert_eq!(extract_access_token("session=other"), None);
        assert_eq!(extract_access_token("access_token="), None);
    }

    #[test]
    fn ok_with_cookie_is_success() {
        let outcome =
            classify_sign_in(200, USER_BODY, Some("access_token=tok; HttpOnly")).unwrap();
        match outcome {
            SignIn::Success { user, token } => {
                assert_eq!(user.id, "u1");
                assert!(user.is_onboarding_completed);
                assert_eq!(token, "tok");
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn ok_without_cookie_is_a_token_error() {
        let err = classify_sign_in(200, USER_BODY, None).unwrap_err();
        assert!(matches!(err, ApiError::Token(_)));
    }

    #[test]
    fn forbidden_is_invalid_password() {
        let outcome = classify_sign_in(403, "", None).unwrap();
        assert_eq!(outcome, SignIn::InvalidPassword);
    }

    #[test]
    fn method_not_allowed_carries_ban_info() {
        let body = r#"{"banInfo": {"reason": "spam", "endDate": "2026-09-01T00:00:00Z"}}"#;
        match classify_sign_in(405, body, None).unwrap() {
            SignIn::Banned(ban) => assert_eq!(ban.reason, "spam"),
            other => panic!("expected ban, got {other:?}"),
        }
    }

    #[test]
    fn other_statuses_are_errors() {
        let err = classify_sign_in(500, r#"{"message": "boom"}"#, None).unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
