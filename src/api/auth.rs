//! Authentication & Profile Endpoints

use serde::Serialize;
use web_sys::{File, FormData};

use super::client::{self, ApiError};
use super::models::{ApiUser, LoginResponse};

#[derive(Debug, Clone, Serialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
}

/// Identity claims forwarded from a third-party provider callback.
#[derive(Debug, Clone, Serialize)]
pub struct SocialLoginPayload {
    pub provider: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Fields a user may edit on their own profile.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[derive(Serialize)]
    struct Credentials<'a> {
        username: &'a str,
        password: &'a str,
    }
    client::post_json("/auth/login/", &Credentials { username, password }).await
}

pub async fn register(payload: &RegisterPayload) -> Result<ApiUser, ApiError> {
    client::post_json("/auth/register/", payload).await
}

pub async fn social_login(payload: &SocialLoginPayload) -> Result<LoginResponse, ApiError> {
    client::post_json("/auth/social-login/", payload).await
}

/// Fetch the authenticated profile.
pub async fn me() -> Result<ApiUser, ApiError> {
    client::get_json("/auth/profile/").await
}

pub async fn update_profile(payload: &ProfileUpdate) -> Result<ApiUser, ApiError> {
    client::patch_json("/auth/profile/", payload).await
}

/// Replace the profile avatar (file-bearing, so multipart).
pub async fn update_avatar(avatar: &File) -> Result<ApiUser, ApiError> {
    let form = FormData::new().unwrap();
    let _ = form.append_with_blob("avatar", avatar);
    client::patch_form("/auth/profile/", form).await
}

/// Top users by points. Handles both list shapes the server may return.
pub async fn leaderboard(limit: usize) -> Result<Vec<ApiUser>, ApiError> {
    client::get_list(&format!("/auth/leaderboard/?limit={}", limit)).await
}
