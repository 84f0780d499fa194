//! Public Profile & Admin Endpoints

use serde::Serialize;

use super::client::{self, ApiError};
use super::models::ApiUser;

/// Staff-only edits on another user's account.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_avatar: Option<bool>,
}

pub async fn profile(id: i64) -> Result<ApiUser, ApiError> {
    client::get_json(&format!("/auth/users/{}/", id)).await
}

pub async fn admin_update(id: i64, payload: &AdminUserUpdate) -> Result<ApiUser, ApiError> {
    client::patch_json(&format!("/auth/users/{}/admin/", id), payload).await
}

pub async fn admin_delete(id: i64) -> Result<(), ApiError> {
    client::delete(&format!("/auth/users/{}/admin/delete/", id)).await
}
