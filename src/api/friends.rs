//! Friends & Friend-Request Endpoints
//!
//! The request lifecycle (`pending → accepted | rejected | cancelled`) lives
//! entirely on the server; this module only triggers transitions.

use serde::Serialize;

use super::client::{self, ApiError};
use super::models::{FriendRequest, Member};

/// Accepted friends of the viewer.
pub async fn friends() -> Result<Vec<Member>, ApiError> {
    client::get_list("/friends/").await
}

/// All community members, annotated with the relation to the viewer.
pub async fn members() -> Result<Vec<Member>, ApiError> {
    client::get_list("/friends/members/").await
}

/// Pending requests involving the viewer, both directions.
pub async fn requests() -> Result<Vec<FriendRequest>, ApiError> {
    client::get_list("/friends/requests/").await
}

pub async fn send_request(to_user: i64) -> Result<FriendRequest, ApiError> {
    #[derive(Serialize)]
    struct NewRequest {
        to_user: i64,
    }
    client::post_json("/friends/requests/", &NewRequest { to_user }).await
}

pub async fn accept(request_id: i64) -> Result<FriendRequest, ApiError> {
    client::post_empty(&format!("/friends/requests/{}/accept/", request_id)).await
}

pub async fn reject(request_id: i64) -> Result<FriendRequest, ApiError> {
    client::post_empty(&format!("/friends/requests/{}/reject/", request_id)).await
}

/// Withdraw an outgoing request. 204 on success.
pub async fn cancel(request_id: i64) -> Result<(), ApiError> {
    client::post_no_content(&format!("/friends/requests/{}/cancel/", request_id)).await
}

/// Dissolve an accepted friendship. 204 on success.
pub async fn remove(request_id: i64) -> Result<(), ApiError> {
    client::post_no_content(&format!("/friends/{}/remove/", request_id)).await
}
