//! API Record Types
//!
//! Serde mirrors of the server's response shapes. The client never derives
//! state of its own beyond the displayed-points fallback on [`ApiUser`].

use serde::{Deserialize, Serialize};

/// Authenticated or public user record
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub points: i64,
    /// Leaderboard responses annotate live totals under this field.
    #[serde(default)]
    pub computed_points: Option<i64>,
    #[serde(default)]
    pub date_joined: Option<String>,
    #[serde(default)]
    pub is_staff: bool,
}

impl ApiUser {
    /// Points to display: the annotated total when present, the stored
    /// counter otherwise.
    pub fn display_points(&self) -> i64 {
        self.computed_points.unwrap_or(self.points)
    }

    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// Album as returned by the list endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub stickers_count: i64,
}

/// Album detail: summary plus its ordered stickers
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlbumDetail {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub stickers_count: i64,
    #[serde(default)]
    pub stickers: Vec<Sticker>,
}

/// Collectible sticker inside an album
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    pub id: i64,
    pub album: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location_lat: Option<String>,
    #[serde(default)]
    pub location_lng: Option<String>,
    #[serde(default)]
    pub image_reference: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub reward_points: i64,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub is_unlocked: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub unlocked_photo_url: Option<String>,
    #[serde(default)]
    pub unlocked_at: Option<String>,
    #[serde(default)]
    pub fun_fact: Option<String>,
    #[serde(default)]
    pub user_message: Option<String>,
}

impl Sticker {
    /// A sticker is locked only when the server says so explicitly.
    pub fn is_locked(&self) -> bool {
        self.is_unlocked == Some(false)
    }
}

/// Receipt for an unlock submission
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSticker {
    pub id: i64,
    pub sticker: i64,
    #[serde(default)]
    pub album: Option<i64>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub validated: bool,
    #[serde(default)]
    pub validation_notes: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Community member (public user plus the relation to the viewer)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub computed_points: Option<i64>,
    /// `none`, `pending_sent`, `pending_received` or `friends`
    #[serde(default)]
    pub relation: Option<String>,
    /// The friend request backing the relation, when one exists.
    #[serde(default)]
    pub request_id: Option<i64>,
}

impl Member {
    pub fn display_points(&self) -> i64 {
        self.computed_points.unwrap_or(self.points)
    }
}

/// Friend request lifecycle states, inferred from the action endpoints.
pub mod request_status {
    pub const PENDING: &str = "pending";
    pub const ACCEPTED: &str = "accepted";
    pub const REJECTED: &str = "rejected";
    pub const CANCELLED: &str = "cancelled";
}

/// Friend request between two users
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FriendRequest {
    pub id: i64,
    pub from_user: Member,
    pub to_user: Member,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub responded_at: Option<String>,
}

/// Chat message between two friends
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub sender_id: i64,
    pub recipient_id: i64,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    pub created_at: String,
}

/// Geo-point of an unlocked sticker, for the captures map
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StickerLocation {
    pub sticker_id: i64,
    pub sticker_name: String,
    #[serde(default)]
    pub album_id: Option<i64>,
    #[serde(default)]
    pub album_title: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub location_lat: Option<String>,
    #[serde(default)]
    pub location_lng: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub unlocked_at: Option<String>,
}

/// One entry of the viewer's capture history, for the calendar
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StickerHistoryItem {
    pub id: i64,
    pub sticker: i64,
    #[serde(default)]
    pub sticker_name: Option<String>,
    #[serde(default)]
    pub album: Option<i64>,
    #[serde(default)]
    pub album_title: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub unlocked_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Detected subject of a match-photo submission
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedCar {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub generation: Option<String>,
    #[serde(default)]
    pub year_range: Option<String>,
}

/// Outcome of submitting a photo against an album
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchPhotoResult {
    #[serde(default)]
    pub unlocked: bool,
    #[serde(default)]
    pub already_unlocked: bool,
    #[serde(default)]
    pub sticker: Option<Sticker>,
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub car: Option<DetectedCar>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub fun_fact: Option<String>,
}

/// Successful login/social-login payload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: ApiUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_points_prefers_computed() {
        let mut user: ApiUser = serde_json::from_value(serde_json::json!({
            "id": 1, "username": "ana", "points": 10
        }))
        .unwrap();
        assert_eq!(user.display_points(), 10);
        user.computed_points = Some(25);
        assert_eq!(user.display_points(), 25);
    }

    #[test]
    fn test_sticker_lock_only_when_explicit() {
        let sticker: Sticker = serde_json::from_value(serde_json::json!({
            "id": 4, "album": 1, "name": "GT-R"
        }))
        .unwrap();
        assert!(!sticker.is_locked());

        let locked: Sticker = serde_json::from_value(serde_json::json!({
            "id": 4, "album": 1, "name": "GT-R", "is_unlocked": false
        }))
        .unwrap();
        assert!(locked.is_locked());
    }

    #[test]
    fn test_match_result_tolerates_minimal_payload() {
        let result: MatchPhotoResult =
            serde_json::from_value(serde_json::json!({ "unlocked": false, "reason": "no_match" }))
                .unwrap();
        assert!(!result.unlocked);
        assert_eq!(result.reason.as_deref(), Some("no_match"));
        assert!(result.sticker.is_none());
    }
}
