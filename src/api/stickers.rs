//! Sticker Endpoints

use serde::Serialize;
use web_sys::{File, FormData};

use super::client::{self, ApiError};
use super::models::{Sticker, StickerHistoryItem, StickerLocation, UserSticker};

/// Fields for creating or editing a sticker. The artwork travels under
/// `image_reference`; it is required on create, optional on update.
#[derive(Default)]
pub struct StickerPayload {
    pub album: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub reward_points: Option<i64>,
    pub order: Option<i64>,
    pub rarity: Option<String>,
    pub image: Option<File>,
}

impl StickerPayload {
    fn into_form(self) -> FormData {
        let form = FormData::new().unwrap();
        if let Some(album) = self.album {
            let _ = form.append_with_str("album", &album.to_string());
        }
        if let Some(name) = self.name {
            let _ = form.append_with_str("name", &name);
        }
        if let Some(description) = self.description {
            let _ = form.append_with_str("description", &description);
        }
        if let Some(points) = self.reward_points {
            let _ = form.append_with_str("reward_points", &points.to_string());
        }
        if let Some(order) = self.order {
            let _ = form.append_with_str("order", &order.to_string());
        }
        if let Some(rarity) = self.rarity {
            let _ = form.append_with_str("rarity", &rarity);
        }
        if let Some(image) = self.image {
            let _ = form.append_with_blob("image_reference", &image);
        }
        form
    }
}

pub async fn list_by_album(album_id: i64) -> Result<Vec<Sticker>, ApiError> {
    client::get_list(&format!("/stickers/?album={}", album_id)).await
}

pub async fn get(id: i64) -> Result<Sticker, ApiError> {
    client::get_json(&format!("/stickers/{}/", id)).await
}

pub async fn create(payload: StickerPayload) -> Result<Sticker, ApiError> {
    client::post_form("/stickers/", payload.into_form()).await
}

pub async fn update(id: i64, payload: StickerPayload) -> Result<Sticker, ApiError> {
    client::patch_form(&format!("/stickers/{}/", id), payload.into_form()).await
}

/// Submit an unlock attempt with a photo and an optional comment.
pub async fn unlock(
    id: i64,
    photo: &File,
    comment: Option<&str>,
) -> Result<UserSticker, ApiError> {
    let form = FormData::new().unwrap();
    let _ = form.append_with_blob("photo", photo);
    if let Some(comment) = comment {
        if !comment.is_empty() {
            let _ = form.append_with_str("comment", comment);
        }
    }
    client::post_form(&format!("/stickers/{}/unlock/", id), form).await
}

/// Attach a personal message to an unlocked sticker.
pub async fn set_message(id: i64, text: &str) -> Result<UserSticker, ApiError> {
    #[derive(Serialize)]
    struct MessagePayload<'a> {
        user_message: &'a str,
    }
    client::post_json(
        &format!("/stickers/{}/message/", id),
        &MessagePayload { user_message: text },
    )
    .await
}

/// Geo-points of the viewer's unlocked stickers, for the captures map.
pub async fn locations() -> Result<Vec<StickerLocation>, ApiError> {
    client::get_list("/stickers/locations/").await
}

/// Capture history, newest first, for the calendar view.
pub async fn history() -> Result<Vec<StickerHistoryItem>, ApiError> {
    client::get_list("/captures/history/").await
}
