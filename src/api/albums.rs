//! Album Endpoints

use web_sys::{File, FormData};

use super::client::{self, ApiError};
use super::models::{AlbumDetail, AlbumSummary, MatchPhotoResult};

/// Fields for creating or editing an album. On update, unset fields are left
/// untouched; an empty `price` clears the stored price.
#[derive(Default)]
pub struct AlbumPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub theme: Option<String>,
    pub is_premium: Option<bool>,
    pub price: Option<String>,
    pub cover_image: Option<File>,
}

impl AlbumPayload {
    fn into_form(self) -> FormData {
        let form = FormData::new().unwrap();
        if let Some(title) = self.title {
            let _ = form.append_with_str("title", &title);
        }
        if let Some(description) = self.description {
            let _ = form.append_with_str("description", &description);
        }
        if let Some(theme) = self.theme {
            let _ = form.append_with_str("theme", &theme);
        }
        if let Some(is_premium) = self.is_premium {
            let _ = form.append_with_str("is_premium", if is_premium { "true" } else { "false" });
        }
        if let Some(price) = self.price {
            let _ = form.append_with_str("price", &price);
        }
        if let Some(cover) = self.cover_image {
            let _ = form.append_with_blob("cover_image", &cover);
        }
        form
    }
}

pub async fn list() -> Result<Vec<AlbumSummary>, ApiError> {
    client::get_list("/albums/").await
}

pub async fn get(id: i64) -> Result<AlbumDetail, ApiError> {
    client::get_json(&format!("/albums/{}/", id)).await
}

pub async fn create(payload: AlbumPayload) -> Result<AlbumDetail, ApiError> {
    client::post_form("/albums/", payload.into_form()).await
}

pub async fn update(id: i64, payload: AlbumPayload) -> Result<AlbumDetail, ApiError> {
    client::patch_form(&format!("/albums/{}/", id), payload.into_form()).await
}

/// Submit a photo against an album; the backend decides which sticker (if
/// any) it unlocks.
pub async fn match_photo(album_id: i64, photo: &File) -> Result<MatchPhotoResult, ApiError> {
    let form = FormData::new().unwrap();
    let _ = form.append_with_blob("photo", photo);
    client::post_form(&format!("/albums/{}/match-photo/", album_id), form).await
}
