//! REST API Surface
//!
//! One module per resource group, all funneling through the shared client
//! wrapper in [`client`].

pub mod albums;
pub mod auth;
pub mod chat;
pub mod client;
pub mod friends;
pub mod models;
pub mod stickers;
pub mod users;

pub use client::{resolve_media_url, ApiError};
