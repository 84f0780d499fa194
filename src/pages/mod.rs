//! Pages
//!
//! Top-level page components for each route.

pub mod album_detail;
pub mod album_form;
pub mod albums;
pub mod calendar;
pub mod chat;
pub mod friends;
pub mod home;
pub mod login;
pub mod map;
pub mod notifications;
pub mod profile;
pub mod profile_edit;
pub mod ranking;
pub mod register;
pub mod social_callback;
pub mod sticker_detail;
pub mod unlock;
pub mod user_profile;

pub use album_detail::AlbumDetailPage;
pub use album_form::{AlbumCreatePage, AlbumEditPage};
pub use albums::AlbumsPage;
pub use calendar::CalendarPage;
pub use chat::ChatPage;
pub use friends::FriendsPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use map::MapPage;
pub use notifications::NotificationsPage;
pub use profile::ProfilePage;
pub use profile_edit::ProfileEditPage;
pub use ranking::RankingPage;
pub use register::RegisterPage;
pub use social_callback::SocialCallbackPage;
pub use sticker_detail::StickerDetailPage;
pub use unlock::UnlockPage;
pub use user_profile::UserProfilePage;
