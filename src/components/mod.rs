//! UI Components
//!
//! Reusable Leptos components and the toast/confirm providers.

pub mod album_card;
pub mod confirm;
pub mod loading;
pub mod navbar;
pub mod notifications_socket;
pub mod protected;
pub mod toast;

pub use album_card::AlbumCard;
pub use confirm::{provide_confirm, use_confirm, ConfirmHost};
pub use loading::{CardSkeleton, ListSkeleton, Loading};
pub use navbar::Navbar;
pub use notifications_socket::NotificationsSocket;
pub use protected::ProtectedLayout;
pub use toast::{provide_toasts, use_toasts, ToastHost};
