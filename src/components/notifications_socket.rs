//! Notifications Socket
//!
//! Mounts the notifications channel for the lifetime of the session: the
//! socket opens when a token appears, is replaced when the token changes
//! and torn down on logout or unmount. Received events land in the capped
//! buffer and as a transient toast.

use leptos::*;

use crate::components::toast::use_toasts;
use crate::state::notifications::use_notifications;
use crate::state::use_session;
use crate::state::websocket::{notifications_url, SocketManager, WsEvent};

/// Invisible component owning the notifications connection.
#[component]
pub fn NotificationsSocket() -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();
    let toasts = use_toasts();
    let token = session.token;

    let active = store_value::<Option<SocketManager>>(None);

    create_effect(move |_| {
        // one live socket per tab: drop the previous one on token change
        if let Some(manager) = active.get_value() {
            manager.disconnect();
            active.set_value(None);
        }

        let Some(token) = token.get() else {
            return;
        };

        let manager = SocketManager::new(
            notifications_url(&token),
            move |event| {
                if let WsEvent::Notification { title, message, category } = event {
                    let title = title.unwrap_or_else(|| "Notification".to_string());
                    let message = message.unwrap_or_default();
                    toasts.success(format!("{}: {}", title, message));
                    notifications.push(title, message, category);
                }
            },
            move |_| {
                toasts.info("Received an unreadable notification.");
            },
        );
        manager.connect();
        active.set_value(Some(manager));
    });

    on_cleanup(move || {
        if let Some(manager) = active.get_value() {
            manager.disconnect();
        }
    });

    view! {}
}
