//! Chat Page
//!
//! Conversation with one friend: REST history (reversed to chronological by
//! the API layer) plus a per-conversation socket appending live messages.
//! New messages auto-scroll the transcript to the bottom.

use leptos::html::Div;
use leptos::*;
use wasm_bindgen::JsCast;

use leptos_router::use_params_map;

use crate::api::models::ChatMessage;
use crate::api::{chat, resolve_media_url};
use crate::components::{use_toasts, Loading};
use crate::state::use_session;
use crate::state::websocket::{chat_url, SocketManager, WsEvent};

const HISTORY_LIMIT: usize = 100;

/// Append a live message unless the REST echo already delivered it.
fn append_unique(messages: &mut Vec<ChatMessage>, message: ChatMessage) {
    if messages.iter().all(|m| m.id != message.id) {
        messages.push(message);
    }
}

/// Chat page component
#[component]
pub fn ChatPage() -> impl IntoView {
    let params = use_params_map();
    let other_id = move || {
        params.with(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()))
    };

    let session = use_session();
    let toasts = use_toasts();
    let user = session.user;
    let token = session.token;
    let viewer_id = move || user.get().map(|u| u.id).unwrap_or_default();

    let messages: RwSignal<Vec<ChatMessage>> = create_rw_signal(Vec::new());
    let (loading, set_loading) = create_signal(true);
    let (text, set_text) = create_signal(String::new());
    let file: RwSignal<Option<web_sys::File>> = create_rw_signal(None);
    let bottom_ref: NodeRef<Div> = create_node_ref();

    let scroll_to_bottom = move || {
        if let Some(node) = bottom_ref.get_untracked() {
            node.scroll_into_view();
        }
    };

    // Initial history load
    let session_for_load = session.clone();
    create_effect(move |_| {
        let Some(id) = other_id() else { return };
        set_loading.set(true);
        let session = session_for_load.clone();
        spawn_local(async move {
            match chat::list(id, HISTORY_LIMIT).await {
                Ok(history) => {
                    let _ = messages.try_set(history);
                    scroll_to_bottom();
                }
                Err(e) if e.is_auth_failure() => {
                    // invalid token: drop the session, the gate redirects
                    session.logout();
                }
                Err(_) => {
                    toasts.error("Couldn't load the chat.");
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    // Live socket, one per conversation; replaced when the token or the
    // conversation changes.
    let active = store_value::<Option<SocketManager>>(None);
    create_effect(move |_| {
        if let Some(manager) = active.get_value() {
            manager.disconnect();
            active.set_value(None);
        }
        let (Some(id), Some(token)) = (other_id(), token.get()) else {
            return;
        };
        let manager = SocketManager::new(
            chat_url(id, &token),
            move |event| {
                if let WsEvent::ChatMessage { message } = event {
                    let _ = messages.try_update(|all| append_unique(all, message));
                    scroll_to_bottom();
                }
            },
            move |_| {
                toasts.info("Dropped an unreadable chat frame.");
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

    let on_file = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        file.set(input.files().and_then(|files| files.get(0)));
    };

    let on_send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = other_id() else { return };
        let body = text.get_untracked().trim().to_string();
        let attachment = file.get_untracked();
        if body.is_empty() && attachment.is_none() {
            return;
        }
        spawn_local(async move {
            match chat::send(id, &body, attachment.as_ref()).await {
                Ok(message) => {
                    set_text.set(String::new());
                    file.set(None);
                    // the socket usually echoes this back first
                    let _ = messages.try_update(|all| append_unique(all, message));
                    scroll_to_bottom();
                }
                Err(_) => {
                    toasts.error("Couldn't send the message.");
                }
            }
        });
    };

    view! {
        <div class="flex-1 w-full max-w-4xl mx-auto p-6">
            <div class="bg-white rounded-2xl shadow-md flex flex-col h-[80vh] overflow-hidden">
                <div class="px-6 py-4 border-b">
                    <h1 class="text-xl font-semibold text-gray-900">"Chat"</h1>
                    <p class="text-xs text-gray-500">"Real-time messages between friends."</p>
                </div>

                <div class="flex-1 overflow-y-auto px-4 py-3 space-y-2">
                    {move || {
                        if loading.get() {
                            view! { <Loading /> }.into_view()
                        } else if messages.get().is_empty() {
                            view! {
                                <p class="text-gray-500">"No messages yet. Send the first one!"</p>
                            }.into_view()
                        } else {
                            let mine = viewer_id();
                            messages.get().into_iter().map(|message| {
                                let is_mine = message.sender_id == mine;
                                view! { <MessageBubble message=message is_mine=is_mine /> }
                            }).collect_view()
                        }
                    }}
                    <div node_ref=bottom_ref />
                </div>

                <form class="border-t px-4 py-3 flex items-center gap-3" on:submit=on_send>
                    <input
                        type="text"
                        prop:value=move || text.get()
                        on:input=move |ev| set_text.set(event_target_value(&ev))
                        placeholder="Write a message..."
                        class="flex-1 px-4 py-2 rounded-full border bg-gray-50 text-sm
                               focus:outline-none focus:ring-2 focus:ring-blue-500"
                    />
                    <label class="text-sm text-gray-700 cursor-pointer px-3 py-2 rounded-lg
                                  bg-gray-200 hover:bg-gray-300">
                        {move || if file.get().is_some() { "📎 1" } else { "Attach" }}
                        <input type="file" class="hidden" on:change=on_file />
                    </label>
                    <button
                        type="submit"
                        class="px-4 py-2 bg-blue-600 text-white rounded-lg text-sm
                               hover:bg-blue-700 disabled:opacity-50"
                        disabled=move || text.get().trim().is_empty() && file.get().is_none()
                    >
                        "Send"
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn MessageBubble(message: ChatMessage, is_mine: bool) -> impl IntoView {
    let bubble = if is_mine {
        "bg-blue-600 text-white"
    } else {
        "bg-gray-100 text-gray-800"
    };
    let attachment = resolve_media_url(message.file_url.as_deref());

    view! {
        <div class=format!("flex {}", if is_mine { "justify-end" } else { "justify-start" })>
            <div class=format!("max-w-[75%] rounded-2xl px-4 py-2 shadow text-sm {}", bubble)>
                {message.text.clone().filter(|t| !t.is_empty()).map(|text| view! {
                    <p class="whitespace-pre-wrap">{text}</p>
                })}
                {attachment.map(|href| view! {
                    <a
                        href=href
                        target="_blank"
                        rel="noreferrer"
                        class=format!(
                            "underline text-xs block mt-1 {}",
                            if is_mine { "text-blue-100" } else { "text-blue-700" }
                        )
                    >
                        "Attachment"
                    </a>
                })}
                <span class=format!(
                    "text-[10px] mt-1 block {}",
                    if is_mine { "text-blue-100" } else { "text-gray-500" }
                )>
                    {message.created_at.clone()}
                </span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(id: i64) -> ChatMessage {
        ChatMessage {
            id,
            sender_id: 1,
            recipient_id: 2,
            text: Some("hola".into()),
            file_url: None,
            created_at: "2026-02-01T10:00:00Z".into(),
        }
    }

    #[test]
    fn test_append_unique_dedupes_socket_echo() {
        let mut all = vec![msg(1), msg(2)];
        append_unique(&mut all, msg(2));
        assert_eq!(all.len(), 2);
        append_unique(&mut all, msg(3));
        assert_eq!(all.len(), 3);
        assert_eq!(all.last().unwrap().id, 3);
    }
}
