//! WebSocket Connection Manager
//!
//! Realtime connection to the BadgeUp backend, decoupled from component
//! lifecycle: owners call [`SocketManager::connect`] and
//! [`SocketManager::disconnect`] explicitly. A dropped connection schedules
//! a reconnect with exponential backoff; an explicit disconnect suppresses
//! it. Exactly one live socket per listener type per authenticated tab.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use crate::api::models::ChatMessage;
use crate::config;

const MAX_RECONNECT_ATTEMPTS: u32 = 5;

/// Typed frames the backend emits. The discriminant is the `type` field.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsEvent {
    Notification {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        category: Option<String>,
    },
    ChatMessage {
        message: ChatMessage,
    },
}

/// Decode an inbound frame. `Ok(None)` means a well-formed frame of an
/// unknown type (ignored); `Err` means a malformed payload the caller may
/// surface as a non-fatal toast.
pub fn decode_event(text: &str) -> Result<Option<WsEvent>, String> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| e.to_string())?;
    let kind = value.get("type").and_then(|t| t.as_str()).unwrap_or_default();
    match kind {
        "notification" | "chat_message" => serde_json::from_value::<WsEvent>(value)
            .map(Some)
            .map_err(|e| e.to_string()),
        _ => Ok(None),
    }
}

fn with_token(base: &str, path: &str, token: &str) -> String {
    format!("{}{}?token={}", base, path, token)
}

/// URL of the notifications channel for this session.
pub fn notifications_url(token: &str) -> String {
    with_token(&config::ws_base(), "/ws/notifications/", token)
}

/// URL of the chat channel with `other_id`.
pub fn chat_url(other_id: i64, token: &str) -> String {
    with_token(&config::ws_base(), &format!("/ws/chat/{}/", other_id), token)
}

/// Connection manager for one realtime channel.
#[derive(Clone)]
pub struct SocketManager {
    ws: Rc<RefCell<Option<WebSocket>>>,
    url: String,
    reconnect_attempts: Rc<Cell<u32>>,
    closed: Rc<Cell<bool>>,
    on_event: Rc<dyn Fn(WsEvent)>,
    on_error: Rc<dyn Fn(String)>,
}

impl SocketManager {
    pub fn new(
        url: String,
        on_event: impl Fn(WsEvent) + 'static,
        on_error: impl Fn(String) + 'static,
    ) -> Self {
        Self {
            ws: Rc::new(RefCell::new(None)),
            url,
            reconnect_attempts: Rc::new(Cell::new(0)),
            closed: Rc::new(Cell::new(false)),
            on_event: Rc::new(on_event),
            on_error: Rc::new(on_error),
        }
    }

    /// Open the connection. Reconnects are scheduled from the close handler
    /// until [`SocketManager::disconnect`] is called.
    pub fn connect(&self) {
        self.closed.set(false);
        match WebSocket::new(&self.url) {
            Ok(ws) => {
                self.setup_handlers(&ws);
                *self.ws.borrow_mut() = Some(ws);
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("WebSocket connection failed: {:?}", e).into(),
                );
                self.schedule_reconnect();
            }
        }
    }

    fn setup_handlers(&self, ws: &WebSocket) {
        // On open
        let attempts = Rc::clone(&self.reconnect_attempts);
        let on_open = Closure::wrap(Box::new(move |_: JsValue| {
            web_sys::console::log_1(&"WebSocket connected".into());
            attempts.set(0);
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        on_open.forget();

        // On message
        let on_event = Rc::clone(&self.on_event);
        let on_error_cb = Rc::clone(&self.on_error);
        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            if let Ok(text) = event.data().dyn_into::<js_sys::JsString>() {
                let text: String = text.into();
                match decode_event(&text) {
                    Ok(Some(event)) => on_event(event),
                    Ok(None) => {}
                    Err(e) => {
                        web_sys::console::warn_1(
                            &format!("Dropping malformed frame: {}", e).into(),
                        );
                        on_error_cb(e);
                    }
                }
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        on_message.forget();

        // On close: schedule reconnect unless explicitly disconnected
        let manager = self.clone();
        let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
            web_sys::console::log_1(
                &format!("WebSocket closed: code={}, reason={}", event.code(), event.reason())
                    .into(),
            );
            if !manager.closed.get() {
                manager.schedule_reconnect();
            }
        }) as Box<dyn FnMut(CloseEvent)>);
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));
        on_close.forget();

        // On error
        let on_error = Closure::wrap(Box::new(move |e: JsValue| {
            web_sys::console::error_1(&format!("WebSocket error: {:?}", e).into());
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();
    }

    fn schedule_reconnect(&self) {
        let attempts = self.reconnect_attempts.get();
        if attempts >= MAX_RECONNECT_ATTEMPTS {
            web_sys::console::error_1(&"Max reconnect attempts reached".into());
            return;
        }
        let delay = reconnect_delay_ms(attempts);
        self.reconnect_attempts.set(attempts + 1);

        let manager = self.clone();
        gloo_timers::callback::Timeout::new(delay, move || {
            if !manager.closed.get() {
                web_sys::console::log_1(
                    &format!("Attempting reconnect (attempt {})", manager.reconnect_attempts.get())
                        .into(),
                );
                manager.connect();
            }
        })
        .forget();
    }

    /// Tear the connection down and suppress any pending reconnect.
    pub fn disconnect(&self) {
        self.closed.set(true);
        if let Some(ws) = self.ws.borrow_mut().take() {
            let _ = ws.close();
        }
    }

}

/// Exponential backoff: 1s, 2s, 4s, … capped at 30s.
fn reconnect_delay_ms(attempt: u32) -> u32 {
    (2_u32.pow(attempt) * 1000).min(30_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_notification_frame() {
        let event = decode_event(r#"{"type":"notification","title":"X","message":"Y"}"#)
            .unwrap()
            .unwrap();
        match event {
            WsEvent::Notification { title, message, .. } => {
                assert_eq!(title.as_deref(), Some("X"));
                assert_eq!(message.as_deref(), Some("Y"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_decode_chat_frame() {
        let raw = r#"{"type":"chat_message","message":{"id":9,"sender_id":1,"recipient_id":2,"text":"hola","created_at":"2026-02-01T10:00:00Z"}}"#;
        let event = decode_event(raw).unwrap().unwrap();
        match event {
            WsEvent::ChatMessage { message } => {
                assert_eq!(message.id, 9);
                assert_eq!(message.text.as_deref(), Some("hola"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_is_ignored() {
        assert!(decode_event(r#"{"type":"presence","user":3}"#).unwrap().is_none());
        assert!(decode_event(r#"{"no_type":true}"#).unwrap().is_none());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(decode_event("{oops").is_err());
        // right discriminant, wrong payload shape
        assert!(decode_event(r#"{"type":"chat_message","message":"not an object"}"#).is_err());
    }

    #[test]
    fn test_url_building() {
        assert_eq!(
            with_token("ws://localhost:8000", "/ws/notifications/", "tok"),
            "ws://localhost:8000/ws/notifications/?token=tok"
        );
        assert_eq!(
            with_token("wss://badgeup.example", "/ws/chat/7/", "tok"),
            "wss://badgeup.example/ws/chat/7/?token=tok"
        );
    }

    #[test]
    fn test_backoff_schedule() {
        assert_eq!(reconnect_delay_ms(0), 1000);
        assert_eq!(reconnect_delay_ms(1), 2000);
        assert_eq!(reconnect_delay_ms(4), 16_000);
        assert_eq!(reconnect_delay_ms(10), 30_000);
    }
}
