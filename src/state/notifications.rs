//! Notification Buffer
//!
//! Ephemeral events synthesized from WebSocket payloads. Nothing here is
//! persisted; the buffer keeps only the most recent entries.

use leptos::*;

/// Most-recent events kept in memory; older ones are dropped.
pub const MAX_EVENTS: usize = 50;

/// One received notification.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationEvent {
    pub title: String,
    pub message: String,
    pub category: Option<String>,
    pub received_at: chrono::DateTime<chrono::Utc>,
}

/// Prepend `event`, dropping the oldest entries past [`MAX_EVENTS`].
pub fn push_capped(events: &mut Vec<NotificationEvent>, event: NotificationEvent) {
    events.insert(0, event);
    events.truncate(MAX_EVENTS);
}

/// Reactive notification state provided to the component tree.
#[derive(Clone, Copy)]
pub struct Notifications {
    pub events: RwSignal<Vec<NotificationEvent>>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            events: create_rw_signal(Vec::new()),
        }
    }

    pub fn push(&self, title: String, message: String, category: Option<String>) {
        let event = NotificationEvent {
            title,
            message,
            category,
            received_at: chrono::Utc::now(),
        };
        self.events.update(|events| push_capped(events, event));
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notifications() {
    provide_context(Notifications::new());
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(title: &str) -> NotificationEvent {
        NotificationEvent {
            title: title.to_string(),
            message: "m".to_string(),
            category: None,
            received_at: chrono::DateTime::from_timestamp(0, 0).unwrap(),
        }
    }

    #[test]
    fn test_newest_first() {
        let mut events = Vec::new();
        push_capped(&mut events, event("a"));
        push_capped(&mut events, event("b"));
        assert_eq!(events[0].title, "b");
        assert_eq!(events[1].title, "a");
    }

    #[test]
    fn test_buffer_caps_at_fifty() {
        let mut events = Vec::new();
        for i in 0..55 {
            push_capped(&mut events, event(&format!("n{}", i)));
        }
        assert_eq!(events.len(), MAX_EVENTS);
        // newest kept, oldest five dropped
        assert_eq!(events[0].title, "n54");
        assert_eq!(events.last().unwrap().title, "n5");
    }
}
