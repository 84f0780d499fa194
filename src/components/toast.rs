//! Toast Notifications
//!
//! Queue provider plus the fixed-position host that renders it. Pages get
//! the store from context and call `success`/`error`/`info`.

use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn classes(self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-600",
            ToastKind::Error => "bg-red-600",
            ToastKind::Info => "bg-blue-600",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Toast queue provided to the component tree.
#[derive(Clone, Copy)]
pub struct ToastStore {
    entries: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastStore {
    pub fn new() -> Self {
        Self {
            entries: create_rw_signal(Vec::new()),
            next_id: create_rw_signal(0),
        }
    }

    /// Queue a message; it dismisses itself after `duration_ms`.
    pub fn add(&self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.entries.update(|entries| {
            entries.push(ToastEntry { id, message: message.into(), kind })
        });

        let entries = self.entries;
        gloo_timers::callback::Timeout::new(duration_ms, move || {
            let _ = entries.try_update(|entries| entries.retain(|t| t.id != id));
        })
        .forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(message, ToastKind::Success, 3000);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(message, ToastKind::Error, 5000);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.add(message, ToastKind::Info, 4000);
    }

    pub fn dismiss(&self, id: u64) {
        self.entries.update(|entries| entries.retain(|t| t.id != id));
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() {
    provide_context(ToastStore::new());
}

pub fn use_toasts() -> ToastStore {
    use_context::<ToastStore>().expect("ToastStore not found")
}

/// Fixed-position toast container
#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_toasts();

    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2 w-80 max-w-[90vw]">
            <For
                each=move || store.entries.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!(
                            "flex items-start justify-between {} text-white px-4 py-3 \
                             rounded-lg shadow-lg",
                            toast.kind.classes()
                        )>
                            <div class="flex items-center space-x-3 pr-2">
                                <span class="text-lg">{toast.kind.icon()}</span>
                                <span class="text-sm font-medium">{toast.message.clone()}</span>
                            </div>
                            <button
                                class="ml-3 text-white/80 hover:text-white"
                                on:click=move |_| store.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_styling() {
        assert_eq!(ToastKind::Success.classes(), "bg-green-600");
        assert_eq!(ToastKind::Error.icon(), "✕");
    }
}
