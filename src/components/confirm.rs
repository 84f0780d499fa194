//! Confirm Dialog
//!
//! Provider for destructive-action confirmation. Pages call
//! [`ConfirmStore::request`] with labels and a callback; the host renders
//! one dialog at a time.

use std::rc::Rc;

use leptos::*;

#[derive(Clone)]
pub struct ConfirmRequest {
    pub title: String,
    pub description: String,
    pub confirm_text: String,
    pub cancel_text: String,
    pub on_confirm: Rc<dyn Fn()>,
}

#[derive(Clone, Copy)]
pub struct ConfirmStore {
    pending: RwSignal<Option<ConfirmRequest>>,
}

impl ConfirmStore {
    pub fn new() -> Self {
        Self {
            pending: create_rw_signal(None),
        }
    }

    pub fn request(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        on_confirm: impl Fn() + 'static,
    ) {
        self.pending.set(Some(ConfirmRequest {
            title: title.into(),
            description: description.into(),
            confirm_text: "Confirm".to_string(),
            cancel_text: "Cancel".to_string(),
            on_confirm: Rc::new(on_confirm),
        }));
    }

    fn resolve(&self, accepted: bool) {
        let request = self.pending.get_untracked();
        self.pending.set(None);
        if accepted {
            if let Some(request) = request {
                (request.on_confirm)();
            }
        }
    }
}

impl Default for ConfirmStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_confirm() {
    provide_context(ConfirmStore::new());
}

pub fn use_confirm() -> ConfirmStore {
    use_context::<ConfirmStore>().expect("ConfirmStore not found")
}

/// Modal host, rendered once at the app root.
#[component]
pub fn ConfirmHost() -> impl IntoView {
    let store = use_confirm();

    view! {
        {move || {
            store.pending.get().map(|request| view! {
                <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/40">
                    <div class="bg-white rounded-xl shadow-xl w-full max-w-md mx-4">
                        <div class="p-6 border-b">
                            <h2 class="text-xl font-semibold text-gray-800">
                                {request.title.clone()}
                            </h2>
                            <p class="text-gray-600 mt-2">{request.description.clone()}</p>
                        </div>
                        <div class="p-4 flex justify-end gap-3">
                            <button
                                class="px-4 py-2 rounded-lg bg-gray-200 text-gray-800 hover:bg-gray-300"
                                on:click=move |_| store.resolve(false)
                            >
                                {request.cancel_text.clone()}
                            </button>
                            <button
                                class="px-4 py-2 rounded-lg bg-blue-600 text-white hover:bg-blue-700"
                                on:click=move |_| store.resolve(true)
                            >
                                {request.confirm_text.clone()}
                            </button>
                        </div>
                    </div>
                </div>
            })
        }}
    }
}
