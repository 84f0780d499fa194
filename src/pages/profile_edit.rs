//! Profile Edit Page
//!
//! Validated edits to the viewer's own profile. Text fields go out as a
//! JSON patch; a chosen avatar goes out as multipart. The refreshed profile
//! is merged back into the session.

use leptos::*;
use leptos_router::*;
use validator::Validate;
use wasm_bindgen::JsCast;

use crate::api::auth::{self, ProfileUpdate};
use crate::components::use_toasts;
use crate::state::session::StoredSession;
use crate::state::use_session;
use crate::validation::{first_error, ProfileInput};

/// Profile edit page component
#[component]
pub fn ProfileEditPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    // the protected gate guarantees a user; default only for safety
    let current = session.user.get_untracked().unwrap_or_default();

    let (first_name, set_first_name) = create_signal(current.first_name.clone());
    let (last_name, set_last_name) = create_signal(current.last_name.clone());
    let (bio, set_bio) = create_signal(current.bio.clone());
    let avatar: RwSignal<Option<web_sys::File>> = create_rw_signal(None);
    let (saving, set_saving) = create_signal(false);

    let on_avatar = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        avatar.set(input.files().and_then(|files| files.get(0)));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let input = ProfileInput {
            first_name: first_name.get(),
            last_name: last_name.get(),
            bio: bio.get(),
        };
        if let Err(errors) = input.validate() {
            toasts.error(first_error(&errors));
            return;
        }

        set_saving.set(true);
        let session = session.clone();
        let navigate = navigate.clone();
        let chosen_avatar = avatar.get_untracked();
        spawn_local(async move {
            let patch = ProfileUpdate {
                first_name: Some(input.first_name),
                last_name: Some(input.last_name),
                bio: Some(input.bio),
            };
            let result = match auth::update_profile(&patch).await {
                Ok(user) => match chosen_avatar {
                    Some(file) => auth::update_avatar(&file).await,
                    None => Ok(user),
                },
                Err(e) => Err(e),
            };
            match result {
                Ok(user) => {
                    session.set_auth(StoredSession {
                        token: session.token.get_untracked(),
                        refresh_token: session.refresh_token.get_untracked(),
                        user: Some(user),
                    });
                    toasts.success("Profile updated");
                    navigate("/app/profile", Default::default());
                }
                Err(e) => {
                    toasts.error(e.to_string());
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="flex-1 p-10 max-w-2xl mx-auto w-full">
            <h1 class="text-3xl font-semibold text-gray-800 mb-8">"Edit profile"</h1>

            <form on:submit=on_submit class="bg-white rounded-2xl shadow-md p-6 space-y-4">
                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm text-gray-500 mb-2">"First name"</label>
                        <input
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| set_first_name.set(event_target_value(&ev))
                            class="w-full bg-gray-50 rounded-lg px-4 py-3 border border-gray-300
                                   focus:border-blue-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-500 mb-2">"Last name"</label>
                        <input
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| set_last_name.set(event_target_value(&ev))
                            class="w-full bg-gray-50 rounded-lg px-4 py-3 border border-gray-300
                                   focus:border-blue-500 focus:outline-none"
                        />
                    </div>
                </div>

                <div>
                    <label class="block text-sm text-gray-500 mb-2">"Bio"</label>
                    <textarea
                        prop:value=move || bio.get()
                        on:input=move |ev| set_bio.set(event_target_value(&ev))
                        class="w-full bg-gray-50 rounded-lg px-4 py-3 border border-gray-300 h-28
                               focus:border-blue-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-500 mb-2">"Avatar"</label>
                    <input type="file" accept="image/*" on:change=on_avatar class="text-sm" />
                </div>

                <div class="flex space-x-3 pt-2">
                    <A
                        href="/app/profile"
                        class="flex-1 px-4 py-3 bg-gray-200 hover:bg-gray-300 rounded-lg
                               font-medium text-center text-gray-700 transition-colors"
                    >
                        "Cancel"
                    </A>
                    <button
                        type="submit"
                        disabled=move || saving.get()
                        class="flex-1 px-4 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                               text-white rounded-lg font-medium transition-colors"
                    >
                        {move || if saving.get() { "Saving..." } else { "Save changes" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
