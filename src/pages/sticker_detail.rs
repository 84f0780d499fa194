//! Sticker Detail Page
//!
//! Full view of one sticker. Regular viewers get the locked overlay until
//! they unlock it; staff see the artwork regardless. Unlocked stickers show
//! the capture photo, fun fact and the owner's message, which can be edited
//! in place.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use crate::api::models::Sticker;
use crate::api::{resolve_media_url, stickers};
use crate::components::{use_toasts, Loading};
use crate::state::remote::{load_into, Remote};
use crate::state::use_session;

/// Sticker detail page
#[component]
pub fn StickerDetailPage() -> impl IntoView {
    let params = use_params_map();
    let sticker_id = move || {
        params.with(|p| p.get("sid").and_then(|v| v.parse::<i64>().ok()))
    };

    let session = use_session();
    let is_staff = move || session.user.get().map(|u| u.is_staff).unwrap_or(false);

    let sticker = create_rw_signal(Remote::<Sticker>::default());
    create_effect(move |_| {
        if let Some(id) = sticker_id() {
            load_into(sticker, stickers::get(id));
        }
    });

    let refetch = move || {
        if let Some(id) = sticker_id() {
            load_into(sticker, stickers::get(id));
        }
    };

    view! {
        <div class="flex-1 p-10 max-w-5xl mx-auto w-full">
            {move || match sticker.get() {
                Remote::Idle | Remote::Loading => view! { <Loading /> }.into_view(),
                Remote::Failed(message) => view! {
                    <p class="text-red-600">"Couldn't load the sticker: "{message}</p>
                }.into_view(),
                Remote::Ready(sticker) => {
                    let staff = is_staff();
                    view! { <StickerView sticker=sticker staff=staff on_change=refetch /> }
                        .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn StickerView(
    sticker: Sticker,
    staff: bool,
    on_change: impl Fn() + Copy + 'static,
) -> impl IntoView {
    let hidden = sticker.is_locked() && !staff;
    let locked = sticker.is_locked();
    let image = resolve_media_url(
        sticker
            .unlocked_photo_url
            .as_deref()
            .or(sticker.image_reference.as_deref())
            .or(sticker.image.as_deref()),
    );
    let album_href = format!("/app/albums/{}", sticker.album);

    view! {
        <div class="bg-white rounded-2xl shadow-lg overflow-hidden flex flex-col md:flex-row">
            <div class="md:w-1/2 bg-gray-50 flex items-center justify-center min-h-[320px]">
                {if hidden {
                    view! {
                        <div class="flex flex-col items-center text-gray-400">
                            <span class="text-6xl">"🔒"</span>
                            <p class="mt-3">"Unlock this sticker to reveal it"</p>
                        </div>
                    }.into_view()
                } else {
                    match image {
                        Some(src) => view! {
                            <img src=src alt="Sticker" class="object-cover w-full h-full max-h-[420px]" />
                        }.into_view(),
                        None => view! { <span class="text-6xl">"🏷️"</span> }.into_view(),
                    }
                }}
            </div>

            <div class="md:w-1/2 p-6 space-y-4">
                <h2 class="text-2xl font-semibold text-gray-800">{sticker.name.clone()}</h2>
                <p class="text-gray-600">{sticker.description.clone()}</p>

                <div class="grid grid-cols-2 gap-4">
                    <Stat label="Status" value={(if locked { "Locked" } else { "Unlocked" }).to_string()} />
                    <Stat label="Rarity" value=sticker.rarity.clone().unwrap_or_else(|| "—".into()) />
                    <Stat label="Points" value=sticker.reward_points.to_string() />
                    <Stat label="Unlocked" value=sticker.unlocked_at.clone().unwrap_or_else(|| "—".into()) />
                </div>

                {sticker.fun_fact.clone().filter(|f| !f.is_empty()).map(|fact| view! {
                    <div class="bg-blue-50 border-l-4 border-blue-600 p-4 rounded-lg text-sm text-gray-700">
                        <span class="font-medium">"Fun fact: "</span>{fact}
                    </div>
                })}

                {if locked {
                    view! { <UnlockForm sticker_id=sticker.id on_change=on_change /> }.into_view()
                } else {
                    view! {
                        <MessageForm
                            sticker_id=sticker.id
                            current=sticker.user_message.clone().unwrap_or_default()
                            on_change=on_change
                        />
                    }.into_view()
                }}

                <A href=album_href class="inline-block text-sm text-blue-600 hover:underline">
                    "← Back to album"
                </A>
            </div>
        </div>
    }
}

#[component]
fn Stat(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-gray-50 rounded-lg p-4">
            <p class="text-xs text-gray-500">{label}</p>
            <p class="font-medium text-gray-800">{value}</p>
        </div>
    }
}

/// Direct unlock: photo plus an optional comment.
#[component]
fn UnlockForm(sticker_id: i64, on_change: impl Fn() + Copy + 'static) -> impl IntoView {
    let toasts = use_toasts();
    let (comment, set_comment) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let photo: RwSignal<Option<web_sys::File>> = create_rw_signal(None);

    let on_file = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        photo.set(input.files().and_then(|files| files.get(0)));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(file) = photo.get_untracked() else {
            toasts.error("Pick a photo first.");
            return;
        };
        set_submitting.set(true);
        let comment = comment.get_untracked();
        spawn_local(async move {
            match stickers::unlock(sticker_id, &file, Some(comment.as_str())).await {
                Ok(_) => {
                    toasts.success("Photo submitted for validation!");
                    on_change();
                }
                Err(e) => {
                    toasts.error(e.to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="bg-gray-50 rounded-lg p-4 space-y-3">
            <h3 class="font-medium text-gray-800">"Submit a capture"</h3>
            <input type="file" accept="image/*" on:change=on_file class="text-sm" />
            <input
                type="text"
                placeholder="Comment (optional)"
                prop:value=move || comment.get()
                on:input=move |ev| set_comment.set(event_target_value(&ev))
                class="w-full bg-white rounded-lg px-3 py-2 border border-gray-300 text-sm
                       focus:border-blue-500 focus:outline-none"
            />
            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                       text-white rounded-lg text-sm font-medium transition-colors"
            >
                {move || if submitting.get() { "Uploading..." } else { "Unlock with this photo" }}
            </button>
        </form>
    }
}

/// Edit the personal message shown on an unlocked sticker.
#[component]
fn MessageForm(
    sticker_id: i64,
    current: String,
    on_change: impl Fn() + Copy + 'static,
) -> impl IntoView {
    let toasts = use_toasts();
    let (message, set_message) = create_signal(current);
    let (saving, set_saving) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = message.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            match stickers::set_message(sticker_id, &text).await {
                Ok(_) => {
                    toasts.success("Message saved");
                    on_change();
                }
                Err(e) => {
                    toasts.error(e.to_string());
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="bg-gray-50 rounded-lg p-4 space-y-3">
            <h3 class="font-medium text-gray-800">"Your message"</h3>
            <textarea
                prop:value=move || message.get()
                on:input=move |ev| set_message.set(event_target_value(&ev))
                placeholder="Leave a note on this capture..."
                class="w-full bg-white rounded-lg px-3 py-2 border border-gray-300 text-sm h-20
                       focus:border-blue-500 focus:outline-none"
            />
            <button
                type="submit"
                disabled=move || saving.get()
                class="px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                       text-white rounded-lg text-sm font-medium transition-colors"
            >
                {move || if saving.get() { "Saving..." } else { "Save message" }}
            </button>
        </form>
    }
}
