//! Photo-Match Unlock Page
//!
//! Submit a photo against an album and let the backend decide which sticker
//! (if any) it unlocks. The page only renders the verdict; matching itself
//! is entirely server-side.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use crate::api::models::{MatchPhotoResult, Sticker};
use crate::api::{albums, resolve_media_url, stickers};
use crate::components::use_toasts;
use crate::state::remote::{load_into, Remote};

/// Photo-match page for one album
#[component]
pub fn UnlockPage() -> impl IntoView {
    let params = use_params_map();
    let album_id = move || {
        params.with(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()))
    };

    let toasts = use_toasts();
    let (submitting, set_submitting) = create_signal(false);
    let photo: RwSignal<Option<web_sys::File>> = create_rw_signal(None);
    let result: RwSignal<Option<MatchPhotoResult>> = create_rw_signal(None);

    // progress strip of the album's stickers
    let album_stickers = create_rw_signal(Remote::<Vec<Sticker>>::default());
    create_effect(move |_| {
        if let Some(id) = album_id() {
            load_into(album_stickers, stickers::list_by_album(id));
        }
    });

    let on_file = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        photo.set(input.files().and_then(|files| files.get(0)));
        result.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = album_id() else { return };
        let Some(file) = photo.get_untracked() else {
            toasts.error("Pick a photo first.");
            return;
        };
        set_submitting.set(true);
        spawn_local(async move {
            match albums::match_photo(id, &file).await {
                Ok(outcome) => {
                    if outcome.unlocked {
                        toasts.success("Sticker unlocked!");
                    }
                    result.set(Some(outcome));
                }
                Err(e) => {
                    toasts.error(e.to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex-1 p-10 max-w-3xl mx-auto w-full">
            <h1 class="text-3xl font-semibold text-gray-800 mb-2">"Unlock a sticker"</h1>
            <p class="text-gray-500 mb-8">
                "Upload a photo. If it matches one of this album's stickers, it's yours."
            </p>

            <form on:submit=on_submit class="bg-white rounded-2xl shadow-md p-6 space-y-4">
                <label
                    class="flex items-center justify-center px-4 py-10 bg-gray-50
                           hover:bg-gray-100 rounded-xl cursor-pointer transition-colors
                           border-2 border-dashed border-gray-300 hover:border-blue-500"
                >
                    <input type="file" accept="image/*" class="hidden" on:change=on_file />
                    <span class="text-gray-600">
                        {move || match photo.get() {
                            Some(file) => format!("📁 {}", file.name()),
                            None => "📸 Choose a photo".to_string(),
                        }}
                    </span>
                </label>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                           text-white rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Matching..." } else { "Submit photo" }}
                </button>
            </form>

            {move || result.get().map(|outcome| view! { <MatchResult outcome=outcome /> })}

            {move || album_stickers.get().ready().map(|items| {
                let unlocked = items.iter().filter(|s| s.is_unlocked == Some(true)).count();
                let total = items.len();
                view! {
                    <div class="mt-8 bg-white rounded-2xl shadow-md p-6">
                        <h3 class="font-medium text-gray-800 mb-3">
                            "Album progress: "{unlocked}" / "{total}
                        </h3>
                        <div class="flex flex-wrap gap-2">
                            {items.iter().map(|sticker| {
                                let done = sticker.is_unlocked == Some(true);
                                view! {
                                    <span class=format!(
                                        "px-3 py-1 rounded-full text-xs font-medium {}",
                                        if done {
                                            "bg-green-100 text-green-700"
                                        } else {
                                            "bg-gray-100 text-gray-500"
                                        }
                                    )>
                                        {if done { "✓ " } else { "🔒 " }}
                                        {sticker.name.clone()}
                                    </span>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                }
            })}

            {move || album_id().map(|id| view! {
                <A
                    href=format!("/app/albums/{}", id)
                    class="inline-block mt-6 text-sm text-blue-600 hover:underline"
                >
                    "← Back to album"
                </A>
            })}
        </div>
    }
}

/// Render the backend's verdict.
#[component]
fn MatchResult(outcome: MatchPhotoResult) -> impl IntoView {
    let car_line = outcome.car.as_ref().map(|car| {
        let mut parts = Vec::new();
        if let Some(make) = &car.make {
            parts.push(make.clone());
        }
        if let Some(model) = &car.model {
            parts.push(model.clone());
        }
        if let Some(generation) = &car.generation {
            parts.push(format!("({})", generation));
        }
        if let Some(years) = &car.year_range {
            parts.push(years.clone());
        }
        parts.join(" ")
    });

    let panel_class = format!(
        "mt-8 rounded-2xl shadow-md p-6 border-l-4 {}",
        if outcome.unlocked {
            "bg-green-50 border-green-600"
        } else {
            "bg-white border-gray-300"
        }
    );

    view! {
        <div class=panel_class>
            <h2 class="text-xl font-semibold text-gray-800">
                {if outcome.already_unlocked {
                    "Already in your collection"
                } else if outcome.unlocked {
                    "It's a match!"
                } else {
                    "No match this time"
                }}
            </h2>

            {outcome.message.clone().filter(|m| !m.is_empty()).map(|message| view! {
                <p class="text-gray-600 mt-2">{message}</p>
            })}

            {car_line.filter(|l| !l.is_empty()).map(|line| view! {
                <p class="text-sm text-gray-500 mt-2">"Detected: "{line}</p>
            })}

            {outcome.match_score.map(|score| view! {
                <p class="text-sm text-gray-500 mt-1">
                    {format!("Match score: {:.0}%", score * 100.0)}
                </p>
            })}

            {outcome.fun_fact.clone().filter(|f| !f.is_empty()).map(|fact| view! {
                <div class="bg-blue-50 border-l-4 border-blue-600 p-3 rounded-lg text-sm text-gray-700 mt-3">
                    <span class="font-medium">"Fun fact: "</span>{fact}
                </div>
            })}

            {outcome.sticker.as_ref().map(|sticker| {
                let image = resolve_media_url(
                    sticker
                        .unlocked_photo_url
                        .as_deref()
                        .or(sticker.image_reference.as_deref()),
                );
                let href = format!("/app/stickers/{}", sticker.id);
                view! {
                    <div class="flex items-center space-x-4 mt-4 bg-white rounded-lg p-3 shadow">
                        {image.map(|src| view! {
                            <img src=src alt="" class="w-16 h-16 rounded-lg object-cover" />
                        })}
                        <div class="flex-1">
                            <p class="font-medium text-gray-800">{sticker.name.clone()}</p>
                            <p class="text-xs text-gray-500">{sticker.reward_points}" pts"</p>
                        </div>
                        <A href=href class="text-sm text-blue-600 hover:underline">"View"</A>
                    </div>
                }
            })}
        </div>
    }
}
