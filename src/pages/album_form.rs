//! Album Create/Edit Pages
//!
//! Staff-facing forms. Editing also manages the album's stickers: existing
//! ones can be repointed and new ones added, artwork included. All
//! file-bearing submissions go out as multipart.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use crate::api::models::{AlbumDetail, Sticker};
use crate::api::{albums, albums::AlbumPayload, stickers, stickers::StickerPayload};
use crate::components::{use_toasts, Loading};
use crate::state::remote::{load_into, Remote};

/// Album creation page
#[component]
pub fn AlbumCreatePage() -> impl IntoView {
    let navigate = use_navigate();
    let toasts = use_toasts();

    let on_save = move |payload: AlbumPayload| {
        let navigate = navigate.clone();
        spawn_local(async move {
            match albums::create(payload).await {
                Ok(album) => {
                    toasts.success("Album created");
                    navigate(&format!("/app/albums/{}", album.id), Default::default());
                }
                Err(e) => {
                    toasts.error(e.to_string());
                }
            }
        });
    };

    view! {
        <div class="flex-1 p-10 max-w-3xl mx-auto w-full">
            <h1 class="text-3xl font-semibold text-gray-800 mb-8">"New album"</h1>
            <AlbumFields initial=None on_save=on_save />
        </div>
    }
}

/// Album edit page, including sticker management
#[component]
pub fn AlbumEditPage() -> impl IntoView {
    let params = use_params_map();
    let album_id = move || {
        params.with(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()))
    };

    let toasts = use_toasts();
    let album = create_rw_signal(Remote::<AlbumDetail>::default());
    create_effect(move |_| {
        if let Some(id) = album_id() {
            load_into(album, albums::get(id));
        }
    });

    let refetch = move || {
        if let Some(id) = album_id() {
            load_into(album, albums::get(id));
        }
    };

    let on_save = move |payload: AlbumPayload| {
        let Some(id) = album_id() else { return };
        spawn_local(async move {
            match albums::update(id, payload).await {
                Ok(_) => {
                    toasts.success("Album updated");
                    refetch();
                }
                Err(e) => {
                    toasts.error(e.to_string());
                }
            }
        });
    };

    view! {
        <div class="flex-1 p-10 max-w-3xl mx-auto w-full">
            <h1 class="text-3xl font-semibold text-gray-800 mb-8">"Edit album"</h1>

            {move || match album.get() {
                Remote::Idle | Remote::Loading => view! { <Loading /> }.into_view(),
                Remote::Failed(message) => view! {
                    <p class="text-red-600">"Couldn't load the album: "{message}</p>
                }.into_view(),
                Remote::Ready(album) => view! {
                    <AlbumFields initial=Some(album.clone()) on_save=on_save />
                    <StickerManager album=album on_change=refetch />
                }.into_view(),
            }}
        </div>
    }
}

/// Shared album field set.
#[component]
fn AlbumFields(
    initial: Option<AlbumDetail>,
    on_save: impl Fn(AlbumPayload) + 'static,
) -> impl IntoView {
    let toasts = use_toasts();

    let (title, set_title) = create_signal(
        initial.as_ref().map(|a| a.title.clone()).unwrap_or_default(),
    );
    let (description, set_description) = create_signal(
        initial.as_ref().map(|a| a.description.clone()).unwrap_or_default(),
    );
    let (theme, set_theme) = create_signal(
        initial.as_ref().map(|a| a.theme.clone()).unwrap_or_default(),
    );
    let (is_premium, set_is_premium) = create_signal(
        initial.as_ref().map(|a| a.is_premium).unwrap_or(false),
    );
    let (price, set_price) = create_signal(
        initial
            .as_ref()
            .and_then(|a| a.price.clone())
            .unwrap_or_default(),
    );
    let cover: RwSignal<Option<web_sys::File>> = create_rw_signal(None);

    let on_cover = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        cover.set(input.files().and_then(|files| files.get(0)));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get_untracked();
        if title.is_empty() {
            toasts.error("Title is required");
            return;
        }
        let premium = is_premium.get_untracked();
        on_save(AlbumPayload {
            title: Some(title),
            description: Some(description.get_untracked()),
            theme: Some(theme.get_untracked()),
            is_premium: Some(premium),
            // an empty price clears the stored one on the server
            price: Some(if premium { price.get_untracked() } else { String::new() }),
            cover_image: cover.get_untracked(),
        });
    };

    view! {
        <form on:submit=on_submit class="bg-white rounded-2xl shadow-md p-6 space-y-4">
            <div>
                <label class="block text-sm text-gray-500 mb-2">"Title"</label>
                <input
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    class="w-full bg-gray-50 rounded-lg px-4 py-3 border border-gray-300
                           focus:border-blue-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-500 mb-2">"Description"</label>
                <textarea
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                    class="w-full bg-gray-50 rounded-lg px-4 py-3 border border-gray-300 h-24
                           focus:border-blue-500 focus:outline-none"
                />
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-500 mb-2">"Theme"</label>
                    <input
                        type="text"
                        placeholder="e.g. classic cars"
                        prop:value=move || theme.get()
                        on:input=move |ev| set_theme.set(event_target_value(&ev))
                        class="w-full bg-gray-50 rounded-lg px-4 py-3 border border-gray-300
                               focus:border-blue-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-500 mb-2">"Cover image"</label>
                    <input type="file" accept="image/*" on:change=on_cover class="text-sm pt-3" />
                </div>
            </div>

            <div class="flex items-center space-x-6">
                <label class="flex items-center space-x-2 text-sm text-gray-700">
                    <input
                        type="checkbox"
                        prop:checked=move || is_premium.get()
                        on:change=move |ev| set_is_premium.set(event_target_checked(&ev))
                    />
                    <span>"Premium album"</span>
                </label>

                {move || is_premium.get().then(|| view! {
                    <input
                        type="text"
                        placeholder="Price"
                        prop:value=move || price.get()
                        on:input=move |ev| set_price.set(event_target_value(&ev))
                        class="w-32 bg-gray-50 rounded-lg px-3 py-2 border border-gray-300 text-sm
                               focus:border-blue-500 focus:outline-none"
                    />
                })}
            </div>

            <button
                type="submit"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg
                       font-medium transition-colors"
            >
                "Save album"
            </button>
        </form>
    }
}

/// Sticker list plus the add-sticker form, shown while editing.
#[component]
fn StickerManager(album: AlbumDetail, on_change: impl Fn() + Copy + 'static) -> impl IntoView {
    view! {
        <section class="mt-10">
            <h2 class="text-xl font-semibold text-gray-800 mb-4">"Stickers"</h2>

            {if album.stickers.is_empty() {
                view! { <p class="text-gray-500 mb-4">"No stickers yet."</p> }.into_view()
            } else {
                view! {
                    <div class="space-y-3 mb-6">
                        {album.stickers.into_iter().map(|sticker| view! {
                            <StickerRow sticker=sticker on_change=on_change />
                        }).collect_view()}
                    </div>
                }.into_view()
            }}

            <NewStickerForm album_id=album.id on_change=on_change />
        </section>
    }
}

#[component]
fn StickerRow(sticker: Sticker, on_change: impl Fn() + Copy + 'static) -> impl IntoView {
    let toasts = use_toasts();
    let id = sticker.id;
    let (name, set_name) = create_signal(sticker.name.clone());
    let (points, set_points) = create_signal(sticker.reward_points.to_string());
    let (order, set_order) = create_signal(sticker.order.to_string());
    let (saving, set_saving) = create_signal(false);

    let save = move |_| {
        set_saving.set(true);
        let payload = StickerPayload {
            name: Some(name.get_untracked()),
            reward_points: points.get_untracked().parse().ok(),
            order: order.get_untracked().parse().ok(),
            ..Default::default()
        };
        spawn_local(async move {
            match stickers::update(id, payload).await {
                Ok(_) => {
                    toasts.success("Sticker updated");
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
        <div class="bg-white rounded-xl shadow p-4 flex items-center space-x-3">
            <input
                type="text"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
                class="flex-1 bg-gray-50 rounded-lg px-3 py-2 border border-gray-300 text-sm
                       focus:border-blue-500 focus:outline-none"
            />
            <input
                type="number"
                title="Reward points"
                prop:value=move || points.get()
                on:input=move |ev| set_points.set(event_target_value(&ev))
                class="w-24 bg-gray-50 rounded-lg px-3 py-2 border border-gray-300 text-sm
                       focus:border-blue-500 focus:outline-none"
            />
            <input
                type="number"
                title="Order"
                prop:value=move || order.get()
                on:input=move |ev| set_order.set(event_target_value(&ev))
                class="w-20 bg-gray-50 rounded-lg px-3 py-2 border border-gray-300 text-sm
                       focus:border-blue-500 focus:outline-none"
            />
            <button
                on:click=save
                disabled=move || saving.get()
                class="px-4 py-2 bg-gray-200 hover:bg-gray-300 disabled:opacity-50
                       text-gray-700 rounded-lg text-sm transition-colors"
            >
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </button>
        </div>
    }
}

#[component]
fn NewStickerForm(album_id: i64, on_change: impl Fn() + Copy + 'static) -> impl IntoView {
    let toasts = use_toasts();
    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (points, set_points) = create_signal(String::new());
    let (rarity, set_rarity) = create_signal("common".to_string());
    let (submitting, set_submitting) = create_signal(false);
    let image: RwSignal<Option<web_sys::File>> = create_rw_signal(None);

    let on_image = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        image.set(input.files().and_then(|files| files.get(0)));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get_untracked();
        if name_value.is_empty() {
            toasts.error("Sticker name is required");
            return;
        }
        let Some(file) = image.get_untracked() else {
            toasts.error("Sticker artwork is required");
            return;
        };
        set_submitting.set(true);
        let payload = StickerPayload {
            album: Some(album_id),
            name: Some(name_value),
            description: Some(description.get_untracked()),
            reward_points: points.get_untracked().parse().ok(),
            rarity: Some(rarity.get_untracked()),
            image: Some(file),
            ..Default::default()
        };
        spawn_local(async move {
            match stickers::create(payload).await {
                Ok(_) => {
                    toasts.success("Sticker added");
                    set_name.set(String::new());
                    set_description.set(String::new());
                    set_points.set(String::new());
                    image.set(None);
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
        <form on:submit=on_submit class="bg-white rounded-2xl shadow-md p-6 space-y-4">
            <h3 class="font-medium text-gray-800">"Add a sticker"</h3>

            <div class="grid grid-cols-2 gap-4">
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="bg-gray-50 rounded-lg px-3 py-2 border border-gray-300 text-sm
                           focus:border-blue-500 focus:outline-none"
                />
                <input
                    type="number"
                    placeholder="Reward points"
                    prop:value=move || points.get()
                    on:input=move |ev| set_points.set(event_target_value(&ev))
                    class="bg-gray-50 rounded-lg px-3 py-2 border border-gray-300 text-sm
                           focus:border-blue-500 focus:outline-none"
                />
            </div>

            <textarea
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
                class="w-full bg-gray-50 rounded-lg px-3 py-2 border border-gray-300 text-sm h-16
                       focus:border-blue-500 focus:outline-none"
            />

            <div class="flex items-center space-x-4">
                <select
                    prop:value=move || rarity.get()
                    on:change=move |ev| set_rarity.set(event_target_value(&ev))
                    class="bg-gray-50 rounded-lg px-3 py-2 border border-gray-300 text-sm
                           focus:border-blue-500 focus:outline-none"
                >
                    <option value="common">"Common"</option>
                    <option value="rare">"Rare"</option>
                    <option value="epic">"Epic"</option>
                    <option value="legendary">"Legendary"</option>
                </select>
                <input type="file" accept="image/*" on:change=on_image class="text-sm" />
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="px-5 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                       text-white rounded-lg text-sm font-medium transition-colors"
            >
                {move || if submitting.get() { "Adding..." } else { "Add sticker" }}
            </button>
        </form>
    }
}
