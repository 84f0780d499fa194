//! Album Detail Page
//!
//! Cover, metadata and the ordered sticker grid. Locked stickers are
//! obscured for regular viewers; staff always see the artwork.

use leptos::*;
use leptos_router::*;

use crate::api::albums;
use crate::api::models::{AlbumDetail, Sticker};
use crate::api::resolve_media_url;
use crate::components::Loading;
use crate::state::remote::{load_into, Remote};
use crate::state::use_session;

/// Album detail page
#[component]
pub fn AlbumDetailPage() -> impl IntoView {
    let params = use_params_map();
    let album_id = move || {
        params.with(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()))
    };

    let session = use_session();
    let is_staff = move || session.user.get().map(|u| u.is_staff).unwrap_or(false);

    let album = create_rw_signal(Remote::<AlbumDetail>::default());
    create_effect(move |_| {
        if let Some(id) = album_id() {
            load_into(album, albums::get(id));
        }
    });

    view! {
        <div class="flex-1 p-10 max-w-6xl mx-auto w-full">
            {move || match album.get() {
                Remote::Idle | Remote::Loading => view! { <Loading /> }.into_view(),
                Remote::Failed(message) => view! {
                    <p class="text-red-600">"Couldn't load the album: "{message}</p>
                }.into_view(),
                Remote::Ready(album) => {
                    let staff = is_staff();
                    view! { <AlbumView album=album staff=staff /> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn AlbumView(album: AlbumDetail, staff: bool) -> impl IntoView {
    let cover = resolve_media_url(album.cover_image.as_deref());
    let unlock_href = format!("/app/albums/{}/unlock", album.id);
    let edit_href = format!("/app/albums/{}/edit", album.id);
    let unlocked = album
        .stickers
        .iter()
        .filter(|s| s.is_unlocked == Some(true))
        .count();
    let total = album.stickers.len();

    view! {
        <div class="bg-white rounded-2xl shadow-lg overflow-hidden mb-8">
            <div class="md:flex">
                {cover.map(|src| view! {
                    <img src=src alt="" class="md:w-1/3 h-56 object-cover" />
                })}
                <div class="p-6 flex-1">
                    <div class="flex items-center justify-between">
                        <h1 class="text-3xl font-semibold text-gray-800">{album.title.clone()}</h1>
                        {album.is_premium.then(|| view! {
                            <span class="bg-amber-100 text-amber-700 text-sm px-3 py-1 rounded-full font-medium">
                                "Premium"
                            </span>
                        })}
                    </div>
                    <p class="text-gray-600 mt-2">{album.description.clone()}</p>
                    <p class="text-sm text-gray-500 mt-3">
                        {unlocked}" / "{total}" stickers unlocked"
                    </p>
                    <div class="flex gap-3 mt-5">
                        <A
                            href=unlock_href
                            class="bg-blue-600 text-white px-5 py-2 rounded-lg hover:bg-blue-700 transition"
                        >
                            "📸 Try to unlock"
                        </A>
                        {staff.then(|| view! {
                            <A
                                href=edit_href.clone()
                                class="bg-gray-200 text-gray-700 px-5 py-2 rounded-lg hover:bg-gray-300 transition"
                            >
                                "Edit album"
                            </A>
                        })}
                    </div>
                </div>
            </div>
        </div>

        {if album.stickers.is_empty() {
            view! {
                <p class="text-gray-500 text-center py-12">"This album has no stickers yet."</p>
            }.into_view()
        } else {
            view! {
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                    {album.stickers.into_iter().map(|sticker| view! {
                        <StickerTile sticker=sticker staff=staff />
                    }).collect_view()}
                </div>
            }.into_view()
        }}
    }
}

/// One sticker in the album grid.
#[component]
fn StickerTile(sticker: Sticker, staff: bool) -> impl IntoView {
    let hidden = sticker.is_locked() && !staff;
    let image = resolve_media_url(
        sticker
            .unlocked_photo_url
            .as_deref()
            .or(sticker.image_reference.as_deref())
            .or(sticker.image.as_deref()),
    );
    let detail_href = format!("/app/stickers/{}", sticker.id);

    view! {
        <A href=detail_href class="block">
            <div class="bg-white rounded-xl shadow-md overflow-hidden hover:shadow-lg transition">
                {if hidden {
                    view! {
                        <div class="w-full h-36 bg-gray-300 flex flex-col items-center justify-center text-gray-500">
                            <span class="text-3xl">"🔒"</span>
                            <span class="text-xs mt-1">"Locked"</span>
                        </div>
                    }.into_view()
                } else {
                    match image {
                        Some(src) => view! {
                            <img src=src alt="" class="w-full h-36 object-cover" />
                        }.into_view(),
                        None => view! {
                            <div class="w-full h-36 bg-gray-100 flex items-center justify-center text-3xl">
                                "🏷️"
                            </div>
                        }.into_view(),
                    }
                }}
                <div class="p-3">
                    <div class="flex items-center justify-between">
                        <h4 class="font-medium text-gray-800 truncate">{sticker.name.clone()}</h4>
                        {sticker.rarity.clone().map(|rarity| view! {
                            <span class="text-xs text-purple-600 capitalize">{rarity}</span>
                        })}
                    </div>
                    <p class="text-xs text-gray-500 mt-1">
                        {sticker.reward_points}" pts"
                    </p>
                </div>
            </div>
        </A>
    }
}
