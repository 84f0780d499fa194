//! Album Card Component

use leptos::*;
use leptos_router::*;

use crate::api::models::AlbumSummary;
use crate::api::resolve_media_url;
use crate::state::use_session;

/// Album summary card for the album grid.
#[component]
pub fn AlbumCard(album: AlbumSummary) -> impl IntoView {
    let session = use_session();
    let is_staff = move || session.user.get().map(|u| u.is_staff).unwrap_or(false);

    let cover = resolve_media_url(album.cover_image.as_deref());
    let detail_href = format!("/app/albums/{}", album.id);
    let edit_href = format!("/app/albums/{}/edit", album.id);

    view! {
        <div class="bg-white rounded-xl shadow-md overflow-hidden hover:shadow-lg transition">
            {match cover {
                Some(src) => view! {
                    <img src=src alt="" class="w-full h-40 object-cover" />
                }.into_view(),
                None => view! {
                    <div class="w-full h-40 bg-gray-200 flex items-center justify-center text-4xl">
                        "📒"
                    </div>
                }.into_view(),
            }}
            <div class="p-5">
                <div class="flex items-center justify-between">
                    <h3 class="text-xl font-semibold text-gray-800">{album.title.clone()}</h3>
                    {album.is_premium.then(|| view! {
                        <span class="bg-amber-100 text-amber-700 text-xs px-2 py-0.5 rounded-full font-medium">
                            "Premium"
                        </span>
                    })}
                </div>
                <p class="text-sm text-gray-500 mb-3">
                    {album.stickers_count}" stickers"
                    {album.price.clone().filter(|p| !p.is_empty()).map(|p| format!(" · {} €", p))}
                </p>
                <A
                    href=detail_href
                    class="block text-center bg-blue-600 text-white w-full py-2 rounded-lg hover:bg-blue-700"
                >
                    "View album"
                </A>
                {move || is_staff().then(|| view! {
                    <A
                        href=edit_href.clone()
                        class="block text-center text-sm text-blue-600 hover:underline mt-2"
                    >
                        "Edit"
                    </A>
                })}
            </div>
        </div>
    }
}
