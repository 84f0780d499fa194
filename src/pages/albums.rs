//! Albums Page
//!
//! Grid of every album, with a staff-only shortcut to create new ones.

use leptos::*;
use leptos_router::*;

use crate::api::albums;
use crate::components::{AlbumCard, CardSkeleton};
use crate::state::remote::{load_into, Remote};
use crate::state::use_session;

/// Album list page
#[component]
pub fn AlbumsPage() -> impl IntoView {
    let session = use_session();
    let is_staff = move || session.user.get().map(|u| u.is_staff).unwrap_or(false);

    let albums = create_rw_signal(Remote::default());
    create_effect(move |_| {
        load_into(albums, albums::list());
    });

    view! {
        <div class="flex-1 p-10">
            <div class="flex justify-between items-center mb-8">
                <h2 class="text-3xl font-semibold text-gray-800">"Albums"</h2>
                {move || is_staff().then(|| view! {
                    <A
                        href="/app/albums/create"
                        class="bg-blue-600 text-white px-5 py-2 rounded-lg hover:bg-blue-700 transition"
                    >
                        "+ New album"
                    </A>
                })}
            </div>

            {move || match albums.get() {
                Remote::Idle | Remote::Loading => view! { <CardSkeleton count=6 /> }.into_view(),
                Remote::Failed(message) => view! {
                    <p class="text-red-600">"Couldn't load albums: "{message}</p>
                }.into_view(),
                Remote::Ready(items) => {
                    if items.is_empty() {
                        view! {
                            <p class="text-gray-500 text-center py-12">
                                "No albums yet. Check back soon!"
                            </p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                                {items.into_iter().map(|album| view! {
                                    <AlbumCard album=album />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}
