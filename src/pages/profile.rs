//! Profile Page
//!
//! The viewer's own profile, straight from the session store.

use leptos::*;
use leptos_router::*;

use crate::api::resolve_media_url;
use crate::state::use_session;

/// Own-profile page component
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let user = session.user;

    view! {
        <div class="flex-1 p-10 max-w-3xl mx-auto w-full">
            {move || user.get().map(|user| {
                let avatar = resolve_media_url(user.avatar.as_deref());
                view! {
                    <div class="bg-white rounded-2xl shadow-lg p-8">
                        <div class="flex items-center space-x-6">
                            {match avatar {
                                Some(src) => view! {
                                    <img src=src alt="Avatar"
                                        class="w-24 h-24 rounded-full border-4 border-blue-100 object-cover" />
                                }.into_view(),
                                None => view! {
                                    <div class="w-24 h-24 rounded-full bg-gray-200 flex items-center
                                                justify-center text-4xl">
                                        "👤"
                                    </div>
                                }.into_view(),
                            }}
                            <div class="flex-1">
                                <h1 class="text-3xl font-semibold text-gray-800">
                                    {user.display_name()}
                                </h1>
                                <p class="text-gray-500">"@"{user.username.clone()}</p>
                                {user.is_staff.then(|| view! {
                                    <span class="inline-block mt-1 bg-purple-100 text-purple-700
                                                 text-xs px-2 py-0.5 rounded-full font-medium">
                                        "Staff"
                                    </span>
                                })}
                            </div>
                            <A
                                href="/app/profile/edit"
                                class="bg-blue-600 text-white px-5 py-2 rounded-lg hover:bg-blue-700"
                            >
                                "Edit profile"
                            </A>
                        </div>

                        <div class="grid grid-cols-2 gap-4 mt-8">
                            <div class="bg-gray-50 rounded-lg p-4">
                                <p class="text-xs text-gray-500">"Points"</p>
                                <p class="text-2xl font-semibold text-gray-800">
                                    {user.display_points()}
                                </p>
                            </div>
                            <div class="bg-gray-50 rounded-lg p-4">
                                <p class="text-xs text-gray-500">"Member since"</p>
                                <p class="text-2xl font-semibold text-gray-800">
                                    {user.date_joined.clone()
                                        .map(|d| d.chars().take(10).collect::<String>())
                                        .unwrap_or_else(|| "—".into())}
                                </p>
                            </div>
                        </div>

                        {(!user.bio.is_empty()).then(|| view! {
                            <div class="mt-6">
                                <h2 class="text-sm text-gray-500 mb-1">"Bio"</h2>
                                <p class="text-gray-700">{user.bio.clone()}</p>
                            </div>
                        })}
                    </div>
                }
            })}
        </div>
    }
}
