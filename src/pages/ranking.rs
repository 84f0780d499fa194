//! Ranking Page
//!
//! Global leaderboard, top users by points.

use leptos::*;
use leptos_router::*;

use crate::api::auth;
use crate::api::models::ApiUser;
use crate::api::resolve_media_url;
use crate::components::ListSkeleton;
use crate::state::remote::{load_into, Remote};

const LEADERBOARD_SIZE: usize = 10;

/// Ranking page component
#[component]
pub fn RankingPage() -> impl IntoView {
    let leaderboard = create_rw_signal(Remote::<Vec<ApiUser>>::default());
    create_effect(move |_| {
        load_into(leaderboard, auth::leaderboard(LEADERBOARD_SIZE));
    });

    view! {
        <div class="flex-1 p-10 max-w-4xl mx-auto w-full">
            <h2 class="text-3xl font-semibold text-gray-800 mb-8 text-center">
                "Global ranking"
            </h2>

            {move || {
                let state = leaderboard.get();
                if state.is_loading() {
                    view! { <ListSkeleton count=5 /> }.into_view()
                } else if let Some(message) = state.error() {
                    view! {
                        <p class="text-red-600 text-center">
                            "Couldn't load the ranking: "{message.to_string()}
                        </p>
                    }.into_view()
                } else {
                    let users = state.ready().cloned().unwrap_or_default();
                    if users.is_empty() {
                        view! {
                            <p class="text-gray-500 text-center py-12">"Nobody has scored yet."</p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="space-y-4">
                                {users.into_iter().enumerate().map(|(i, user)| view! {
                                    <RankingRow place={i + 1} user=user />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn RankingRow(place: usize, user: ApiUser) -> impl IntoView {
    let medal = match place {
        1 => "text-yellow-500",
        2 => "text-gray-500",
        3 => "text-orange-500",
        _ => "text-blue-600",
    };
    let avatar = resolve_media_url(user.avatar.as_deref());
    let href = format!("/app/users/{}", user.id);
    let points = user.display_points();

    view! {
        <div class="bg-white rounded-xl shadow-md p-6 flex items-center hover:shadow-lg transition">
            <span class=format!("text-3xl font-bold mr-4 {}", medal)>{place}</span>
            {match avatar {
                Some(src) => view! {
                    <img src=src alt="" class="w-16 h-16 rounded-full border-2 border-gray-200 object-cover" />
                }.into_view(),
                None => view! {
                    <div class="w-16 h-16 rounded-full bg-gray-200 flex items-center justify-center text-2xl">
                        "👤"
                    </div>
                }.into_view(),
            }}
            <div class="ml-4 flex-1">
                <A href=href class="text-lg font-semibold text-gray-800 hover:text-blue-600">
                    {user.display_name()}
                </A>
                <p class="text-sm text-gray-500">{points}" points"</p>
            </div>
            {(place <= 3).then(|| view! {
                <span class="text-3xl">
                    {match place { 1 => "🥇", 2 => "🥈", _ => "🥉" }}
                </span>
            })}
        </div>
    }
}
