//! Notifications Page
//!
//! The live event buffer (most recent 50, newest first) plus pending friend
//! requests with inline accept/reject.

use leptos::*;

use crate::api::friends;
use crate::api::models::{request_status, FriendRequest};
use crate::components::{use_toasts, ListSkeleton};
use crate::state::notifications::use_notifications;
use crate::state::remote::{load_into, Remote};
use crate::state::use_session;

/// Notifications page component
#[component]
pub fn NotificationsPage() -> impl IntoView {
    let notifications = use_notifications();
    let session = use_session();
    let toasts = use_toasts();
    let viewer_id = move || session.user.get().map(|u| u.id).unwrap_or_default();

    let requests = create_rw_signal(Remote::<Vec<FriendRequest>>::default());
    let refetch = move || load_into(requests, friends::requests());
    create_effect(move |_| refetch());

    let accept = move |id: i64| {
        spawn_local(async move {
            match friends::accept(id).await {
                Ok(_) => {
                    toasts.success("Request accepted");
                    refetch();
                }
                Err(e) => toasts.error(e.to_string()),
            }
        });
    };
    let reject = move |id: i64| {
        spawn_local(async move {
            match friends::reject(id).await {
                Ok(_) => {
                    toasts.success("Request rejected");
                    refetch();
                }
                Err(e) => toasts.error(e.to_string()),
            }
        });
    };

    view! {
        <div class="flex-1 p-10 max-w-4xl mx-auto w-full">
            <h2 class="text-3xl font-semibold text-gray-800 mb-8">"Notifications"</h2>

            // Pending friend requests
            {move || match requests.get() {
                Remote::Idle | Remote::Loading => view! { <ListSkeleton count=1 /> }.into_view(),
                Remote::Failed(_) => ().into_view(),
                Remote::Ready(items) => {
                    let incoming: Vec<FriendRequest> = items
                        .into_iter()
                        .filter(|r| r.status == request_status::PENDING && r.to_user.id == viewer_id())
                        .collect();
                    incoming.into_iter().map(|request| {
                        let id = request.id;
                        view! {
                            <div class="bg-blue-50 border-l-4 border-blue-600 p-5 rounded-lg
                                        shadow-md mb-4">
                                <div class="flex items-start space-x-4">
                                    <div class="w-8 h-8 rounded-full bg-indigo-200 flex items-center
                                                justify-center text-indigo-700 font-semibold">
                                        "S"
                                    </div>
                                    <div class="flex-1">
                                        <h3 class="text-lg font-semibold text-gray-800">
                                            "New friend request"
                                        </h3>
                                        <p class="text-sm text-gray-600 mt-1">
                                            {request.from_user.username.clone()}
                                            " wants to be your friend"
                                        </p>
                                        <div class="flex space-x-3 mt-3">
                                            <button
                                                class="bg-blue-600 text-white px-4 py-1 rounded-lg
                                                       text-sm hover:bg-blue-700 transition"
                                                on:click=move |_| accept(id)
                                            >
                                                "Accept"
                                            </button>
                                            <button
                                                class="bg-gray-300 text-gray-700 px-4 py-1 rounded-lg
                                                       text-sm hover:bg-gray-400 transition"
                                                on:click=move |_| reject(id)
                                            >
                                                "Reject"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect_view()
                }
            }}

            // Live event buffer
            {move || {
                let events = notifications.events.get();
                if events.is_empty() {
                    view! {
                        <p class="text-gray-500 text-center py-12">
                            "Nothing new. Notifications arrive here in real time."
                        </p>
                    }.into_view()
                } else {
                    events.into_iter().map(|event| view! {
                        <div class="bg-white border-l-4 border-gray-300 p-5 rounded-lg shadow-md
                                    hover:shadow-lg transition mb-4">
                            <div class="flex items-start space-x-4">
                                <div class="w-8 h-8 rounded-full bg-blue-200 flex items-center
                                            justify-center text-blue-700 font-semibold">
                                    {event.title.chars().next().unwrap_or('N').to_string()}
                                </div>
                                <div class="flex-1">
                                    <h3 class="text-lg font-semibold text-gray-800">
                                        {event.title.clone()}
                                    </h3>
                                    <p class="text-sm text-gray-600 mt-1">{event.message.clone()}</p>
                                    <p class="text-xs text-gray-400 mt-2">
                                        {event.received_at.format("%H:%M:%S").to_string()}
                                    </p>
                                </div>
                            </div>
                        </div>
                    }).collect_view()
                }
            }}
        </div>
    }
}
