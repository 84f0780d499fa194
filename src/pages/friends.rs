//! Friends Page
//!
//! Accepted friends, the member directory and pending requests in three
//! tabs. Every action mutates on the server, then refetches the affected
//! lists.

use leptos::*;
use leptos_router::*;

use crate::api::friends;
use crate::api::models::{request_status, FriendRequest, Member};
use crate::api::resolve_media_url;
use crate::components::confirm::use_confirm;
use crate::components::{use_toasts, ListSkeleton};
use crate::state::remote::{load_into, Remote};
use crate::state::use_session;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Friends,
    Members,
    Requests,
}

/// Friends page component
#[component]
pub fn FriendsPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let confirm = use_confirm();

    let (tab, set_tab) = create_signal(Tab::Friends);

    let friend_list = create_rw_signal(Remote::<Vec<Member>>::default());
    let member_list = create_rw_signal(Remote::<Vec<Member>>::default());
    let request_list = create_rw_signal(Remote::<Vec<FriendRequest>>::default());

    let refetch = move || {
        load_into(friend_list, friends::friends());
        load_into(member_list, friends::members());
        load_into(request_list, friends::requests());
    };
    create_effect(move |_| refetch());

    let viewer_id = move || session.user.get().map(|u| u.id).unwrap_or_default();

    let send_request = move |to_user: i64| {
        spawn_local(async move {
            match friends::send_request(to_user).await {
                Ok(_) => {
                    toasts.success("Friend request sent");
                    refetch();
                }
                Err(e) => toasts.error(e.to_string()),
            }
        });
    };

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

    let cancel = move |id: i64| {
        spawn_local(async move {
            match friends::cancel(id).await {
                Ok(_) => {
                    toasts.success("Request cancelled");
                    refetch();
                }
                Err(e) => toasts.error(e.to_string()),
            }
        });
    };

    let remove = move |request_id: i64, username: String| {
        confirm.request(
            "Remove friend",
            format!("Remove {} from your friends?", username),
            move || {
                spawn_local(async move {
                    match friends::remove(request_id).await {
                        Ok(_) => {
                            toasts.success("Friend removed");
                            refetch();
                        }
                        Err(e) => toasts.error(e.to_string()),
                    }
                });
            },
        );
    };

    view! {
        <div class="flex-1 p-10 max-w-5xl mx-auto w-full">
            <h2 class="text-3xl font-semibold text-gray-800 mb-6">"Friends"</h2>

            <div class="flex space-x-2 mb-8">
                <TabButton label="Your friends" active=move || tab.get() == Tab::Friends
                    on_click=move |_| set_tab.set(Tab::Friends) />
                <TabButton label="Find people" active=move || tab.get() == Tab::Members
                    on_click=move |_| set_tab.set(Tab::Members) />
                <TabButton label="Requests" active=move || tab.get() == Tab::Requests
                    on_click=move |_| set_tab.set(Tab::Requests) />
            </div>

            {move || match tab.get() {
                Tab::Friends => view! {
                    <FriendsTab
                        friends=friend_list
                        on_remove=remove
                    />
                }.into_view(),
                Tab::Members => view! {
                    <MembersTab
                        members=member_list
                        viewer_id=Signal::derive(viewer_id)
                        on_request=send_request
                    />
                }.into_view(),
                Tab::Requests => view! {
                    <RequestsTab
                        requests=request_list
                        viewer_id=Signal::derive(viewer_id)
                        on_accept=accept
                        on_reject=reject
                        on_cancel=cancel
                    />
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    active: impl Fn() -> bool + 'static,
    on_click: impl FnMut(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=on_click
            class=move || {
                if active() {
                    "px-4 py-2 rounded-lg bg-blue-600 text-white font-medium"
                } else {
                    "px-4 py-2 rounded-lg bg-white text-gray-600 hover:bg-gray-100 font-medium"
                }
            }
        >
            {label}
        </button>
    }
}

#[component]
fn MemberChip(member: Member) -> impl IntoView {
    let avatar = resolve_media_url(member.avatar.as_deref());
    let href = format!("/app/users/{}", member.id);
    let points = member.display_points();
    let name = if member.first_name.is_empty() {
        member.username.clone()
    } else {
        format!("{} {}", member.first_name, member.last_name).trim().to_string()
    };

    view! {
        {match avatar {
            Some(src) => view! {
                <img src=src alt="" class="w-14 h-14 rounded-full object-cover" />
            }.into_view(),
            None => view! {
                <div class="w-14 h-14 rounded-full bg-gray-200 flex items-center justify-center text-xl">
                    "👤"
                </div>
            }.into_view(),
        }}
        <div class="flex-1 ml-4">
            <A href=href class="text-lg font-semibold text-gray-800 hover:text-blue-600">
                {name}
            </A>
            <p class="text-sm text-gray-500">{points}" points"</p>
        </div>
    }
}

#[component]
fn FriendsTab(
    friends: RwSignal<Remote<Vec<Member>>>,
    on_remove: impl Fn(i64, String) + Copy + 'static,
) -> impl IntoView {
    view! {
        {move || match friends.get() {
            Remote::Idle | Remote::Loading => view! { <ListSkeleton count=3 /> }.into_view(),
            Remote::Failed(message) => view! {
                <p class="text-red-600">"Couldn't load your friends: "{message}</p>
            }.into_view(),
            Remote::Ready(items) => {
                if items.is_empty() {
                    view! {
                        <p class="text-gray-500 text-center py-12">
                            "No friends yet. Find people in the directory!"
                        </p>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid md:grid-cols-2 gap-6">
                            {items.into_iter().map(|member| {
                                let chat_href = format!("/app/chat/{}", member.id);
                                let username = member.username.clone();
                                let request_id = member.request_id;
                                view! {
                                    <div class="bg-white p-5 rounded-xl shadow-md flex items-center hover:shadow-lg transition">
                                        <MemberChip member=member />
                                        <div class="flex flex-col space-y-2">
                                            <A
                                                href=chat_href
                                                class="px-4 py-1 bg-blue-600 text-white rounded-lg text-sm text-center hover:bg-blue-700"
                                            >
                                                "Chat"
                                            </A>
                                            {request_id.map(|id| {
                                                let username = username.clone();
                                                view! {
                                                    <button
                                                        class="px-4 py-1 bg-gray-200 text-gray-700 rounded-lg text-sm hover:bg-gray-300"
                                                        on:click=move |_| on_remove(id, username.clone())
                                                    >
                                                        "Remove"
                                                    </button>
                                                }
                                            })}
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }
        }}
    }
}

#[component]
fn MembersTab(
    members: RwSignal<Remote<Vec<Member>>>,
    viewer_id: Signal<i64>,
    on_request: impl Fn(i64) + Copy + 'static,
) -> impl IntoView {
    view! {
        {move || match members.get() {
            Remote::Idle | Remote::Loading => view! { <ListSkeleton count=4 /> }.into_view(),
            Remote::Failed(message) => view! {
                <p class="text-red-600">"Couldn't load the directory: "{message}</p>
            }.into_view(),
            Remote::Ready(items) => {
                let others: Vec<Member> = items
                    .into_iter()
                    .filter(|m| m.id != viewer_id.get())
                    .collect();
                view! {
                    <div class="grid md:grid-cols-2 gap-6">
                        {others.into_iter().map(|member| {
                            let id = member.id;
                            let relation = member.relation.clone().unwrap_or_default();
                            view! {
                                <div class="bg-white p-5 rounded-xl shadow-md flex items-center hover:shadow-lg transition">
                                    <MemberChip member=member />
                                    {match relation.as_str() {
                                        "friends" => view! {
                                            <span class="text-sm text-green-600 font-medium">"Friends"</span>
                                        }.into_view(),
                                        "pending_sent" => view! {
                                            <span class="text-sm text-gray-500">"Request sent"</span>
                                        }.into_view(),
                                        "pending_received" => view! {
                                            <span class="text-sm text-gray-500">"Wants to connect"</span>
                                        }.into_view(),
                                        _ => view! {
                                            <button
                                                class="px-4 py-1 bg-blue-600 text-white rounded-lg text-sm hover:bg-blue-700"
                                                on:click=move |_| on_request(id)
                                            >
                                                "Add friend"
                                            </button>
                                        }.into_view(),
                                    }}
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_view()
            }
        }}
    }
}

#[component]
fn RequestsTab(
    requests: RwSignal<Remote<Vec<FriendRequest>>>,
    viewer_id: Signal<i64>,
    on_accept: impl Fn(i64) + Copy + 'static,
    on_reject: impl Fn(i64) + Copy + 'static,
    on_cancel: impl Fn(i64) + Copy + 'static,
) -> impl IntoView {
    view! {
        {move || match requests.get() {
            Remote::Idle | Remote::Loading => view! { <ListSkeleton count=2 /> }.into_view(),
            Remote::Failed(message) => view! {
                <p class="text-red-600">"Couldn't load the requests: "{message}</p>
            }.into_view(),
            Remote::Ready(items) => {
                let pending: Vec<FriendRequest> = items
                    .into_iter()
                    .filter(|r| r.status == request_status::PENDING)
                    .collect();
                if pending.is_empty() {
                    view! {
                        <p class="text-gray-500 text-center py-12">"No pending requests."</p>
                    }.into_view()
                } else {
                    view! {
                        <div class="space-y-4">
                            {pending.into_iter().map(|request| {
                                let id = request.id;
                                let incoming = request.to_user.id == viewer_id.get();
                                let other = if incoming {
                                    request.from_user.clone()
                                } else {
                                    request.to_user.clone()
                                };
                                view! {
                                    <div class="bg-white p-5 rounded-xl shadow-md flex items-center">
                                        <MemberChip member=other />
                                        {if incoming {
                                            view! {
                                                <div class="flex space-x-3">
                                                    <button
                                                        class="px-4 py-1 bg-blue-600 text-white rounded-lg text-sm hover:bg-blue-700"
                                                        on:click=move |_| on_accept(id)
                                                    >
                                                        "Accept"
                                                    </button>
                                                    <button
                                                        class="px-4 py-1 bg-gray-300 text-gray-700 rounded-lg text-sm hover:bg-gray-400"
                                                        on:click=move |_| on_reject(id)
                                                    >
                                                        "Reject"
                                                    </button>
                                                </div>
                                            }.into_view()
                                        } else {
                                            view! {
                                                <button
                                                    class="px-4 py-1 bg-gray-200 text-gray-700 rounded-lg text-sm hover:bg-gray-300"
                                                    on:click=move |_| on_cancel(id)
                                                >
                                                    "Cancel"
                                                </button>
                                            }.into_view()
                                        }}
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }
        }}
    }
}
