//! Public User Profile Page
//!
//! Another user's public profile, with admin controls for staff viewers:
//! edit names/bio, toggle the staff flag, reset the avatar, delete the
//! account (confirmed).

use leptos::*;
use leptos_router::*;

use crate::api::models::ApiUser;
use crate::api::users::{self, AdminUserUpdate};
use crate::api::resolve_media_url;
use crate::components::confirm::use_confirm;
use crate::components::{use_toasts, Loading};
use crate::state::remote::{load_into, Remote};
use crate::state::use_session;

/// Public user profile page
#[component]
pub fn UserProfilePage() -> impl IntoView {
    let params = use_params_map();
    let user_id = move || {
        params.with(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()))
    };

    let session = use_session();
    let is_admin = move || session.user.get().map(|u| u.is_staff).unwrap_or(false);

    let profile = create_rw_signal(Remote::<ApiUser>::default());
    create_effect(move |_| {
        if let Some(id) = user_id() {
            load_into(profile, users::profile(id));
        }
    });

    let refetch = move || {
        if let Some(id) = user_id() {
            load_into(profile, users::profile(id));
        }
    };

    view! {
        <div class="flex-1 p-10 max-w-3xl mx-auto w-full">
            {move || match profile.get() {
                Remote::Idle | Remote::Loading => view! { <Loading /> }.into_view(),
                Remote::Failed(message) => view! {
                    <p class="text-red-600">"Couldn't load the profile: "{message}</p>
                }.into_view(),
                Remote::Ready(user) => {
                    let admin = is_admin();
                    view! {
                        <ProfileCard user=user.clone() />
                        {admin.then(|| view! {
                            <AdminControls user=user.clone() on_change=refetch />
                        })}
                    }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn ProfileCard(user: ApiUser) -> impl IntoView {
    let avatar = resolve_media_url(user.avatar.as_deref());
    let chat_href = format!("/app/chat/{}", user.id);

    view! {
        <div class="bg-white rounded-2xl shadow-lg p-8 mb-8">
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
                    <h1 class="text-3xl font-semibold text-gray-800">{user.display_name()}</h1>
                    <p class="text-gray-500">"@"{user.username.clone()}</p>
                    <p class="text-sm text-gray-500 mt-1">{user.display_points()}" points"</p>
                    {user.is_staff.then(|| view! {
                        <span class="inline-block mt-1 bg-purple-100 text-purple-700 text-xs
                                     px-2 py-0.5 rounded-full font-medium">
                            "Staff"
                        </span>
                    })}
                </div>
                <A
                    href=chat_href
                    class="bg-blue-600 text-white px-5 py-2 rounded-lg hover:bg-blue-700"
                >
                    "Chat"
                </A>
            </div>

            {(!user.bio.is_empty()).then(|| view! {
                <p class="text-gray-700 mt-6">{user.bio.clone()}</p>
            })}
        </div>
    }
}

/// Staff-only account management.
#[component]
fn AdminControls(user: ApiUser, on_change: impl Fn() + Copy + 'static) -> impl IntoView {
    let toasts = use_toasts();
    let confirm = use_confirm();
    let navigate = use_navigate();

    let id = user.id;
    let (first_name, set_first_name) = create_signal(user.first_name.clone());
    let (last_name, set_last_name) = create_signal(user.last_name.clone());
    let (bio, set_bio) = create_signal(user.bio.clone());
    let (staff, set_staff) = create_signal(user.is_staff);
    let (busy, set_busy) = create_signal(false);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_busy.set(true);
        let payload = AdminUserUpdate {
            first_name: Some(first_name.get_untracked()),
            last_name: Some(last_name.get_untracked()),
            bio: Some(bio.get_untracked()),
            is_staff: Some(staff.get_untracked()),
            reset_avatar: None,
        };
        spawn_local(async move {
            match users::admin_update(id, &payload).await {
                Ok(_) => {
                    toasts.success("Profile updated");
                    on_change();
                }
                Err(e) => toasts.error(e.to_string()),
            }
            set_busy.set(false);
        });
    };

    let reset_avatar = move |_| {
        set_busy.set(true);
        let payload = AdminUserUpdate {
            reset_avatar: Some(true),
            ..Default::default()
        };
        spawn_local(async move {
            match users::admin_update(id, &payload).await {
                Ok(_) => {
                    toasts.success("Avatar reset");
                    on_change();
                }
                Err(e) => toasts.error(e.to_string()),
            }
            set_busy.set(false);
        });
    };

    let delete = move |_| {
        let navigate = navigate.clone();
        confirm.request(
            "Delete user",
            "Delete this user? This action is permanent.",
            move || {
                let navigate = navigate.clone();
                spawn_local(async move {
                    match users::admin_delete(id).await {
                        Ok(_) => {
                            toasts.success("User deleted");
                            navigate("/app/friends", Default::default());
                        }
                        Err(e) => toasts.error(e.to_string()),
                    }
                });
            },
        );
    };

    view! {
        <section class="bg-white rounded-2xl shadow-md p-6">
            <h2 class="text-xl font-semibold text-gray-800 mb-4">"Admin controls"</h2>

            <form on:submit=save class="space-y-4">
                <div class="grid grid-cols-2 gap-4">
                    <input
                        type="text"
                        placeholder="First name"
                        prop:value=move || first_name.get()
                        on:input=move |ev| set_first_name.set(event_target_value(&ev))
                        class="bg-gray-50 rounded-lg px-3 py-2 border border-gray-300 text-sm
                               focus:border-blue-500 focus:outline-none"
                    />
                    <input
                        type="text"
                        placeholder="Last name"
                        prop:value=move || last_name.get()
                        on:input=move |ev| set_last_name.set(event_target_value(&ev))
                        class="bg-gray-50 rounded-lg px-3 py-2 border border-gray-300 text-sm
                               focus:border-blue-500 focus:outline-none"
                    />
                </div>

                <textarea
                    placeholder="Bio"
                    prop:value=move || bio.get()
                    on:input=move |ev| set_bio.set(event_target_value(&ev))
                    class="w-full bg-gray-50 rounded-lg px-3 py-2 border border-gray-300 text-sm h-20
                           focus:border-blue-500 focus:outline-none"
                />

                <label class="flex items-center space-x-2 text-sm text-gray-700">
                    <input
                        type="checkbox"
                        prop:checked=move || staff.get()
                        on:change=move |ev| set_staff.set(event_target_checked(&ev))
                    />
                    <span>"Staff member"</span>
                </label>

                <div class="flex space-x-3">
                    <button
                        type="submit"
                        disabled=move || busy.get()
                        class="px-5 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                               text-white rounded-lg text-sm font-medium transition-colors"
                    >
                        "Save"
                    </button>
                    <button
                        type="button"
                        on:click=reset_avatar
                        disabled=move || busy.get()
                        class="px-5 py-2 bg-gray-200 hover:bg-gray-300 disabled:opacity-50
                               text-gray-700 rounded-lg text-sm font-medium transition-colors"
                    >
                        "Reset avatar"
                    </button>
                    <button
                        type="button"
                        on:click=delete
                        disabled=move || busy.get()
                        class="px-5 py-2 bg-red-600 hover:bg-red-700 disabled:opacity-50
                               text-white rounded-lg text-sm font-medium transition-colors ml-auto"
                    >
                        "Delete user"
                    </button>
                </div>
            </form>
        </section>
    }
}
