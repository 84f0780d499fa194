//! Navigation Component
//!
//! Header bar with brand, route links and the session chip.

use leptos::*;
use leptos_router::*;

use crate::api::resolve_media_url;
use crate::state::use_session;

/// Navigation header component
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let user = session.user;
    let navigate = use_navigate();

    let logout = {
        let session = session.clone();
        move |_: ev::MouseEvent| {
            session.logout();
            navigate("/", Default::default());
        }
    };

    view! {
        <nav class="bg-white shadow-md py-4 px-8 flex justify-between items-center">
            <A href="/" class="text-2xl font-bold text-blue-600">"BadgeUp"</A>

            {move || {
                user.get().map(|_| view! {
                    <ul class="flex space-x-6 text-gray-700 font-medium">
                        <NavLink href="/app/albums" label="Albums" />
                        <NavLink href="/app/ranking" label="Ranking" />
                        <NavLink href="/app/friends" label="Friends" />
                        <NavLink href="/app/map" label="Map" />
                        <NavLink href="/app/calendar" label="Calendar" />
                        <NavLink href="/app/notifications" label="Notifications" />
                    </ul>
                })
            }}

            {
                let logout = logout.clone();
                move || {
                    let logout = logout.clone();
                    match user.get() {
                        Some(user) => {
                            let avatar = resolve_media_url(user.avatar.as_deref());
                            let display_name = user.display_name();
                            let display_points = user.display_points();
                            view! {
                                <div class="flex items-center space-x-3">
                                    {avatar.map(|src| view! {
                                        <img src=src alt="Avatar" class="w-10 h-10 rounded-full border" />
                                    })}
                                    <A href="/app/profile" class="text-gray-700 font-medium hover:text-blue-600">
                                        {display_name}
                                    </A>
                                    <span class="text-sm text-gray-500">
                                        {display_points}" pts"
                                    </span>
                                    <button
                                        class="text-sm text-gray-500 hover:text-red-600"
                                        on:click=logout
                                    >
                                        "Log out"
                                    </button>
                                </div>
                            }.into_view()
                        }
                        None => view! {
                            <div class="flex items-center space-x-3">
                                <A href="/login" class="text-gray-700 font-medium hover:text-blue-600">
                                    "Log in"
                                </A>
                                <A
                                    href="/register"
                                    class="bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700"
                                >
                                    "Sign up"
                                </A>
                            </div>
                        }.into_view(),
                    }
                }
            }
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <li>
            <A
                href=href
                class="hover:text-blue-600"
                active_class="text-blue-600 border-b-2 border-blue-600 pb-1"
            >
                {label}
            </A>
        </li>
    }
}
