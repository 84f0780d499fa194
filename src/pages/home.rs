//! Home Page
//!
//! Public landing with the entry points into the app.

use leptos::*;
use leptos_router::*;

use crate::state::use_session;

/// Landing page component
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let authenticated = move || session.token.get().is_some();

    view! {
        <div class="flex-1 flex flex-col items-center justify-center text-center p-10 min-h-[70vh]">
            <h1 class="text-5xl font-bold text-gray-800 mb-4">
                "Collect the world with " <span class="text-blue-600">"BadgeUp"</span>
            </h1>
            <p class="text-lg text-gray-500 max-w-2xl mb-8">
                "Browse themed albums, unlock stickers by snapping photos, climb the \
                 leaderboard and share your captures with friends."
            </p>

            {move || {
                if authenticated() {
                    view! {
                        <A
                            href="/app/albums"
                            class="bg-blue-600 text-white px-8 py-3 rounded-lg text-lg hover:bg-blue-700"
                        >
                            "Go to your albums"
                        </A>
                    }.into_view()
                } else {
                    view! {
                        <div class="flex space-x-4">
                            <A
                                href="/login"
                                class="bg-blue-600 text-white px-8 py-3 rounded-lg text-lg hover:bg-blue-700"
                            >
                                "Log in"
                            </A>
                            <A
                                href="/register"
                                class="bg-gray-200 text-gray-800 px-8 py-3 rounded-lg text-lg hover:bg-gray-300"
                            >
                                "Create an account"
                            </A>
                        </div>
                    }.into_view()
                }
            }}

            <div class="grid md:grid-cols-3 gap-6 mt-16 max-w-4xl">
                <FeatureCard icon="📒" title="Themed albums"
                    text="Curated collections, from classic cars to city landmarks." />
                <FeatureCard icon="📸" title="Photo unlocks"
                    text="Submit a photo and let the matcher decide if you earned the sticker." />
                <FeatureCard icon="🏆" title="Rankings"
                    text="Every unlock earns points. Compete with the whole community." />
            </div>
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-xl shadow-md">
            <div class="text-4xl mb-3">{icon}</div>
            <h3 class="text-lg font-semibold text-gray-800 mb-1">{title}</h3>
            <p class="text-sm text-gray-500">{text}</p>
        </div>
    }
}
