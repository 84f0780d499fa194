//! App Root Component
//!
//! Routing plus the global providers: session, notifications, toast and
//! confirm stores. The session rehydrates from storage before the router
//! makes its first decision.

use leptos::*;
use leptos_router::*;

use crate::components::{
    provide_confirm, provide_toasts, ConfirmHost, Navbar, NotificationsSocket, ProtectedLayout,
    ToastHost,
};
use crate::pages::{
    AlbumCreatePage, AlbumDetailPage, AlbumEditPage, AlbumsPage, CalendarPage, ChatPage,
    FriendsPage, HomePage, LoginPage, MapPage, NotificationsPage, ProfileEditPage, ProfilePage,
    RankingPage, RegisterPage, SocialCallbackPage, StickerDetailPage, UnlockPage, UserProfilePage,
};
use crate::state::notifications::provide_notifications;
use crate::state::session::provide_session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_session();
    provide_notifications();
    provide_toasts();
    provide_confirm();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100 font-sans text-gray-900 flex flex-col">
                <Navbar />

                // One notifications socket per authenticated tab
                <NotificationsSocket />

                <main class="flex-1 flex flex-col">
                    <Routes>
                        <Route path="/" view=HomePage />
                        <Route path="/login" view=LoginPage />
                        <Route path="/register" view=RegisterPage />
                        <Route path="/auth/callback" view=SocialCallbackPage />

                        <Route path="/app" view=ProtectedLayout>
                            <Route path="" view=AlbumsPage />
                            <Route path="albums" view=AlbumsPage />
                            <Route path="albums/create" view=AlbumCreatePage />
                            <Route path="albums/:id" view=AlbumDetailPage />
                            <Route path="albums/:id/edit" view=AlbumEditPage />
                            <Route path="albums/:id/unlock" view=UnlockPage />
                            <Route path="stickers/:sid" view=StickerDetailPage />
                            <Route path="map" view=MapPage />
                            <Route path="calendar" view=CalendarPage />
                            <Route path="ranking" view=RankingPage />
                            <Route path="friends" view=FriendsPage />
                            <Route path="chat/:id" view=ChatPage />
                            <Route path="profile" view=ProfilePage />
                            <Route path="profile/edit" view=ProfileEditPage />
                            <Route path="users/:id" view=UserProfilePage />
                            <Route path="notifications" view=NotificationsPage />
                        </Route>

                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Overlays
                <ToastHost />
                <ConfirmHost />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page not found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg
                       font-medium transition-colors"
            >
                "Back to home"
            </A>
        </div>
    }
}
