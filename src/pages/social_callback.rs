//! Social Login Callback Page
//!
//! Landing point after a third-party OAuth flow. The provider's identity
//! claims arrive as query parameters; they are exchanged for a session via
//! the social-login endpoint, exactly once per visit.

use leptos::*;
use leptos_router::*;

use crate::api::auth::{self, SocialLoginPayload};
use crate::components::use_toasts;
use crate::state::session::StoredSession;
use crate::state::use_session;

/// Social-login callback page
#[component]
pub fn SocialCallbackPage() -> impl IntoView {
    let query = use_query_map();
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (failed, set_failed) = create_signal(false);
    let started = store_value(false);

    create_effect(move |_| {
        if started.get_value() {
            return;
        }
        started.set_value(true);

        let provider = query
            .with_untracked(|q| q.get("provider").cloned())
            .unwrap_or_else(|| "google".to_string());
        let email = query.with_untracked(|q| q.get("email").cloned());
        let first_name = query.with_untracked(|q| q.get("first_name").cloned());
        let last_name = query.with_untracked(|q| q.get("last_name").cloned());

        let Some(email) = email.filter(|e| !e.is_empty()) else {
            set_failed.set(true);
            return;
        };

        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let payload = SocialLoginPayload {
                provider,
                email,
                first_name,
                last_name,
            };
            match auth::social_login(&payload).await {
                Ok(response) => {
                    session.set_auth(StoredSession {
                        token: Some(response.access),
                        refresh_token: Some(response.refresh),
                        user: Some(response.user),
                    });
                    navigate("/app/albums", Default::default());
                }
                Err(e) => {
                    toasts.error(e.to_string());
                    set_failed.set(true);
                }
            }
        });
    });

    view! {
        <div class="flex-1 flex flex-col items-center justify-center min-h-[60vh] text-center">
            {move || {
                if failed.get() {
                    view! {
                        <p class="text-gray-600 mb-4">"We couldn't complete the social login."</p>
                        <A href="/login" class="text-blue-600 hover:underline">"Back to login"</A>
                    }.into_view()
                } else {
                    view! {
                        <div class="loading-spinner w-8 h-8 mb-4" />
                        <p class="text-gray-500">"Completing your login..."</p>
                    }.into_view()
                }
            }}
        </div>
    }
}
