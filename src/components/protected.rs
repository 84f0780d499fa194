//! Protected Route Gate
//!
//! Boundary for every route that needs a session. No token: redirect to the
//! public entry route. Token without a resolved user: trigger one idempotent
//! profile fetch and hold rendering until it lands. A failed fetch logs out,
//! which flips the gate to the redirect arm; that is the only automatic
//! session termination besides explicit user action.

use leptos::*;
use leptos_router::*;

use crate::components::loading::Loading;
use crate::state::use_session;

/// Layout wrapping all authenticated routes.
#[component]
pub fn ProtectedLayout() -> impl IntoView {
    let session = use_session();
    let token = session.token;
    let user = session.user;
    let loading_profile = session.loading_profile;

    // Hydrate the stale rehydrated profile. The store's in-flight guard
    // keeps simultaneously mounted consumers down to one network call.
    let session_for_effect = session.clone();
    create_effect(move |_| {
        if token.get().is_some() && user.get().is_none() && !loading_profile.get() {
            let session = session_for_effect.clone();
            spawn_local(async move {
                session.fetch_profile().await;
            });
        }
    });

    view! {
        {move || {
            if token.get().is_none() {
                view! { <Redirect path="/" /> }.into_view()
            } else if user.get().is_none() {
                view! { <Loading /> }.into_view()
            } else {
                view! { <Outlet /> }.into_view()
            }
        }}
    }
}
