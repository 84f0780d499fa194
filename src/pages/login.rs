//! Login Page

use leptos::*;
use leptos_router::*;
use validator::Validate;

use crate::api::{auth, client};
use crate::components::use_toasts;
use crate::state::session::StoredSession;
use crate::state::use_session;
use crate::validation::{first_error, LoginInput};

/// Login form page
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let input = LoginInput {
            username: username.get(),
            password: password.get(),
        };
        if let Err(errors) = input.validate() {
            toasts.error(first_error(&errors));
            return;
        }

        set_submitting.set(true);
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth::login(&input.username, &input.password).await {
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
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex-1 flex items-center justify-center p-10 min-h-[70vh]">
            <div class="bg-white rounded-2xl shadow-lg p-8 w-full max-w-md">
                <h1 class="text-2xl font-semibold text-gray-800 mb-6">"Log in"</h1>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-500 mb-2">"Username"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-50 rounded-lg px-4 py-3 border border-gray-300
                                   focus:border-blue-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-500 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-50 rounded-lg px-4 py-3 border border-gray-300
                                   focus:border-blue-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                               text-white rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Signing in..." } else { "Log in" }}
                    </button>
                </form>

                <div class="mt-4">
                    <a
                        href=client::endpoint("/auth/google/login/")
                        class="block text-center w-full py-3 bg-gray-100 hover:bg-gray-200
                               text-gray-700 rounded-lg font-medium transition-colors"
                    >
                        "Continue with Google"
                    </a>
                </div>

                <p class="text-sm text-gray-500 mt-6 text-center">
                    "No account yet? "
                    <A href="/register" class="text-blue-600 hover:underline">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
