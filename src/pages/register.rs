//! Registration Page

use leptos::*;
use leptos_router::*;
use validator::Validate;

use crate::api::auth::{self, RegisterPayload};
use crate::components::use_toasts;
use crate::validation::{first_error, RegisterInput};

/// Registration form page
#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (first_name, set_first_name) = create_signal(String::new());
    let (last_name, set_last_name) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (password_confirm, set_password_confirm) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let input = RegisterInput {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            password_confirm: password_confirm.get(),
            first_name: first_name.get(),
            last_name: last_name.get(),
        };
        if let Err(errors) = input.validate() {
            toasts.error(first_error(&errors));
            return;
        }

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let payload = RegisterPayload {
                username: input.username,
                email: input.email,
                password: input.password,
                password_confirm: input.password_confirm,
                first_name: input.first_name,
                last_name: input.last_name,
            };
            match auth::register(&payload).await {
                Ok(_) => {
                    toasts.success("Account created. Log in to start collecting!");
                    navigate("/login", Default::default());
                }
                Err(e) => {
                    toasts.error(e.to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex-1 flex items-center justify-center p-10">
            <div class="bg-white rounded-2xl shadow-lg p-8 w-full max-w-lg">
                <h1 class="text-2xl font-semibold text-gray-800 mb-6">"Create your account"</h1>

                <form on:submit=on_submit class="space-y-4">
                    <Field label="Username" value=username set=set_username input_type="text" />
                    <Field label="Email" value=email set=set_email input_type="email" />

                    <div class="grid grid-cols-2 gap-4">
                        <Field label="First name" value=first_name set=set_first_name input_type="text" />
                        <Field label="Last name" value=last_name set=set_last_name input_type="text" />
                    </div>

                    <Field label="Password" value=password set=set_password input_type="password" />
                    <Field
                        label="Confirm password"
                        value=password_confirm
                        set=set_password_confirm
                        input_type="password"
                    />

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                               text-white rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Creating..." } else { "Sign up" }}
                    </button>
                </form>

                <p class="text-sm text-gray-500 mt-6 text-center">
                    "Already registered? "
                    <A href="/login" class="text-blue-600 hover:underline">"Log in"</A>
                </p>
            </div>
        </div>
    }
}

#[component]
fn Field(
    label: &'static str,
    value: ReadSignal<String>,
    set: WriteSignal<String>,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-500 mb-2">{label}</label>
            <input
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| set.set(event_target_value(&ev))
                class="w-full bg-gray-50 rounded-lg px-4 py-3 border border-gray-300
                       focus:border-blue-500 focus:outline-none"
            />
        </div>
    }
}
