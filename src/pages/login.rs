//! Login Page

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::state::SessionState;

/// Credential login form
#[component]
pub fn Login() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let session_for_submit = session.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email = email.get();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            session_for_submit.show_error("Email and password are required");
            return;
        }

        set_submitting.set(true);

        let session = session_for_submit.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match session.login(&email, &password).await {
                Ok(user) => {
                    session.show_success(&format!("Welcome back, {}!", user.first_name));
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    session.show_error(&e.detail());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-8 mt-8">
            <h1 class="text-2xl font-bold mb-6">"Log In"</h1>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-orange-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-orange-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-orange-600 hover:bg-orange-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Logging in..." } else { "Log In" }}
                </button>
            </form>

            <p class="text-gray-400 text-sm mt-6 text-center">
                "No account yet? "
                <A href="/register" class="text-orange-400 hover:underline">
                    "Sign up"
                </A>
            </p>
        </div>
    }
}
