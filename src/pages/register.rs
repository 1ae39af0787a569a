//! Registration Page
//!
//! Sign-up form for client and chef accounts.

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::api::types::RegisterForm;
use crate::state::SessionState;

/// Registration form component
#[component]
pub fn Register() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (first_name, set_first_name) = create_signal(String::new());
    let (last_name, set_last_name) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (user_type, set_user_type) = create_signal("client".to_string());
    let (location, set_location) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let session_for_submit = session.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = RegisterForm {
            email: email.get(),
            password: password.get(),
            first_name: first_name.get(),
            last_name: last_name.get(),
            phone: phone.get(),
            user_type: user_type.get(),
            location: location.get(),
        };

        if form.email.is_empty() || form.password.is_empty() || form.first_name.is_empty() {
            session_for_submit.show_error("Email, password and first name are required");
            return;
        }

        set_submitting.set(true);

        let session = session_for_submit.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match session.register(&form).await {
                Ok(user) => {
                    session.show_success(&format!("Welcome to CookSup, {}!", user.first_name));
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
        <div class="max-w-lg mx-auto bg-gray-800 rounded-xl p-8 mt-8">
            <h1 class="text-2xl font-bold mb-6">"Create Your Account"</h1>

            <form on:submit=on_submit class="space-y-4">
                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"First Name"</label>
                        <input
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| set_first_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Last Name"</label>
                        <input
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| set_last_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        />
                    </div>
                </div>

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

                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Phone"</label>
                        <input
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Location"</label>
                        <input
                            type="text"
                            placeholder="e.g., New York, NY"
                            prop:value=move || location.get()
                            on:input=move |ev| set_location.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        />
                    </div>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"I am a"</label>
                    <select
                        on:change=move |ev| set_user_type.set(event_target_value(&ev))
                        prop:value=move || user_type.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-orange-500 focus:outline-none"
                    >
                        <option value="client">"Client - I want to book chefs"</option>
                        <option value="chef">"Chef - I want to offer my services"</option>
                    </select>
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-orange-600 hover:bg-orange-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Creating account..." } else { "Sign Up" }}
                </button>
            </form>

            <p class="text-gray-400 text-sm mt-6 text-center">
                "Already registered? "
                <A href="/login" class="text-orange-400 hover:underline">
                    "Log in"
                </A>
            </p>
        </div>
    }
}
