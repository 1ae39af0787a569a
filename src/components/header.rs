//! Header Component
//!
//! Top navigation bar. Links change with the session: anonymous visitors
//! get login/signup, authenticated users get dashboard, profile and logout.

use leptos::*;
use leptos_router::*;

use crate::state::SessionState;

/// Navigation header component
#[component]
pub fn Header() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let navigate = use_navigate();

    let session_for_logout = session.clone();
    let on_logout = move |_| {
        session_for_logout.logout();
        navigate("/", Default::default());
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"👨‍🍳"</span>
                        <span class="text-xl font-bold text-white">"CookSup"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Home" />
                        <NavLink href="/chefs" label="Find Chefs" />

                        {
                            let session = session.clone();
                            move || {
                                if session.is_authenticated() {
                                    let first_name = session.user.with(|u| {
                                        u.as_ref().map(|u| u.first_name.clone()).unwrap_or_default()
                                    });
                                    let logout = on_logout.clone();
                                    view! {
                                        <NavLink href="/dashboard" label="Dashboard" />
                                        <NavLink href="/profile/edit" label="My Profile" />
                                        <button
                                            on:click=logout
                                            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                                        >
                                            "Logout"
                                        </button>
                                        <span class="pl-2 text-sm text-gray-400">{first_name}</span>
                                    }.into_view()
                                } else {
                                    view! {
                                        <NavLink href="/login" label="Login" />
                                        <A
                                            href="/register"
                                            class="ml-2 px-4 py-2 bg-orange-600 hover:bg-orange-700 rounded-lg text-white font-medium transition-colors"
                                        >
                                            "Sign Up"
                                        </A>
                                    }.into_view()
                                }
                            }
                        }
                    </div>
                </div>
            </div>
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
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
