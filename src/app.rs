//! App Root Component
//!
//! Routing and the session context. A restored session is validated against
//! the API once at startup; if that fails the session store has already
//! dropped back to anonymous.

use leptos::*;
use leptos_router::*;

use crate::components::{Header, Protected, Toast};
use crate::pages::{
    BookingDetail, ChefProfile, ChefSearch, Dashboard, EditProfile, Home, Login, Register,
};
use crate::state::{provide_session_state, SessionState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide session state to all components
    provide_session_state();

    let session = use_context::<SessionState>().expect("SessionState not found");

    // Validate a session restored from storage
    let session_for_refresh = session.clone();
    create_effect(move |_| {
        if session_for_refresh.token.get_untracked().is_none() {
            return;
        }
        let session = session_for_refresh.clone();
        spawn_local(async move {
            // a failure already logged us out; nothing more to do here
            if let Err(e) = session.refresh_current_user().await {
                web_sys::console::error_1(&format!("Session expired: {}", e).into());
            }
        });
    });

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Header />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/register" view=Register />
                        <Route path="/login" view=Login />
                        <Route path="/chefs" view=ChefSearch />
                        <Route path="/chef/:id" view=ChefProfile />
                        <Route path="/dashboard" view=|| view! {
                            <Protected>
                                <Dashboard />
                            </Protected>
                        } />
                        <Route path="/booking/:id" view=|| view! {
                            <Protected>
                                <BookingDetail />
                            </Protected>
                        } />
                        <Route path="/profile/edit" view=|| view! {
                            <Protected>
                                <EditProfile />
                            </Protected>
                        } />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🍳"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-orange-600 hover:bg-orange-700 rounded-lg font-medium transition-colors"
            >
                "Back to Home"
            </A>
        </div>
    }
}
