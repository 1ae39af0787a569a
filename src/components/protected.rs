//! Route Guard
//!
//! Wraps authenticated-only views. Without a session the guard renders a
//! redirect to the login screen; the protected child is never mounted, not
//! even momentarily.

use leptos::*;
use leptos_router::Redirect;

use crate::state::SessionState;

/// Gate for authenticated-only routes
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}
