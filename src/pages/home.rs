//! Landing page shown after login.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::require_session::RequireSession;
use crate::state::session::{Session, SessionStore, logout};

#[must_use]
pub fn welcome_message(session: &Session) -> String {
    format!("Welcome, {}!", session.user_name)
}

/// Home page. Visitors without a stored session are sent to `/login`.
#[component]
pub fn HomePage() -> impl IntoView {
    view! { <RequireSession render=|session: Session| view! { <Welcome session=session/> }/> }
}

#[component]
fn Welcome(session: Session) -> impl IntoView {
    let navigate = use_navigate();
    let on_logout = move |_| {
        let next = logout(&SessionStore::browser());
        navigate(next.path(), NavigateOptions::default());
    };

    view! {
        <div class="home-page">
            <div class="card">
                <h2 class="card-title">{welcome_message(&session)}</h2>
                <p>"You have successfully logged in."</p>
                <button class="btn btn-primary" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </div>
    }
}
