//! Route guard for screens that need a logged-in user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Access, Session};
use crate::util::auth::install_session_guard;

/// Renders `render(session)` when a session is stored; otherwise renders
/// nothing and redirects to the login screen.
#[component]
pub fn RequireSession<F, IV>(render: F) -> impl IntoView
where
    F: Fn(Session) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let access = RwSignal::new(None::<Access>);
    install_session_guard(access, use_navigate());

    move || match access.get() {
        Some(Access::Granted(session)) => Some(render(session)),
        Some(Access::Redirect(_)) | None => None,
    }
}
