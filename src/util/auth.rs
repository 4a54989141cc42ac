//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected screens apply identical unauthenticated redirect behavior, so the
//! mount-time session check lives here instead of in each page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Access, SessionStore, check_access};

/// Check the stored session once the screen mounts in the browser and
/// redirect when there is none. The decision is published into `access`;
/// it stays `None` during server rendering, where storage is unreachable.
pub fn install_session_guard<F>(access: RwSignal<Option<Access>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let decision = check_access(&SessionStore::browser());
        if let Access::Redirect(route) = &decision {
            log::info!("no session, redirecting to {}", route.path());
            navigate(route.path(), NavigateOptions::default());
        }
        access.set(Some(decision));
    });
}
