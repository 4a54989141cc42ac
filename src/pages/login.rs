//! Login page: email + password against `/api/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{FormField, SubmitError};
use crate::config::ClientConfig;
use crate::net::api::{ApiError, RequestScope};
use crate::net::types::{Credentials, LoginReply};
use crate::routes::Route;
use crate::state::form::FormState;
use crate::state::session::{Session, SessionStore};
use crate::util::storage::KeyValueStore;
use crate::validation::login::LoginField;

pub const LOGIN_FAILED: &str = "Login failed";

/// Fold a finished login request into the form and the session store.
///
/// Returns the route to navigate to, if any. A reply without a token leaves
/// the user on the form; a token without a display name is treated as a
/// failure so a half session is never stored.
pub fn apply_login_result<S: KeyValueStore>(
    form: &mut FormState<Credentials>,
    result: Result<LoginReply, ApiError>,
    store: &SessionStore<S>,
) -> Option<Route> {
    let reply = match result {
        Ok(reply) => reply,
        Err(err) => {
            log::info!("login failed: {err}");
            form.fail(err.user_message(LOGIN_FAILED));
            return None;
        }
    };

    let Some(token) = reply.token.filter(|t| !t.is_empty()) else {
        form.complete();
        return None;
    };
    let Some(user_name) = reply.user_name.filter(|n| !n.is_empty()) else {
        log::warn!("login reply carried a token but no userName");
        form.fail(LOGIN_FAILED);
        return None;
    };

    if let Err(err) = store.write(&Session { token, user_name }) {
        log::warn!("could not persist session: {err}");
        form.fail(LOGIN_FAILED);
        return None;
    }

    form.succeed();
    Some(Route::Home)
}

#[must_use]
pub fn submit_label(busy: bool) -> &'static str {
    if busy { "Logging in..." } else { "Login" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(FormState::<Credentials>::default());
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let navigate = use_navigate();
    let scope = RequestScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(FormState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let scope = scope.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&config, &scope, &credentials).await;
                if matches!(result, Err(ApiError::Cancelled)) {
                    return;
                }
                let store = SessionStore::browser();
                let next = form.try_update(|state| apply_login_result(state, result, &store)).flatten();
                if let Some(route) = next {
                    navigate(route.path(), NavigateOptions::default());
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, &config, &scope, &navigate);
        }
    };

    let busy = move || form.with(FormState::is_busy);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-title">"Login"</h2>
                <form novalidate=true on:submit=on_submit>
                    <FormField
                        form=form
                        field=LoginField::Email
                        label="Email"
                        input_type="email"
                        placeholder="enter your email..."
                    />
                    <FormField
                        form=form
                        field=LoginField::Password
                        label="Password"
                        input_type="password"
                        placeholder="enter your password..."
                    />
                    <SubmitError form=form/>
                    <button type="submit" class="btn btn-primary w-100" disabled=busy>
                        {move || submit_label(busy())}
                    </button>
                </form>
                <p class="auth-switch">
                    "Don't have an account? "
                    <A href=Route::Signup.path()>"Sign up for free"</A>
                </p>
            </div>
        </div>
    }
}
