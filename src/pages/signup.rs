//! Signup page: full registration form against `/api/signup`.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{FormField, SubmitError};
use crate::config::ClientConfig;
use crate::net::api::{ApiError, RequestScope};
use crate::net::types::{Registration, SignupReply};
use crate::routes::Route;
use crate::state::form::FormState;
use crate::validation::signup::SignupField;

pub const SIGNUP_FAILED: &str = "Signup failed";

/// Fold a finished signup request into the form.
///
/// Only a 201 moves on to the login screen; signing up never creates a
/// session.
pub fn apply_signup_result(form: &mut FormState<Registration>, result: Result<SignupReply, ApiError>) -> Option<Route> {
    match result {
        Ok(reply) if reply.created() => {
            form.succeed();
            Some(Route::Login)
        }
        Ok(reply) => {
            log::debug!("signup returned {} instead of 201", reply.status);
            form.complete();
            None
        }
        Err(err) => {
            log::info!("signup failed: {err}");
            form.fail(err.user_message(SIGNUP_FAILED));
            None
        }
    }
}

#[must_use]
pub fn submit_label(busy: bool) -> &'static str {
    if busy { "Creating Account..." } else { "Create Account" }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let form = RwSignal::new(FormState::<Registration>::default());
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let navigate = use_navigate();
    let scope = RequestScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(registration) = form.try_update(FormState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let scope = scope.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::signup(&config, &scope, &registration).await;
                if matches!(result, Err(ApiError::Cancelled)) {
                    return;
                }
                let next = form.try_update(|state| apply_signup_result(state, result)).flatten();
                if let Some(route) = next {
                    navigate(route.path(), NavigateOptions::default());
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (registration, &config, &scope, &navigate);
        }
    };

    let busy = move || form.with(FormState::is_busy);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-title">"Sign Up"</h2>
                <form novalidate=true on:submit=on_submit>
                    <FormField form=form field=SignupField::FullName label="Full Name"/>
                    <FormField form=form field=SignupField::Email label="Email" input_type="email"/>
                    <FormField
                        form=form
                        field=SignupField::DateOfBirth
                        label="Date of Birth (MM/DD/YY)"
                        placeholder="MM/DD/YY"
                    />
                    <FormField
                        form=form
                        field=SignupField::PhoneNumber
                        label="Phone Number (with country code)"
                        placeholder="+1 1234567890"
                    />
                    <FormField form=form field=SignupField::Password label="Password" input_type="password"/>
                    <FormField
                        form=form
                        field=SignupField::ConfirmPassword
                        label="Confirm Password"
                        input_type="password"
                    />
                    <SubmitError form=form/>
                    <button type="submit" class="btn btn-primary btn-lg w-100" disabled=busy>
                        {move || submit_label(busy())}
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <A href=Route::Login.path()>"Login"</A>
                </p>
            </div>
        </div>
    }
}
