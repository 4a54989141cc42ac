//! Crossfading screen host.
//!
//! Mounted once as the parent route; watches the location and keeps the
//! outgoing screen alive next to the incoming one until the fade completes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::pages::{home::HomePage, login::LoginPage, signup::SignupPage};
use crate::routes::Route;
use crate::state::transition::TransitionState;

fn screen(route: Route) -> AnyView {
    match route {
        Route::Home => view! { <HomePage/> }.into_any(),
        Route::Login => view! { <LoginPage/> }.into_any(),
        Route::Signup => view! { <SignupPage/> }.into_any(),
    }
}

/// Call `settle(generation)` once the fade has run.
fn schedule_settle(transition: RwSignal<TransitionState>, generation: u64) {
    #[cfg(feature = "hydrate")]
    {
        let fade = crate::state::transition::FADE_DURATION;
        let millis = u32::try_from(fade.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, move || {
            let _ = transition.try_update(|state| state.settle(generation));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        transition.update(|state| state.settle(generation));
    }
}

#[component]
pub fn TransitionShell() -> impl IntoView {
    let location = use_location();
    let transition = RwSignal::new(TransitionState::new(&location.pathname.get_untracked()));

    Effect::new(move || {
        let path = location.pathname.get();
        let mut started = None;
        transition.update(|state| started = state.navigate(&path));
        if let Some(generation) = started {
            log::debug!("route transition {generation} to {path}");
            schedule_settle(transition, generation);
        }
    });

    view! {
        <div class="route-stack">
            <For
                each=move || {
                    transition.with(|state| {
                        state.layers().iter().map(|layer| (layer.key, layer.route)).collect::<Vec<_>>()
                    })
                }
                key=|(key, _)| *key
                children=move |(key, route)| {
                    let class = move || transition.with(|state| state.class_for(key));
                    view! { <div class=class>{route.map(screen)}</div> }
                }
            />
        </div>
    }
}
