//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route as RouteDef, Router, Routes},
};

use crate::components::transition_shell::TransitionShell;
use crate::config::{API_BASE_URL_META, ClientConfig, LOG_LEVEL_META, REQUEST_TIMEOUT_MS_META};
use crate::routes::Route;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The client config is rendered as `<meta>` tags so the browser bundle picks
/// up the same values the host was started with.
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    let timeout_ms = config.request_timeout_ms().to_string();
    let log_level = config.log_level.as_str().to_ascii_lowercase();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_URL_META content=config.api_base_url.clone()/>
                <meta name=REQUEST_TIMEOUT_MS_META content=timeout_ms/>
                <meta name=LOG_LEVEL_META content=log_level/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Every screen renders inside `TransitionShell`; the child routes only exist
/// so the router (and the SSR route list) knows the three paths. Unknown
/// paths render nothing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::from_document);
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Portal"/>

        <Router>
            <Routes fallback=|| ()>
                <ParentRoute path=StaticSegment("") view=TransitionShell>
                    <RouteDef path=StaticSegment(Route::Home.segment()) view=|| ()/>
                    <RouteDef path=StaticSegment(Route::Login.segment()) view=|| ()/>
                    <RouteDef path=StaticSegment(Route::Signup.segment()) view=|| ()/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
