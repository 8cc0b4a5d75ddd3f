//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::PortalConfig;
use crate::pages::{error::ErrorPage, info::InfoPage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::util::token_store;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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
/// Provides the portal configuration and shared auth state, and sets up
/// client-side routing. The root path doubles as the login page, matching
/// the portal's old `""`/`/login` mapping.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(PortalConfig::default());

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Mirror the cookie store into reactive state once the client is up.
    Effect::new(move || {
        auth.update(|a| a.token = token_store::load());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/members-portal.css"/>
        <Title text="Members"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("info") view=InfoPage/>
                <Route path=StaticSegment("error") view=ErrorPage/>
            </Routes>
        </Router>
    }
}
