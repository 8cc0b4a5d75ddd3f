//! Generic error page: show the supplied message, offer a way back.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::PortalConfig;
use crate::pages::replace_nav;
use crate::util::browser;

/// Error page — renders the `message` query parameter and returns to login.
#[component]
pub fn ErrorPage() -> impl IntoView {
    let config = expect_context::<PortalConfig>();
    let navigate = use_navigate();
    let query = use_query_map();

    let message = Memo::new(move |_| {
        query
            .get()
            .get("message")
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "An unknown error occurred.".to_owned())
    });

    // The old page alerted on load; keep the blocking notice.
    Effect::new(move || {
        browser::alert(&message.get_untracked());
    });

    let on_back = move |_| navigate(&config.login_page, replace_nav());

    view! {
        <div class="error-page">
            <h1>"Something went wrong"</h1>
            <p class="error-page__message">{move || message.get()}</p>
            <button class="btn btn--primary" on:click=on_back>
                "Back to login"
            </button>
        </div>
    }
}
