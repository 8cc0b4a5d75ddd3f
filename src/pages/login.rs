//! Login page: credential and social login, plus the post-login token
//! handoff entry point.
//!
//! A visit can arrive in three shapes: plain (show the form), carrying a
//! caller context (`frame_type`/`return_url`/...), or carrying a fresh
//! `member_jwt` from the login endpoint or an OAuth bounce. The mount step
//! sorts these out before any UI interaction happens.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::PortalConfig;
use crate::net::api::{self, ApiOutcome};
use crate::net::types::LoginRequest;
use crate::pages::replace_nav;
use crate::state::auth::AuthState;
use crate::util::browser;
use crate::util::handoff::{self, HandoffRequest};
use crate::util::password;
use crate::util::token_store;
use crate::util::validate;

/// Login page component.
#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<PortalConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    // Caller context captured at mount, before the URL is stripped.
    let handoff_ctx = RwSignal::new(None::<HandoffRequest>);
    let member_id = RwSignal::new(String::new());
    let member_password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    // Mount: lift a URL-borne token into the store, strip the URL, and
    // either hand the token off or fall through to the form.
    {
        let config = config.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            let params = query.get_untracked();
            let request = HandoffRequest::from_parts(
                params.get("frame_type"),
                params.get("return_url"),
                params.get("return_data"),
                params.get("return_func"),
            );
            handoff_ctx.set(request.clone());

            let token_param = params.get("member_jwt").filter(|t| !t.is_empty());
            if let Some(token) = token_param {
                token_store::save(&token);
                auth.update(|a| a.token = Some(token.clone()));
                match request {
                    Some(request) => {
                        handoff::resolve(&request, &token);
                    }
                    None => {
                        handoff::strip_query();
                        navigate(&config.info_page, replace_nav());
                    }
                }
                return;
            }

            // No fresh token; still never leave stray parameters visible.
            handoff::strip_query();

            // Already signed in with no caller context: straight to info.
            if request.is_none() && token_store::load().is_some() {
                navigate(&config.info_page, replace_nav());
            }
        });
    }

    let do_login = {
        let config = config.clone();
        let navigate = navigate.clone();
        move || {
            let id = member_id.get().trim().to_owned();
            let raw_password = member_password.get();
            if let Err(message) = validate::validate_login(&id, &raw_password) {
                form_error.set(Some(message));
                return;
            }
            form_error.set(None);
            auth.update(|a| a.loading = true);

            let request = LoginRequest {
                id,
                password: password::hash_password(&raw_password),
            };
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = api::login(&config, &request).await;
                auth.update(|a| a.loading = false);
                match outcome {
                    ApiOutcome::Done(envelope) if api::is_success(Some(&envelope)) => {
                        let token = envelope.data_str();
                        if token.is_empty() {
                            log::error!("login succeeded but the envelope carried no token");
                            form_error.set(Some("Login failed. Please try again.".to_owned()));
                            return;
                        }
                        token_store::save(&token);
                        auth.update(|a| a.token = Some(token.clone()));
                        match handoff_ctx.get_untracked() {
                            Some(request) => {
                                handoff::resolve(&request, &token);
                            }
                            None => navigate(&config.info_page, replace_nav()),
                        }
                    }
                    ApiOutcome::Done(envelope) | ApiOutcome::Fail(envelope) => {
                        // Stored token stays untouched on a failed attempt.
                        let message = envelope
                            .message
                            .clone()
                            .filter(|m| !m.is_empty())
                            .unwrap_or_else(|| "Login failed. Please try again.".to_owned());
                        form_error.set(Some(message));
                    }
                    ApiOutcome::Invalid(reason) => {
                        log::error!("login call rejected locally: {reason}");
                    }
                }
            });
        }
    };

    let social_buttons = config
        .social_logins
        .clone()
        .into_iter()
        .map(|provider| {
            let class = format!(
                "btn login-page__social-btn login-page__social-btn--{}",
                provider.id
            );
            let url = provider.url.clone();
            view! {
                <button
                    class=class
                    on:click=move |_| {
                        if url.is_empty() || url == "#" {
                            browser::alert("Coming soon!");
                        } else {
                            browser::goto(&url);
                        }
                    }
                >
                    {format!("Sign in with {}", provider.label)}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="login-page">
            <h1>"Members"</h1>
            <p>"Sign in to manage your account"</p>

            <form
                class="login-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    do_login();
                }
            >
                <input
                    class="login-form__input"
                    type="text"
                    placeholder="Id (email)"
                    prop:value=move || member_id.get()
                    on:input=move |ev| member_id.set(event_target_value(&ev))
                />
                <input
                    class="login-form__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || member_password.get()
                    on:input=move |ev| member_password.set(event_target_value(&ev))
                />
                {move || {
                    form_error
                        .get()
                        .map(|message| view! { <p class="login-form__error">{message}</p> })
                }}
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || auth.get().loading
                >
                    "Sign in"
                </button>
            </form>

            <div class="login-page__social">{social_buttons}</div>
        </div>
    }
}
