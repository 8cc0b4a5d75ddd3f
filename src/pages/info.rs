//! Member info page: profile display, edit, account deletion, logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::agency_badge::AgencyBadge;
use crate::components::spinner::Spinner;
use crate::config::PortalConfig;
use crate::net::api::{self, ApiOutcome};
use crate::net::types::{MemberProfile, UpdateMemberRequest};
use crate::pages::replace_nav;
use crate::state::auth::AuthState;
use crate::util::browser;
use crate::util::password;
use crate::util::token_store::{self, TokenGate};
use crate::util::validate;

/// Member info page — requires a stored token; redirects to login otherwise.
#[component]
pub fn InfoPage() -> impl IntoView {
    let config = expect_context::<PortalConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let profile = RwSignal::new(None::<MemberProfile>);
    let edit_name = RwSignal::new(String::new());
    let edit_nickname = RwSignal::new(String::new());
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let form_notice = RwSignal::new(None::<String>);

    // Mount: no stored token means straight back to login, no API call.
    {
        let config = config.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            let TokenGate::Proceed(token) = token_store::gate(token_store::load()) else {
                navigate(&config.login_page, replace_nav());
                return;
            };
            auth.update(|a| a.token = Some(token.clone()));

            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::fetch_member(&config, &token).await {
                    ApiOutcome::Done(envelope) if api::is_success(Some(&envelope)) => {
                        let member = MemberProfile::from_envelope(&envelope);
                        edit_name.set(member.name.clone());
                        edit_nickname.set(member.nickname.clone());
                        profile.set(Some(member));
                    }
                    ApiOutcome::Done(envelope) => {
                        // The backend rejected the token; it is dead weight now.
                        token_store::clear();
                        auth.update(|a| a.token = None);
                        browser::alert(&format!(
                            "Failed to load member info.\n({})",
                            envelope.message.as_deref().unwrap_or("unknown error")
                        ));
                        navigate(&config.login_page, replace_nav());
                    }
                    ApiOutcome::Fail(_) => {
                        browser::alert("Failed to communicate with the server.");
                        navigate(&config.login_page, replace_nav());
                    }
                    ApiOutcome::Invalid(reason) => {
                        log::error!("member fetch rejected locally: {reason}");
                    }
                }
            });
        });
    }

    let on_save: Callback<()> = {
        let config = config.clone();
        let navigate = navigate.clone();
        Callback::new(move |()| {
            let Some(member) = profile.get_untracked() else {
                return;
            };
            let name = edit_name.get_untracked();
            let nickname = edit_nickname.get_untracked();
            let old_pw = old_password.get_untracked();
            let new_pw = new_password.get_untracked();
            if let Err(message) = validate::validate_member_edit(&name, &nickname, &old_pw, &new_pw)
            {
                form_error.set(Some(message));
                return;
            }
            let TokenGate::Proceed(token) = token_store::gate(token_store::load()) else {
                navigate(&config.login_page, replace_nav());
                return;
            };
            form_error.set(None);
            form_notice.set(None);
            auth.update(|a| a.loading = true);

            let request = UpdateMemberRequest {
                name,
                nickname: (!nickname.is_empty()).then_some(nickname),
                old_password: password::hash_if_present(&old_pw),
                new_password: password::hash_if_present(&new_pw),
            };
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = api::update_member(&config, &token, member.seq, &request).await;
                auth.update(|a| a.loading = false);
                match outcome {
                    ApiOutcome::Done(envelope) if api::is_success(Some(&envelope)) => {
                        profile.update(|p| {
                            if let Some(p) = p {
                                p.name = request.name.clone();
                                if let Some(nickname) = &request.nickname {
                                    p.nickname = nickname.clone();
                                }
                            }
                        });
                        old_password.set(String::new());
                        new_password.set(String::new());
                        form_notice.set(Some("Member info updated.".to_owned()));
                    }
                    ApiOutcome::Done(envelope) => {
                        let message = envelope
                            .message
                            .clone()
                            .filter(|m| !m.is_empty())
                            .unwrap_or_else(|| "Update failed.".to_owned());
                        form_error.set(Some(message));
                    }
                    ApiOutcome::Fail(_) => {
                        browser::alert("Failed to communicate with the server.");
                        navigate(&config.login_page, replace_nav());
                    }
                    ApiOutcome::Invalid(reason) => {
                        log::error!("member update rejected locally: {reason}");
                    }
                }
            });
        })
    };

    let on_delete: Callback<()> = {
        let config = config.clone();
        let navigate = navigate.clone();
        Callback::new(move |()| {
            // No stored token: nothing to delete against.
            let TokenGate::Proceed(token) = token_store::gate(token_store::load()) else {
                navigate(&config.login_page, replace_nav());
                return;
            };
            let Some(member) = profile.get_untracked() else {
                return;
            };
            auth.update(|a| a.loading = true);

            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = api::delete_member(&config, &token, member.seq).await;
                auth.update(|a| a.loading = false);
                match outcome {
                    ApiOutcome::Done(envelope) if api::is_success(Some(&envelope)) => {
                        token_store::clear();
                        auth.update(|a| a.token = None);
                        browser::alert("Your account has been deleted.");
                        navigate(&config.login_page, replace_nav());
                    }
                    ApiOutcome::Done(envelope) => {
                        let message = envelope
                            .message
                            .clone()
                            .filter(|m| !m.is_empty())
                            .unwrap_or_else(|| "Account deletion failed.".to_owned());
                        form_error.set(Some(message));
                    }
                    ApiOutcome::Fail(_) => {
                        browser::alert("Failed to communicate with the server.");
                        navigate(&config.login_page, replace_nav());
                    }
                    ApiOutcome::Invalid(reason) => {
                        log::error!("member delete rejected locally: {reason}");
                    }
                }
            });
        })
    };

    let on_logout: Callback<()> = {
        let config = config.clone();
        let navigate = navigate.clone();
        Callback::new(move |()| {
            token_store::clear();
            auth.update(|a| a.token = None);
            navigate(&config.login_page, replace_nav());
        })
    };

    view! {
        <div class="info-page">
            <header class="info-page__header">
                <h1>"Member Info"</h1>
                <button class="btn" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </header>

            <Show when=move || profile.get().is_some() fallback=|| view! { <Spinner/> }>
                <div class="info-page__card">
                    {move || {
                        profile
                            .get()
                            .map(|m| view! { <AgencyBadge agency=m.auth_agency/> })
                    }}

                    <label class="info-page__field">
                        "Id"
                        <input
                            type="text"
                            readonly
                            prop:value=move || profile.get().map_or_else(String::new, |m| m.id)
                        />
                    </label>
                    <label class="info-page__field">
                        "Status"
                        <input
                            type="text"
                            readonly
                            prop:value=move || profile.get().map_or_else(String::new, |m| m.status)
                        />
                    </label>
                    <label class="info-page__field">
                        "Authority"
                        <input
                            type="text"
                            readonly
                            prop:value=move || {
                                profile.get().map_or_else(String::new, |m| m.authority)
                            }
                        />
                    </label>
                    <label class="info-page__field">
                        "Joined"
                        <input
                            type="text"
                            readonly
                            prop:value=move || {
                                profile.get().map_or_else(String::new, |m| m.join_date)
                            }
                        />
                    </label>
                    <label class="info-page__field">
                        "Last login"
                        <input
                            type="text"
                            readonly
                            prop:value=move || {
                                profile.get().map_or_else(String::new, |m| m.last_login_date)
                            }
                        />
                    </label>

                    <label class="info-page__field">
                        "Name"
                        <input
                            type="text"
                            prop:value=move || edit_name.get()
                            on:input=move |ev| edit_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="info-page__field">
                        "Nickname"
                        <input
                            type="text"
                            prop:value=move || edit_nickname.get()
                            on:input=move |ev| edit_nickname.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="info-page__field">
                        "Current password"
                        <input
                            type="password"
                            prop:value=move || old_password.get()
                            on:input=move |ev| old_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="info-page__field">
                        "New password"
                        <input
                            type="password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>

                    {move || {
                        form_error
                            .get()
                            .map(|message| view! { <p class="info-page__error">{message}</p> })
                    }}
                    {move || {
                        form_notice
                            .get()
                            .map(|message| view! { <p class="info-page__notice">{message}</p> })
                    }}

                    <div class="info-page__actions">
                        <button
                            class="btn btn--primary"
                            on:click=move |_| on_save.run(())
                            disabled=move || auth.get().loading
                        >
                            "Save"
                        </button>
                        <button
                            class="btn btn--danger"
                            on:click=move |_| on_delete.run(())
                            disabled=move || auth.get().loading
                        >
                            "Delete account"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
