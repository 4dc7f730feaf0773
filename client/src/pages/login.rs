//! Login page: email + password sign-in against the hosted identity provider.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use gate::DASHBOARD_PATH;
use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::session::browser_session;

pub(crate) fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let already_signed_in = browser_session().is_authenticated();
    let dashboard_href = config.href(DASHBOARD_PATH);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_sign_in_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let provider = config.provider.clone();
            let dashboard = config.href(DASHBOARD_PATH);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::identity::sign_in_with_password(&provider, &email_value, &password_value).await {
                    Ok(identity) => {
                        log::info!("signed in as {}", identity.local_id);
                        auth.update(|a| a.remember(identity));
                        // Flag first: the dashboard route is guarded on it.
                        browser_session().set_authenticated();
                        password.set(String::new());
                        busy.set(false);
                        navigate(&dashboard, NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("sign-in failed: {e}");
                        info.set(format!("Sign-in failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, &navigate, auth, email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Bookkee"</h1>
                <p class="login-card__subtitle">"Sign in to your ledger"</p>
                <Show when=move || already_signed_in>
                    <p class="login-message">
                        "You are already signed in. "
                        <a href=dashboard_href.clone()>"Continue to dashboard"</a>
                    </p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
