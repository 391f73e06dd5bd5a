//! Admin Login Page
//!
//! Email/password sign-in plus the Google OAuth hand-off. Only admin
//! accounts are let through.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth_session;
use crate::components::{CheckboxField, TextField};
use crate::route::{use_router, Route};
use crate::services::{self, ApiError};
use crate::store::{push_toast, use_app_store, ToastKind};
use crate::wizard::is_valid_email;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let router = use_router();
    let session = use_auth_session();
    let store = use_app_store();

    // Already signed in
    Effect::new(move |_| {
        if session.is_admin() {
            router.replace(&Route::AdminDashboard.path());
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let (email_error, set_email_error) = signal(None::<String>);
    let (form_error, set_form_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let address = email.get_untracked().trim().to_string();
        let secret = password.get_untracked();
        set_form_error.set(None);

        if !is_valid_email(&address) {
            set_email_error.set(Some("Enter a valid e-mail address".to_string()));
            return;
        }
        set_email_error.set(None);
        if secret.is_empty() {
            set_form_error.set(Some("Password is required".to_string()));
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            let result = services::login(&address, &secret).await;
            set_submitting.set(false);
            match result {
                Ok(auth) if !auth.user.is_admin() => {
                    log::warn!("login refused for non-admin {}", auth.user.email);
                    set_form_error.set(Some("This account does not have admin access".to_string()));
                }
                Ok(auth) => match session.login(&auth.token, auth.user, remember.get_untracked()) {
                    Ok(()) => {
                        log::info!("admin signed in");
                        push_toast(&store, ToastKind::Success, "Signed in");
                        router.navigate(&Route::AdminDashboard.path());
                    }
                    Err(e) => {
                        log::error!("storing auth failed: {}", e);
                        set_form_error.set(Some(e.to_string()));
                    }
                },
                Err(ApiError::Unauthorized) => {
                    set_form_error.set(Some("Invalid e-mail or password".to_string()));
                }
                Err(e) => {
                    log::error!("login failed: {}", e);
                    push_toast(&store, ToastKind::Error, "Could not reach the server");
                }
            }
        });
    };

    view! {
        <section class="login-page">
            <form class="login-card" on:submit=submit>
                <h1>"Admin sign in"</h1>
                <TextField
                    label="E-mail"
                    value=email
                    error=Signal::derive(move || email_error.get())
                    input_type="email"
                    placeholder="admin@example.com"
                />
                <TextField
                    label="Password"
                    value=password
                    input_type="password"
                />
                <CheckboxField label="Keep me signed in" checked=remember />

                {move || form_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>

                <div class="divider">"or"</div>
                <a class="google-btn" href=services::oauth_start_url()>"Continue with Google"</a>
            </form>
        </section>
    }
}
