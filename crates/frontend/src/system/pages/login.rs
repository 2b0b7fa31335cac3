use contracts::validation::{require, require_email};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::toast::ToastService;
use crate::system::auth::context::{check_credentials, complete_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_error, set_email_error) = signal(Option::<String>::None);
    let (password_error, set_password_error) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        // Inline field validation before the credential check.
        let email_err = require_email("email", &email_val).map(|e| e.message);
        let password_err = require("password", &password_val).map(|e| e.message);
        set_email_error.set(email_err.clone());
        set_password_error.set(password_err.clone());
        if email_err.is_some() || password_err.is_some() {
            return;
        }

        set_is_loading.set(true);

        spawn_local(async move {
            // Brief pause so the button's busy state is visible, the way
            // the public site simulated a round trip.
            TimeoutFuture::new(800).await;

            match check_credentials(&email_val, &password_val) {
                Ok(identity) => {
                    toast.success("Welcome back!");
                    // Flipping the auth state switches to the dashboard.
                    complete_login(set_auth_state, identity);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    toast.error(e);
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"TravelOps"</h1>
                <h2>"Admin Sign In"</h2>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="admin@gmail.com"
                            class:input--error=move || email_error.get().is_some()
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {move || email_error.get().map(|e| view! { <span class="field-error">{e}</span> })}
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            class:input--error=move || password_error.get().is_some()
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {move || password_error.get().map(|e| view! { <span class="field-error">{e}</span> })}
                    </div>

                    <button
                        type="submit"
                        class="button button--primary login-submit"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
