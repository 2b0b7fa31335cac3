use contracts::validation::{require, require_email};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::layout::global_context::DashboardContext;
use crate::shared::toast::ToastService;

// The original back office simulated a save round trip before confirming.
const SAVE_DELAY_MS: u32 = 1500;

#[component]
#[allow(non_snake_case)]
pub fn SettingsSection() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found in context");
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let (agency_name, set_agency_name) = signal("TravelOps Agency".to_string());
    let (contact_email, set_contact_email) = signal("admin@gmail.com".to_string());
    let (phone, set_phone) = signal("+1 234-567-8900".to_string());
    let (name_error, set_name_error) = signal(Option::<String>::None);
    let (email_error, set_email_error) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let name_err = require("agency_name", &agency_name.get()).map(|e| e.message);
        let email_err = require_email("contact_email", &contact_email.get()).map(|e| e.message);
        set_name_error.set(name_err.clone());
        set_email_error.set(email_err.clone());
        if name_err.is_some() || email_err.is_some() {
            return;
        }

        set_is_saving.set(true);
        let epoch = ctx.current_epoch();
        spawn_local(async move {
            TimeoutFuture::new(SAVE_DELAY_MS).await;
            // The section may have been replaced while the simulated save
            // was pending; a stale timer must not touch it.
            if ctx.current_epoch() != epoch {
                return;
            }
            set_is_saving.set(false);
            toast.success("Changes saved successfully!");
        });
    };

    view! {
        <div class="content settings-section">
            <form class="settings-form glass-card" on:submit=handle_submit>
                <h3>"Agency Profile"</h3>
                <div class="form-group">
                    <label for="agencyName">"Agency Name"</label>
                    <input
                        type="text"
                        id="agencyName"
                        class:input--error=move || name_error.get().is_some()
                        prop:value=move || agency_name.get()
                        on:input=move |ev| set_agency_name.set(event_target_value(&ev))
                        disabled=move || is_saving.get()
                    />
                    {move || name_error.get().map(|e| view! { <span class="field-error">{e}</span> })}
                </div>
                <div class="form-group">
                    <label for="contactEmail">"Contact Email"</label>
                    <input
                        type="text"
                        id="contactEmail"
                        class:input--error=move || email_error.get().is_some()
                        prop:value=move || contact_email.get()
                        on:input=move |ev| set_contact_email.set(event_target_value(&ev))
                        disabled=move || is_saving.get()
                    />
                    {move || email_error.get().map(|e| view! { <span class="field-error">{e}</span> })}
                </div>
                <div class="form-group">
                    <label for="phoneNumber">"Phone"</label>
                    <input
                        type="text"
                        id="phoneNumber"
                        prop:value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                        disabled=move || is_saving.get()
                    />
                </div>
                <button type="submit" class="button button--primary" disabled=move || is_saving.get()>
                    {move || if is_saving.get() { "Saving..." } else { "Save Changes" }}
                </button>
            </form>
        </div>
    }
}
