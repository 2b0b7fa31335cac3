//! Dialog views for the booking table.

use contracts::domain::booking::{Booking, BookingDraft, BookingStatus};
use contracts::validation::FieldError;
use leptos::prelude::*;

use crate::shared::format::{format_amount, format_timestamp};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::toast::ToastService;

fn error_for(errors: &[FieldError], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.clone())
}

/// Read-only booking details with a print action.
#[component]
pub fn ViewBookingModal(booking: Booking, on_close: Callback<()>) -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let handle_print = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
        toast.info("Opening print dialog...");
    };

    let status = booking.status;

    view! {
        <ModalFrame title="Booking Details".to_string() on_close=on_close modal_class="modal--view-booking">
            <div class="details-grid">
                <div class="details-grid__item">
                    <label>"Booking ID"</label>
                    <span>{booking.id.clone()}</span>
                </div>
                <div class="details-grid__item">
                    <label>"Status"</label>
                    <span class=format!("status-badge status-badge--{}", status.as_str())>
                        {status.label()}
                    </span>
                </div>
                <div class="details-grid__item">
                    <label>"Customer"</label>
                    <span>{booking.customer_name.clone()}</span>
                </div>
                <div class="details-grid__item">
                    <label>"Package"</label>
                    <span>{booking.package.clone()}</span>
                </div>
                <div class="details-grid__item">
                    <label>"Travel Date"</label>
                    <span>{booking.travel_date.clone()}</span>
                </div>
                <div class="details-grid__item">
                    <label>"Amount"</label>
                    <span>{format_amount(booking.amount)}</span>
                </div>
                <div class="details-grid__item">
                    <label>"Email"</label>
                    <span>{booking.email.clone()}</span>
                </div>
                <div class="details-grid__item">
                    <label>"Phone"</label>
                    <span>{booking.phone.clone()}</span>
                </div>
                <div class="details-grid__item">
                    <label>"Passport"</label>
                    <span>{booking.passport.clone()}</span>
                </div>
                <div class="details-grid__item">
                    <label>"Created"</label>
                    <span>{format_timestamp(booking.metadata.created_at)}</span>
                </div>
                <div class="details-grid__item details-grid__item--wide">
                    <label>"Notes"</label>
                    <span>{if booking.notes.is_empty() { "-".to_string() } else { booking.notes.clone() }}</span>
                </div>
            </div>
            <div class="modal__actions">
                <button class="button button--secondary" on:click=handle_print>
                    {icon("printer")}
                    "Print"
                </button>
                <button class="button button--primary" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        </ModalFrame>
    }
}

/// Shared form for the edit and add dialogs. Validation failures keep the
/// dialog open with the offending fields flagged inline.
#[component]
pub fn BookingFormModal(
    title: String,
    draft: RwSignal<BookingDraft>,
    #[prop(into)] errors: Signal<Vec<FieldError>>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <ModalFrame title=title on_close=on_close modal_class="modal--booking-form">
            <form class="details-form" on:submit=handle_submit>
                <div class="form-group">
                    <label for="customerName">"Customer Name"</label>
                    <input
                        type="text"
                        id="customerName"
                        name="customerName"
                        class:input--error=move || errors.with(|e| error_for(e, "customer_name").is_some())
                        prop:value=move || draft.get().customer_name
                        on:input=move |ev| draft.update(|d| d.customer_name = event_target_value(&ev))
                    />
                    {move || errors.with(|e| error_for(e, "customer_name")).map(|e| view! { <span class="field-error">{e}</span> })}
                </div>

                <div class="form-group">
                    <label for="package">"Package"</label>
                    <input
                        type="text"
                        id="package"
                        name="package"
                        class:input--error=move || errors.with(|e| error_for(e, "package").is_some())
                        prop:value=move || draft.get().package
                        on:input=move |ev| draft.update(|d| d.package = event_target_value(&ev))
                    />
                    {move || errors.with(|e| error_for(e, "package")).map(|e| view! { <span class="field-error">{e}</span> })}
                </div>

                <div class="form-group form-group--half">
                    <label for="travelDate">"Travel Date"</label>
                    <input
                        type="date"
                        id="travelDate"
                        name="travelDate"
                        class:input--error=move || errors.with(|e| error_for(e, "travel_date").is_some())
                        prop:value=move || draft.get().travel_date
                        on:input=move |ev| draft.update(|d| d.travel_date = event_target_value(&ev))
                    />
                    {move || errors.with(|e| error_for(e, "travel_date")).map(|e| view! { <span class="field-error">{e}</span> })}
                </div>

                <div class="form-group form-group--half">
                    <label for="amount">"Amount ($)"</label>
                    <input
                        type="text"
                        id="amount"
                        name="amount"
                        class:input--error=move || errors.with(|e| error_for(e, "amount").is_some())
                        prop:value=move || draft.get().amount
                        on:input=move |ev| draft.update(|d| d.amount = event_target_value(&ev))
                    />
                    {move || errors.with(|e| error_for(e, "amount")).map(|e| view! { <span class="field-error">{e}</span> })}
                </div>

                <div class="form-group form-group--half">
                    <label for="status">"Status"</label>
                    <select
                        id="status"
                        name="status"
                        prop:value=move || draft.get().status.as_str()
                        on:change=move |ev| {
                            if let Some(status) = BookingStatus::parse(&event_target_value(&ev)) {
                                draft.update(|d| d.status = status);
                            }
                        }
                    >
                        {BookingStatus::ALL.into_iter().map(|status| {
                            view! {
                                <option
                                    value=status.as_str()
                                    selected=move || draft.get().status == status
                                >
                                    {status.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group form-group--half">
                    <label for="email">"Email"</label>
                    <input
                        type="text"
                        id="email"
                        name="email"
                        class:input--error=move || errors.with(|e| error_for(e, "email").is_some())
                        prop:value=move || draft.get().email
                        on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                    />
                    {move || errors.with(|e| error_for(e, "email")).map(|e| view! { <span class="field-error">{e}</span> })}
                </div>

                <div class="form-group form-group--half">
                    <label for="phone">"Phone"</label>
                    <input
                        type="text"
                        id="phone"
                        name="phone"
                        prop:value=move || draft.get().phone
                        on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                    />
                </div>

                <div class="form-group form-group--half">
                    <label for="passport">"Passport"</label>
                    <input
                        type="text"
                        id="passport"
                        name="passport"
                        prop:value=move || draft.get().passport
                        on:input=move |ev| draft.update(|d| d.passport = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="notes">"Notes"</label>
                    <textarea
                        id="notes"
                        name="notes"
                        rows="3"
                        prop:value=move || draft.get().notes
                        on:input=move |ev| draft.update(|d| d.notes = event_target_value(&ev))
                    />
                </div>

                <div class="modal__actions">
                    <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="button button--primary">
                        "Save"
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}

