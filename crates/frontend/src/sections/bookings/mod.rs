pub mod dialog;
pub mod modals;
pub mod projection;
pub mod seed;
pub mod store;

use std::collections::HashSet;

use contracts::domain::booking::{BookingDraft, RowAction, StatusFilter};
use contracts::validation::FieldError;
use leptos::prelude::*;

use self::dialog::{DialogKind, DialogOutcome, DialogState};
use self::modals::{BookingFormModal, ViewBookingModal};
use self::store::BookingStore;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::format::format_amount;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

const STATUS_FILTERS: [(&str, &str); 4] = [
    ("all", "All"),
    ("confirmed", "Confirmed"),
    ("pending", "Pending"),
    ("cancelled", "Cancelled"),
];

#[component]
#[allow(non_snake_case)]
pub fn BookingsSection() -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    // One store per section activation; discarded when the section is.
    let store = RwSignal::new(BookingStore::new(seed::seed_bookings()));
    let dialog = RwSignal::new(DialogState::default());
    let draft = RwSignal::new(BookingDraft::default());
    let field_errors = RwSignal::new(Vec::<FieldError>::new());

    let page_view = move || store.with(|s| s.page_view());

    let open_dialog = move |kind: DialogKind, id: Option<String>| {
        match kind {
            DialogKind::Editing => {
                // Populate the form from the selected record.
                let Some(booking) = id
                    .as_deref()
                    .and_then(|id| store.with_untracked(|s| s.get(id).cloned()))
                else {
                    return;
                };
                draft.set(BookingDraft::from_booking(&booking));
            }
            DialogKind::Adding => draft.set(BookingDraft::default()),
            _ => {}
        }
        field_errors.set(Vec::new());
        dialog.update(|d| d.open(kind, id));
    };

    let dismiss = Callback::new(move |_| {
        dialog.update(|d| d.dismiss());
        field_errors.set(Vec::new());
    });

    let handle_submit = Callback::new(move |_| {
        let current = draft.get_untracked();
        let mut dlg = dialog.get_untracked();
        let result = store.try_update(|s| dlg.submit(s, &current));
        dialog.set(dlg);
        match result {
            Some(Ok(DialogOutcome::Updated(id))) => {
                toast.success(format!("Booking {} updated successfully!", id));
            }
            Some(Ok(DialogOutcome::Added(id))) => {
                toast.success(format!("Booking {} created successfully!", id));
            }
            Some(Err(errors)) => field_errors.set(errors),
            _ => {}
        }
    });

    let handle_confirm = Callback::new(move |_| {
        let mut dlg = dialog.get_untracked();
        let outcome = store.try_update(|s| dlg.confirm(s)).flatten();
        dialog.set(dlg);
        match outcome {
            Some(DialogOutcome::Cancelled(id)) => {
                toast.success(format!("Booking {} cancelled successfully", id));
            }
            Some(DialogOutcome::Restored(id)) => {
                toast.success(format!("Booking {} restored successfully", id));
            }
            Some(DialogOutcome::Deleted(id)) => {
                toast.success(format!("Booking {} deleted", id));
            }
            _ => {}
        }
    });

    view! {
        <div class="content bookings-section">
            <div class="table-toolbar">
                <div class="search-box">
                    {icon("search")}
                    <input
                        type="text"
                        id="bookingSearch"
                        placeholder="Search bookings..."
                        prop:value=move || store.with(|s| s.transform.search_term.clone())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            store.update(|s| s.set_search_term(term));
                        }
                    />
                </div>
                <div class="filter-buttons">
                    {STATUS_FILTERS.into_iter().map(|(filter_id, label)| {
                        view! {
                            <button
                                class="filter-btn"
                                data-filter=filter_id
                                class:filter-btn--active=move || {
                                    store.with(|s| s.transform.status_filter.as_id() == filter_id)
                                }
                                on:click=move |_| {
                                    let filter = StatusFilter::from_id(filter_id)
                                        .unwrap_or(StatusFilter::All);
                                    store.update(|s| s.set_status_filter(filter));
                                }
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>
                <button
                    class="button button--primary"
                    on:click=move |_| open_dialog(DialogKind::Adding, None)
                >
                    {icon("plus")}
                    "New Booking"
                </button>
            </div>

            <div class="table-container">
                <table class="table__data bookings-table">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Booking ID"</th>
                            <th class="table__header-cell">"Customer"</th>
                            <th class="table__header-cell">"Package"</th>
                            <th class="table__header-cell">"Travel Date"</th>
                            <th class="table__header-cell">"Amount"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            // Every record stays in the table; only the
                            // projected window is visible.
                            let windowed: HashSet<String> = page_view()
                                .windowed
                                .iter()
                                .map(|b| b.id.clone())
                                .collect();
                            store.with(|s| s.records().iter().cloned().map(|booking| {
                                let shown = windowed.contains(&booking.id);
                                let row_id = booking.id.clone();
                                let status = booking.status;
                                view! {
                                    <tr
                                        class="table__row"
                                        class:hidden={!shown}
                                        data-status=status.as_str()
                                    >
                                        <td class="table__cell">{booking.id.clone()}</td>
                                        <td class="table__cell">{booking.customer_name.clone()}</td>
                                        <td class="table__cell">{booking.package.clone()}</td>
                                        <td class="table__cell">{booking.travel_date.clone()}</td>
                                        <td class="table__cell">{format_amount(booking.amount)}</td>
                                        <td class="table__cell">
                                            <span class=format!("status-badge status-badge--{}", status.as_str())>
                                                {status.label()}
                                            </span>
                                        </td>
                                        <td class="table__cell action-buttons">
                                            {booking.actions().iter().map(|action| {
                                                let (icon_name, action_title, kind) = match action {
                                                    RowAction::View => ("eye", "View Details", DialogKind::Viewing),
                                                    RowAction::Edit => ("edit", "Edit", DialogKind::Editing),
                                                    RowAction::Cancel => ("x", "Cancel", DialogKind::ConfirmingCancel),
                                                    RowAction::Restore => ("undo", "Restore", DialogKind::ConfirmingRestore),
                                                };
                                                let id_for_action = row_id.clone();
                                                view! {
                                                    <button
                                                        class="btn-icon"
                                                        title=action_title
                                                        on:click=move |_| {
                                                            open_dialog(kind, Some(id_for_action.clone()))
                                                        }
                                                    >
                                                        {icon(icon_name)}
                                                    </button>
                                                }
                                            }).collect_view()}
                                        </td>
                                    </tr>
                                }
                            }).collect_view())
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || store.with(|s| s.transform.page))
                total_pages=Signal::derive(move || store.with(|s| s.total_pages()))
                start=Signal::derive(move || page_view().info.start)
                end=Signal::derive(move || page_view().info.end)
                total=Signal::derive(move || page_view().info.total)
                on_page_change=Callback::new(move |page| store.update(|s| s.set_page(page)))
            />

            {move || {
                let state = dialog.get();
                match state.kind() {
                    None => view! { <></> }.into_any(),
                    Some(DialogKind::Viewing) => {
                        match state.selection().and_then(|id| store.with(|s| s.get(id).cloned())) {
                            Some(booking) => view! {
                                <ViewBookingModal booking=booking on_close=dismiss />
                            }.into_any(),
                            None => view! { <></> }.into_any(),
                        }
                    }
                    Some(DialogKind::Editing) => view! {
                        <BookingFormModal
                            title="Edit Booking".to_string()
                            draft=draft
                            errors=field_errors
                            on_submit=handle_submit
                            on_close=dismiss
                        />
                    }.into_any(),
                    Some(DialogKind::Adding) => view! {
                        <BookingFormModal
                            title="New Booking".to_string()
                            draft=draft
                            errors=field_errors
                            on_submit=handle_submit
                            on_close=dismiss
                        />
                    }.into_any(),
                    Some(DialogKind::ConfirmingCancel) => {
                        let id = state.selection().unwrap_or_default().to_string();
                        view! {
                            <ConfirmDialog
                                title="Cancel Booking".to_string()
                                message=format!("Are you sure you want to cancel booking {}?", id)
                                confirm_label="Cancel Booking"
                                confirm_class="button--danger"
                                on_confirm=handle_confirm
                                on_close=dismiss
                            />
                        }.into_any()
                    }
                    Some(DialogKind::ConfirmingRestore) => {
                        let id = state.selection().unwrap_or_default().to_string();
                        view! {
                            <ConfirmDialog
                                title="Restore Booking".to_string()
                                message=format!("Restore booking {} to confirmed status?", id)
                                confirm_label="Restore"
                                on_confirm=handle_confirm
                                on_close=dismiss
                            />
                        }.into_any()
                    }
                    Some(DialogKind::ConfirmingDelete) => {
                        let id = state.selection().unwrap_or_default().to_string();
                        view! {
                            <ConfirmDialog
                                title="Delete Booking".to_string()
                                message=format!("Permanently delete booking {}?", id)
                                confirm_label="Delete"
                                confirm_class="button--danger"
                                on_confirm=handle_confirm
                                on_close=dismiss
                            />
                        }
                        .into_any()
                    }
                }
            }}
        </div>
    }
}
