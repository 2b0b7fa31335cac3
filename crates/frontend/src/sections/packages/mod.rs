pub mod store;

use contracts::domain::package::PackageDraft;
use contracts::validation::FieldError;
use leptos::prelude::*;

use self::store::{seed_packages, PackageStore};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::format::format_amount;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::toast::ToastService;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum PackageDialog {
    #[default]
    Closed,
    Adding,
    Editing(String),
    ConfirmingDelete(String),
}

#[component]
#[allow(non_snake_case)]
pub fn PackagesSection() -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let store = RwSignal::new(PackageStore::new(seed_packages()));
    let dialog = RwSignal::new(PackageDialog::Closed);
    let draft = RwSignal::new(PackageDraft::default());
    let field_errors = RwSignal::new(Vec::<FieldError>::new());

    let open_add = move |_| {
        draft.set(PackageDraft::default());
        field_errors.set(Vec::new());
        dialog.set(PackageDialog::Adding);
    };

    let open_edit = move |id: String| {
        let Some(package) = store.with_untracked(|s| s.get(&id).cloned()) else {
            return;
        };
        draft.set(PackageDraft::from_package(&package));
        field_errors.set(Vec::new());
        dialog.set(PackageDialog::Editing(id));
    };

    let dismiss = Callback::new(move |_| {
        dialog.set(PackageDialog::Closed);
        field_errors.set(Vec::new());
    });

    let handle_submit = Callback::new(move |_| {
        let current = draft.get_untracked();
        if let Err(errors) = current.validate() {
            field_errors.set(errors);
            return;
        }
        match dialog.get_untracked() {
            PackageDialog::Adding => {
                let id = store
                    .try_update(|s| s.add(current.clone()))
                    .unwrap_or_default();
                toast.success(format!("Package {} created successfully!", id));
            }
            PackageDialog::Editing(id) => {
                store.update(|s| {
                    s.apply_edit(&id, &current);
                });
                toast.success("Package updated successfully!");
            }
            _ => return,
        }
        dialog.set(PackageDialog::Closed);
    });

    let handle_delete = Callback::new(move |_| {
        if let PackageDialog::ConfirmingDelete(id) = dialog.get_untracked() {
            store.update(|s| {
                s.delete(&id);
            });
            toast.success(format!("Package {} deleted successfully", id));
        }
        dialog.set(PackageDialog::Closed);
    });

    view! {
        <div class="content packages-section">
            <div class="table-toolbar">
                <button class="button button--primary" id="addPackageBtn" on:click=open_add>
                    {icon("plus")}
                    "Add Package"
                </button>
            </div>

            <div class="table-container">
                <table class="table__data packages-table">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"ID"</th>
                            <th class="table__header-cell">"Package"</th>
                            <th class="table__header-cell">"Destination"</th>
                            <th class="table__header-cell">"Duration"</th>
                            <th class="table__header-cell">"Price"</th>
                            <th class="table__header-cell">"Seats"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || store.with(|s| s.records().iter().cloned().map(|package| {
                            let id_for_edit = package.id.clone();
                            let id_for_delete = package.id.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{package.id.clone()}</td>
                                    <td class="table__cell">{package.name.clone()}</td>
                                    <td class="table__cell">{package.destination.clone()}</td>
                                    <td class="table__cell">{format!("{} Days", package.duration_days)}</td>
                                    <td class="table__cell">{format_amount(package.price)}</td>
                                    <td class="table__cell">{package.seats}</td>
                                    <td class="table__cell action-buttons">
                                        <button
                                            class="btn-icon"
                                            title="Edit"
                                            on:click=move |_| open_edit(id_for_edit.clone())
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="btn-icon"
                                            title="Delete"
                                            on:click=move |_| {
                                                field_errors.set(Vec::new());
                                                dialog.set(PackageDialog::ConfirmingDelete(id_for_delete.clone()));
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view())}
                    </tbody>
                </table>
            </div>

            {move || match dialog.get() {
                PackageDialog::Closed => view! { <></> }.into_any(),
                PackageDialog::Adding => view! {
                    <PackageFormModal
                        title="Add Package".to_string()
                        draft=draft
                        errors=field_errors
                        on_submit=handle_submit
                        on_close=dismiss
                    />
                }.into_any(),
                PackageDialog::Editing(_) => view! {
                    <PackageFormModal
                        title="Edit Package".to_string()
                        draft=draft
                        errors=field_errors
                        on_submit=handle_submit
                        on_close=dismiss
                    />
                }.into_any(),
                PackageDialog::ConfirmingDelete(id) => view! {
                    <ConfirmDialog
                        title="Delete Package".to_string()
                        message=format!("Permanently delete package {}?", id)
                        confirm_label="Delete"
                        confirm_class="button--danger"
                        on_confirm=handle_delete
                        on_close=dismiss
                    />
                }.into_any(),
            }}
        </div>
    }
}

fn error_for(errors: &[FieldError], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.clone())
}

#[component]
fn PackageFormModal(
    title: String,
    draft: RwSignal<PackageDraft>,
    #[prop(into)] errors: Signal<Vec<FieldError>>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <ModalFrame title=title on_close=on_close modal_class="modal--package-form">
            <form class="details-form" on:submit=handle_submit>
                <div class="form-group">
                    <label for="packageName">"Package Name"</label>
                    <input
                        type="text"
                        id="packageName"
                        class:input--error=move || errors.with(|e| error_for(e, "name").is_some())
                        prop:value=move || draft.get().name
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                    {move || errors.with(|e| error_for(e, "name")).map(|e| view! { <span class="field-error">{e}</span> })}
                </div>

                <div class="form-group">
                    <label for="destination">"Destination"</label>
                    <input
                        type="text"
                        id="destination"
                        class:input--error=move || errors.with(|e| error_for(e, "destination").is_some())
                        prop:value=move || draft.get().destination
                        on:input=move |ev| draft.update(|d| d.destination = event_target_value(&ev))
                    />
                    {move || errors.with(|e| error_for(e, "destination")).map(|e| view! { <span class="field-error">{e}</span> })}
                </div>

                <div class="form-group form-group--half">
                    <label for="durationDays">"Duration (days)"</label>
                    <input
                        type="text"
                        id="durationDays"
                        class:input--error=move || errors.with(|e| error_for(e, "duration_days").is_some())
                        prop:value=move || draft.get().duration_days
                        on:input=move |ev| draft.update(|d| d.duration_days = event_target_value(&ev))
                    />
                    {move || errors.with(|e| error_for(e, "duration_days")).map(|e| view! { <span class="field-error">{e}</span> })}
                </div>

                <div class="form-group form-group--half">
                    <label for="price">"Price ($)"</label>
                    <input
                        type="text"
                        id="price"
                        class:input--error=move || errors.with(|e| error_for(e, "price").is_some())
                        prop:value=move || draft.get().price
                        on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                    />
                    {move || errors.with(|e| error_for(e, "price")).map(|e| view! { <span class="field-error">{e}</span> })}
                </div>

                <div class="form-group form-group--half">
                    <label for="seats">"Seats"</label>
                    <input
                        type="text"
                        id="seats"
                        class:input--error=move || errors.with(|e| error_for(e, "seats").is_some())
                        prop:value=move || draft.get().seats
                        on:input=move |ev| draft.update(|d| d.seats = event_target_value(&ev))
                    />
                    {move || errors.with(|e| error_for(e, "seats")).map(|e| view! { <span class="field-error">{e}</span> })}
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
