use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;

/// Confirmation dialog shared by the cancel/restore/delete flows.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    confirm_label: &'static str,
    /// Extra class for the confirm button (e.g. danger styling).
    #[prop(optional)]
    confirm_class: Option<&'static str>,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <ModalFrame title=title on_close=on_close modal_class="modal--confirm">
            <p class="modal__message">{message}</p>
            <div class="modal__actions">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Keep"
                </button>
                <button
                    class=format!("button button--primary {}", confirm_class.unwrap_or_default())
                    on:click=move |_| on_confirm.run(())
                >
                    {confirm_label}
                </button>
            </div>
        </ModalFrame>
    }
}
