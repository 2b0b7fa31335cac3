use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Modal dialog frame (overlay + surface + header).
///
/// At most one dialog is ever mounted: each section renders its frame from
/// a single dialog-state value, so opening a new dialog replaces the old
/// one instead of stacking.
#[component]
pub fn ModalFrame(
    /// Title shown in the dialog header.
    title: String,
    /// Called when the dialog should close (close button, overlay click).
    on_close: Callback<()>,
    /// Extra class for the dialog surface.
    #[prop(optional)]
    modal_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Only close if both press and release happened on the overlay itself.
    // This prevents closing when the user selects text inside the dialog
    // and releases the mouse outside.
    let handle_overlay_mouse_down = {
        let is_direct_overlay_event = is_direct_overlay_event;
        move |ev: ev::MouseEvent| {
            overlay_mouse_down.set(is_direct_overlay_event(&ev));
        }
    };

    let handle_overlay_click = {
        let is_direct_overlay_event = is_direct_overlay_event;
        move |ev: ev::MouseEvent| {
            let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
            overlay_mouse_down.set(false);
            if should_close {
                // Defer close to next tick: avoids Leptos event delegation
                // calling a dropped handler when the overlay is removed
                // synchronously during its own click dispatch.
                let on_close = on_close;
                spawn_local(async move {
                    TimeoutFuture::new(0).await;
                    on_close.run(());
                });
            }
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=format!("modal {}", modal_class.unwrap_or_default())
                on:click=stop_propagation
            >
                <div class="modal__header">
                    <h3 class="modal__title">{title}</h3>
                    <button class="button button--icon modal__close" on:click=handle_close>
                        {crate::shared::icons::icon("x")}
                    </button>
                </div>
                <div class="modal__body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
