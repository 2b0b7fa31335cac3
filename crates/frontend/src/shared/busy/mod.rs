use leptos::prelude::*;

/// Counted busy indicator. Every `show` must be paired with a `hide` on
/// both the success and the failure path; the overlay stays up while any
/// operation is still in flight.
#[derive(Clone, Copy)]
pub struct BusyService {
    pending: RwSignal<u32>,
}

impl BusyService {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(0),
        }
    }

    pub fn show(&self) {
        self.pending.update(|n| *n += 1);
    }

    pub fn hide(&self) {
        self.pending.update(|n| *n = n.saturating_sub(1));
    }

    pub fn is_busy(&self) -> bool {
        self.pending.get() > 0
    }
}

/// Spinner overlay for the content zone.
#[component]
pub fn BusyOverlay() -> impl IntoView {
    let svc = use_context::<BusyService>()
        .expect("BusyService not provided in context (provide it in app root)");

    view! {
        <Show when=move || svc.is_busy()>
            <div class="busy-overlay">
                <div class="busy-overlay__spinner"></div>
                <p>"Loading..."</p>
            </div>
        </Show>
    }
}
