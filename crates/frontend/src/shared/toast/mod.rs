use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const AUTO_DISMISS_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    fn class(&self) -> &'static str {
        match self {
            Severity::Success => "toast--success",
            Severity::Error => "toast--error",
            Severity::Warning => "toast--warning",
            Severity::Info => "toast--info",
        }
    }

    fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✗",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }
}

#[derive(Clone)]
struct ToastEntry {
    id: u64,
    message: String,
    severity: Severity,
}

/// Fire-and-forget notifications with auto-dismiss.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(ToastEntry {
                id,
                message: message.into(),
                severity,
            });
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            toasts.update(|t| t.retain(|entry| entry.id != id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, Severity::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, Severity::Info);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(message, Severity::Warning);
    }
}

/// Renders active toasts in the corner of the viewport.
///
/// Must be mounted exactly once, at the application root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div class="toast-stack">
            <For
                each=move || svc.toasts.get()
                key=|entry| entry.id
                children=move |entry| {
                    view! {
                        <div class=format!("toast {}", entry.severity.class())>
                            <span class="toast__icon">{entry.severity.glyph()}</span>
                            <span class="toast__message">{entry.message.clone()}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
