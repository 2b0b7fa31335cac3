use crate::routes::routes::AppRoutes;
use crate::shared::busy::BusyService;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Fire-and-forget UI feedback services, available everywhere.
    provide_context(ToastService::new());
    provide_context(BusyService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <ToastHost />
        </AuthProvider>
    }
}
