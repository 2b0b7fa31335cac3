use crate::layout::global_context::DashboardContext;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found in context");
    let (auth_state, set_auth_state) = use_auth();
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let user_email = move || {
        auth_state
            .get()
            .identity
            .map(|i| i.email)
            .unwrap_or_default()
    };

    let handle_logout = move |_| {
        toast.info("Logging out...");
        do_logout(set_auth_state);
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <button
                    class="button button--ghost sidebar-toggle"
                    aria-label="Toggle sidebar"
                    on:click=move |_| ctx.toggle_sidebar()
                >
                    {icon("menu")}
                </button>
                <span class="header__brand">"TravelOps"</span>
                <span class="header__title page-title">{move || ctx.active.get().title()}</span>
            </div>
            <div class="header__actions">
                <span class="header__user">{user_email}</span>
                <button class="button button--ghost logout-btn" on:click=handle_logout>
                    {icon("log-out")}
                    "Logout"
                </button>
            </div>
        </header>
    }
}
