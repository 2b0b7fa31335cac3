use crate::layout::center::SectionHost;
use crate::layout::global_context::DashboardContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = DashboardContext::new();
    provide_context(ctx);

    // Pick up a ?section=... deep link and mirror the active section back
    // into the URL. Runs once when the layout is created.
    ctx.init_url_sync();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <SectionHost /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    // The dashboard never initializes without a session flag; the login
    // page owns the unauthenticated experience.
    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
