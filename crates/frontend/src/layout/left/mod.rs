use crate::layout::global_context::DashboardContext;
use crate::shared::icons::icon;
use contracts::sections::Section;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found in context");
    let is_open = move || ctx.sidebar_open.get();

    view! {
        <div data-zone="left" class="app-sidebar" class:hidden=move || !is_open() >
            {children()}
        </div>
    }
}

fn nav_icon(section: Section) -> &'static str {
    match section {
        Section::Main => "layout-dashboard",
        Section::Content => "file-text",
        Section::Packages => "package",
        Section::Bookings => "calendar",
        Section::Users => "users",
        Section::Messages => "message-square",
        Section::Settings => "settings",
    }
}

/// Sidebar navigation: one item per section, exactly one marked active.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found in context");

    view! {
        <nav class="app-sidebar__content">
            {Section::ALL.into_iter().map(|section| {
                // Dispatch goes through the identifier the item carries,
                // the same contract the nav markup exposes.
                let section_id = section.id();
                view! {
                    <a
                        class="nav-item"
                        data-section=section_id
                        class:nav-item--active=move || ctx.active.get() == section
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate_by_id(section_id);
                        }
                    >
                        {icon(nav_icon(section))}
                        <span>{section.title()}</span>
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}
