//! Content zone: the shared mount container all sections load into.
//!
//! `SectionHost` drives the fragment lifecycle (fetch the active
//! section's markup, swap it in on success, render an inline error panel
//! on failure) and mounts the matching interactive widget below the
//! fragment chrome. Section state lives inside the widget, so it is
//! discarded whenever the mount changes hands.

use crate::layout::global_context::DashboardContext;
use crate::sections::bookings::BookingsSection;
use crate::sections::content::ContentSection;
use crate::sections::main_dashboard::MainDashboard;
use crate::sections::messages::MessagesSection;
use crate::sections::packages::PackagesSection;
use crate::sections::settings::SettingsSection;
use crate::sections::users::UsersSection;
use crate::shared::busy::{BusyOverlay, BusyService};
use crate::shared::fragments::load_fragment;
use crate::shared::icons::icon;
use contracts::sections::Section;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}

#[derive(Clone)]
enum SectionContent {
    Loading,
    Ready { section: Section, chrome: String },
    Failed { section: Section },
}

#[component]
pub fn SectionHost() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found in context");
    let busy = use_context::<BusyService>().expect("BusyService not found in context");
    let (content, set_content) = signal(SectionContent::Loading);

    Effect::new(move |_| {
        // Every navigation bumps the epoch, so tracking it alone covers
        // both section changes and same-section re-navigation.
        let epoch = ctx.epoch.get();
        let section = ctx.active.get_untracked();

        // The old content is dropped before the fetch starts: ownership
        // of the mount transfers atomically, nothing dangles.
        set_content.set(SectionContent::Loading);
        busy.show();
        spawn_local(async move {
            let result = load_fragment(section).await;
            busy.hide();

            // A later navigation may have superseded this load while it
            // was in flight; a stale continuation must not touch the mount.
            if ctx.current_epoch() != epoch {
                log::debug!("Dropping stale fragment load for '{}'", section.id());
                return;
            }

            match result {
                Ok(chrome) => set_content.set(SectionContent::Ready { section, chrome }),
                Err(e) => {
                    log::error!("Error loading section '{}': {}", section.id(), e);
                    set_content.set(SectionContent::Failed { section });
                }
            }
        });
    });

    view! {
        <div class="section-host">
            <BusyOverlay />
            {move || match content.get() {
                SectionContent::Loading => view! { <div class="section-loading"></div> }.into_any(),
                SectionContent::Ready { section, chrome } => view! {
                    <>
                        <div class="section-chrome" inner_html=chrome></div>
                        {section_widget(section)}
                    </>
                }.into_any(),
                SectionContent::Failed { section } => {
                    view! { <SectionLoadError section=section /> }.into_any()
                }
            }}
        </div>
    }
}

/// Maps the freshly mounted section to its interactive widget. A new
/// widget instance is created on every successful load, wiring a fresh
/// store to the new markup.
fn section_widget(section: Section) -> AnyView {
    match section {
        Section::Main => view! { <MainDashboard /> }.into_any(),
        Section::Content => view! { <ContentSection /> }.into_any(),
        Section::Packages => view! { <PackagesSection /> }.into_any(),
        Section::Bookings => view! { <BookingsSection /> }.into_any(),
        Section::Users => view! { <UsersSection /> }.into_any(),
        Section::Messages => view! { <MessagesSection /> }.into_any(),
        Section::Settings => view! { <SettingsSection /> }.into_any(),
    }
}

/// Static error panel shown when a fragment fails to load. Navigation
/// stays usable; there is no automatic retry.
#[component]
fn SectionLoadError(section: Section) -> impl IntoView {
    view! {
        <div class="error-panel glass-card">
            {icon("alert-triangle")}
            <h3>"Error Loading Section"</h3>
            <p>{format!("Unable to load the {} section. Please try again.", section.title())}</p>
        </div>
    }
}
