use contracts::validation::require;
use leptos::prelude::*;

use crate::shared::toast::ToastService;

const TABS: [(&str, &str); 3] = [
    ("hero", "Hero Section"),
    ("about", "About Us"),
    ("services", "Services"),
];

/// Site content editor: one panel per public-site block, switched by tabs.
#[component]
#[allow(non_snake_case)]
pub fn ContentSection() -> impl IntoView {
    let (active_tab, set_active_tab) = signal("hero");

    view! {
        <div class="content content-section">
            <div class="tab-bar">
                {TABS.into_iter().map(|(tab_id, label)| {
                    view! {
                        <button
                            class="tab-btn"
                            data-tab=tab_id
                            class:tab-btn--active=move || active_tab.get() == tab_id
                            on:click=move |_| set_active_tab.set(tab_id)
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </div>

            {TABS.into_iter().map(|(tab_id, label)| {
                view! {
                    <div class="tab-panel" class:hidden=move || active_tab.get() != tab_id>
                        <ContentForm block=label />
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn ContentForm(block: &'static str) -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let (title, set_title) = signal(block.to_string());
    let (body, set_body) = signal(String::new());
    let (title_error, set_title_error) = signal(Option::<String>::None);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let error = require("title", &title.get()).map(|e| e.message);
        set_title_error.set(error.clone());
        if error.is_some() {
            return;
        }
        toast.success("Changes saved successfully!");
    };

    view! {
        <form class="content-form" on:submit=handle_submit>
            <div class="form-group">
                <label>"Title"</label>
                <input
                    type="text"
                    class:input--error=move || title_error.get().is_some()
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                {move || title_error.get().map(|e| view! { <span class="field-error">{e}</span> })}
            </div>
            <div class="form-group">
                <label>"Text"</label>
                <textarea
                    rows="5"
                    prop:value=move || body.get()
                    on:input=move |ev| set_body.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="button button--primary">"Save"</button>
        </form>
    }
}
