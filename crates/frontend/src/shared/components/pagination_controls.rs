use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - reusable pagination bar.
///
/// Pages are 1-based; the window size is fixed by the caller's store, so
/// the bar only reports page changes.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (never below 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// 1-based index of the first visible row (0 when empty)
    #[prop(into)]
    start: Signal<usize>,

    /// 1-based index of the last visible row
    #[prop(into)]
    end: Signal<usize>,

    /// Total visible rows across all pages
    #[prop(into)]
    total: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <span class="pagination__info">
                {move || format!("Showing {}-{} of {}", start.get(), end.get(), total.get())}
            </span>
            <div class="pagination__controls">
                <button
                    class="pagination__btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    (1..=total_pages.get()).map(|page| {
                        view! {
                            <button
                                class="pagination__num"
                                class:pagination__num--active=move || current_page.get() == page
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page}
                            </button>
                        }
                    }).collect_view()
                }}
                <button
                    class="pagination__btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </div>
    }
}
