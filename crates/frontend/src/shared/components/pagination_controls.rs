use crate::shared::icons::icon;
use crate::shared::list::page_items::{page_items, PageItem};
use leptos::prelude::*;

/// Previous / numbered pages with ellipses / next.
///
/// Pages are 1-based. Nothing is rendered while there is a single page.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] has_prev: Signal<bool>,
    #[prop(into)] has_next: Signal<bool>,
    /// Page numbers shown at once, ellipses excluded
    max_pages_to_show: u32,
    on_page_change: Callback<u32>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let items = move || page_items(current_page.get(), total_pages.get(), max_pages_to_show);

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_prev.run(())
                    disabled=move || !has_prev.get()
                    title="Trang trước"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    items()
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(page) => view! {
                                <button
                                    class="pagination-btn"
                                    class:pagination-btn--active=move || current_page.get() == page
                                    on:click=move |_| {
                                        if current_page.get_untracked() != page {
                                            on_page_change.run(page);
                                        }
                                    }
                                >
                                    {page.to_string()}
                                </button>
                            }
                            .into_any(),
                            PageItem::Ellipsis => view! {
                                <span class="pagination-ellipsis">"…"</span>
                            }
                            .into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| on_next.run(())
                    disabled=move || !has_next.get()
                    title="Trang sau"
                >
                    {icon("chevron-right")}
                </button>
            </nav>
        </Show>
    }
}
