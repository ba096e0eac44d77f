use super::alert_banner::AlertBanner;
use super::confirm_modal::ConfirmModal;
use super::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list::ListBindings;
use leptos::prelude::*;
use thaw::*;

/// Placeholder row for a page without results.
#[component]
pub fn EmptyRow(colspan: usize, #[prop(optional, into)] text: Option<String>) -> impl IntoView {
    let text = text.unwrap_or_else(|| "Không có dữ liệu".to_string());
    view! {
        <tr class="table__row table__row--empty">
            <td class="table__cell text-muted" colspan=colspan.to_string()>{text}</td>
        </tr>
    }
}

/// Page chrome shared by every list: header, alert, toolbar, table head,
/// empty state, pagination and the confirmation dialog.
#[component]
pub fn ListFrame(
    list: ListBindings,
    #[prop(into)] title: String,
    columns: &'static [&'static str],
    /// Search boxes, filters, create button
    #[prop(optional, into)]
    toolbar: Option<ViewFn>,
    /// Rows of the current page
    children: ChildrenFn,
) -> impl IntoView {
    let is_loading = list.is_loading;
    let is_empty = list.is_empty;
    let colspan = columns.len();

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.on_refresh.run(())
                        disabled=is_loading
                    >
                        {icon("refresh")}
                        {move || if is_loading.get() { " Đang tải..." } else { " Làm mới" }}
                    </Button>
                </div>
            </div>

            <AlertBanner alert=list.alert on_dismiss=list.on_dismiss />

            {toolbar.map(|toolbar| view! { <div class="filter-panel">{toolbar.run()}</div> })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {columns
                                .iter()
                                .map(|c| view! { <th class="table__header-cell">{*c}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if is_empty.get() {
                                view! { <EmptyRow colspan=colspan /> }.into_any()
                            } else {
                                children()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=list.current_page
                total_pages=list.total_pages
                has_prev=list.has_prev
                has_next=list.has_next
                max_pages_to_show=list.max_pages_to_show
                on_page_change=list.on_page_change
                on_prev=list.on_prev
                on_next=list.on_next
            />

            {move || {
                list.confirm_prompt.get().map(|prompt| view! {
                    <ConfirmModal
                        title="Xác nhận"
                        message=Signal::derive(move || prompt.to_string())
                        on_confirm=list.on_confirm
                        on_cancel=list.on_cancel
                    />
                })
            }}
        </div>
    }
}
