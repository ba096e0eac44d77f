use crate::domain::a004_price::api::{PriceResource, SEARCH_VERSION_NAME};
use crate::shared::components::list_frame::ListFrame;
use crate::shared::components::search_input::SearchInput;
use crate::shared::format::{format_date, format_optional_vnd, format_vnd};
use crate::shared::icons::icon;
use crate::shared::list::{use_debounced_search, use_list, FilterSet, Mutation};
use contracts::shared::paging::Entity;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn PriceList() -> impl IntoView {
    let ctrl = use_list::<PriceResource>();
    let search = use_debounced_search(ctrl);
    let state = ctrl.state;

    let version_name = RwSignal::new(
        state.with_untracked(|s| s.filters().get(SEARCH_VERSION_NAME).to_string()),
    );
    let on_search = Callback::new(move |value: String| {
        search.schedule(FilterSet::new().with(SEARCH_VERSION_NAME, value))
    });

    let toolbar = move || {
        view! {
            <div class="filter-panel-content">
                <SearchInput value=version_name on_change=on_search placeholder="Tìm theo phiên bản..." />
            </div>
        }
    };

    view! {
        <ListFrame
            list=ctrl.bindings()
            title="Giá sản phẩm"
            columns=&["STT", "Phiên bản", "Giá bán", "Giá khuyến mãi", "Ngày bắt đầu", "Ngày kết thúc", "Thao tác"]
            toolbar=toolbar
        >
            {move || {
                let (first, rows) = state.with(|s| {
                    (s.first_row_number(), s.items().to_vec())
                });
                rows.into_iter()
                    .enumerate()
                    .map(|(i, price)| {
                        let id = price.entity_id();
                        let edit_href = format!("/prices/{}", price.id);
                        let version = price.version_name().to_string();
                        let start = price.start_date.as_deref().map(format_date).unwrap_or_default();
                        let end = price.end_date.as_deref().map(format_date).unwrap_or_default();
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{first + i as u32}</td>
                                <td class="table__cell">{version}</td>
                                <td class="table__cell table__cell--number">{format_vnd(price.price_selling)}</td>
                                <td class="table__cell table__cell--number">
                                    {format_optional_vnd(price.promotion_price)}
                                </td>
                                <td class="table__cell">{start}</td>
                                <td class="table__cell">{end}</td>
                                <td class="table__cell">
                                    <A href=edit_href attr:class="button button--icon" attr:title="Sửa">
                                        {icon("edit")}
                                    </A>
                                    <button
                                        class="button button--icon"
                                        title="Xóa"
                                        on:click=move |_| ctrl.request_confirm(id.clone(), Mutation::Delete)
                                    >
                                        {icon("delete")}
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()
            }}
        </ListFrame>
    }
}
