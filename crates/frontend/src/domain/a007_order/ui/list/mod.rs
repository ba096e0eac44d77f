use crate::domain::a007_order::api::{OrderResource, SEARCH_ORDER_CODE};
use crate::shared::components::list_frame::ListFrame;
use crate::shared::components::search_input::SearchInput;
use crate::shared::format::{format_date, format_vnd};
use crate::shared::list::{use_debounced_search, use_list, FilterSet, Mutation};
use contracts::domain::a007_order::OrderStatus;
use contracts::shared::paging::Entity;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn OrderList() -> impl IntoView {
    let ctrl = use_list::<OrderResource>();
    let search = use_debounced_search(ctrl);
    let state = ctrl.state;

    let order_code = RwSignal::new(
        state.with_untracked(|s| s.filters().get(SEARCH_ORDER_CODE).to_string()),
    );
    let on_search = Callback::new(move |value: String| {
        search.schedule(FilterSet::new().with(SEARCH_ORDER_CODE, value))
    });

    let toolbar = move || {
        view! {
            <div class="filter-panel-content">
                <SearchInput value=order_code on_change=on_search placeholder="Tìm theo mã đơn hàng..." />
            </div>
        }
    };

    view! {
        <ListFrame
            list=ctrl.bindings()
            title="Đơn hàng"
            columns=&[
                "STT",
                "Mã đơn hàng",
                "Tên khách hàng",
                "Địa chỉ",
                "Số điện thoại",
                "Tổng tiền",
                "Ngày đặt hàng",
                "Ngày giao hàng",
                "Trạng thái",
            ]
            toolbar=toolbar
        >
            {move || {
                let (first, rows) = state.with(|s| {
                    (s.first_row_number(), s.items().to_vec())
                });
                rows.into_iter()
                    .enumerate()
                    .map(|(i, order)| {
                        let id = order.entity_id();
                        let details_href = format!("/orders/{}/details", id);
                        let status_class = order.status().map(|s| s.css_class()).unwrap_or_default();
                        let order_date = order.order_date.as_deref().map(format_date).unwrap_or_default();
                        let shipping_date = order.shipping_date.as_deref().map(format_date).unwrap_or_default();
                        let current = order.status.clone();
                        let on_status = move |ev: leptos::ev::Event| {
                            let status = event_target_value(&ev);
                            ctrl.mutate(id.clone(), Mutation::SetStatus(status));
                        };
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{first + i as u32}</td>
                                <td class="table__cell">
                                    <A href=details_href attr:title="Chi tiết đơn hàng">{order.order_code}</A>
                                </td>
                                <td class="table__cell">{order.full_name}</td>
                                <td class="table__cell">{order.address}</td>
                                <td class="table__cell">{order.phone_number}</td>
                                <td class="table__cell table__cell--number">{format_vnd(order.total_money)}</td>
                                <td class="table__cell">{order_date}</td>
                                <td class="table__cell">{shipping_date}</td>
                                <td class="table__cell">
                                    <select
                                        class=format!("form-select form-select-no-border {}", status_class)
                                        prop:value=current
                                        on:change=on_status
                                    >
                                        {OrderStatus::ALL
                                            .iter()
                                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                            .collect_view()}
                                    </select>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()
            }}
        </ListFrame>
    }
}
