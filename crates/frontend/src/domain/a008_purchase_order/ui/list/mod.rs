use crate::domain::a008_purchase_order::api::{
    code_filters, date_filters, PurchaseOrderResource, SEARCH_CODE, SEARCH_ORDER_DATE,
};
use crate::shared::components::list_frame::ListFrame;
use crate::shared::components::search_input::SearchInput;
use crate::shared::format::format_date;
use crate::shared::icons::icon;
use crate::shared::list::{use_debounced_search, use_list, Mutation};
use contracts::domain::a008_purchase_order::STATUS_DELIVERED;
use contracts::shared::paging::Entity;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn PurchaseOrderList() -> impl IntoView {
    let ctrl = use_list::<PurchaseOrderResource>();
    let search = use_debounced_search(ctrl);
    let state = ctrl.state;

    let initial = state.with_untracked(|s| s.filters().clone());
    let code = RwSignal::new(initial.get(SEARCH_CODE).to_string());
    let order_date = RwSignal::new(initial.get(SEARCH_ORDER_DATE).to_string());
    let date_error = RwSignal::new(None::<&'static str>);

    // code search and date filter exclude each other
    let on_code = Callback::new(move |value: String| {
        order_date.set(String::new());
        date_error.set(None);
        search.schedule(code_filters(&value));
    });

    let filter_by_date = move |_| {
        search.cancel();
        match date_filters(&order_date.get_untracked()) {
            Ok(filters) => {
                code.set(String::new());
                date_error.set(None);
                ctrl.apply_filters(filters);
            }
            Err(message) => date_error.set(Some(message)),
        }
    };

    let clear = move |_| {
        search.cancel();
        code.set(String::new());
        order_date.set(String::new());
        date_error.set(None);
        ctrl.clear_filters();
    };

    let toolbar = move || {
        view! {
            <div class="filter-panel-content">
                <SearchInput value=code on_change=on_code placeholder="Tìm theo mã đơn hàng..." />
                <input
                    type="date"
                    class="form-control"
                    class:is-invalid=move || date_error.get().is_some()
                    prop:value=move || order_date.get()
                    on:input=move |ev| order_date.set(event_target_value(&ev))
                />
                <button class="button button--secondary" on:click=filter_by_date>
                    {icon("filter")}
                    " Lọc theo ngày"
                </button>
                <button class="button button--secondary" on:click=clear>
                    {icon("x")}
                    " Xóa bộ lọc"
                </button>
                {move || date_error.get().map(|e| view! { <div class="invalid-feedback">{e}</div> })}
            </div>
        }
    };

    view! {
        <ListFrame
            list=ctrl.bindings()
            title="Đơn nhập hàng"
            columns=&[
                "STT",
                "Mã đơn hàng",
                "Ngày đặt hàng",
                "Ngày dự kiến giao",
                "Trạng thái",
                "Nhà cung cấp",
                "Thao tác",
            ]
            toolbar=toolbar
        >
            {move || {
                let (first, rows) = state.with(|s| {
                    (s.first_row_number(), s.items().to_vec())
                });
                rows.into_iter()
                    .enumerate()
                    .map(|(i, po)| {
                        let id = po.entity_id();
                        let delete_id = id.clone();
                        let details_href = format!("/purchase-orders/{}/details", id);
                        let delivered = po.is_delivered();
                        let ordered = po.order_date.as_deref().map(format_date).unwrap_or_default();
                        let shipping = po.shipping_date.as_deref().map(format_date).unwrap_or_default();
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{first + i as u32}</td>
                                <td class="table__cell">{po.code}</td>
                                <td class="table__cell">{ordered}</td>
                                <td class="table__cell">{shipping}</td>
                                <td class="table__cell">{po.status}</td>
                                <td class="table__cell">{po.supplier_name.unwrap_or_default()}</td>
                                <td class="table__cell">
                                    <A href=details_href attr:class="button button--icon" attr:title="Chi tiết">
                                        {icon("details")}
                                    </A>
                                    {(!delivered).then(|| view! {
                                        <button
                                            class="button button--icon"
                                            title="Xác nhận đã giao"
                                            on:click=move |_| ctrl.request_confirm(
                                                id.clone(),
                                                Mutation::SetStatus(STATUS_DELIVERED.to_string()),
                                            )
                                        >
                                            {icon("check")}
                                        </button>
                                    })}
                                    <button
                                        class="button button--icon"
                                        title="Xóa"
                                        on:click=move |_| ctrl.request_confirm(delete_id.clone(), Mutation::Delete)
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
