use crate::domain::a006_supplier::api::{SupplierResource, SEARCH_NAME};
use crate::shared::components::list_frame::ListFrame;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::list::{use_debounced_search, use_list, FilterSet, Mutation};
use contracts::shared::paging::Entity;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn SupplierList() -> impl IntoView {
    let ctrl = use_list::<SupplierResource>();
    let search = use_debounced_search(ctrl);
    let state = ctrl.state;

    let name = RwSignal::new(state.with_untracked(|s| s.filters().get(SEARCH_NAME).to_string()));
    let on_search =
        Callback::new(move |value: String| search.schedule(FilterSet::new().with(SEARCH_NAME, value)));

    let toolbar = move || {
        view! {
            <div class="filter-panel-content">
                <A href="/suppliers/create" attr:class="button button--primary">
                    {icon("plus")}
                    " Thêm nhà cung cấp"
                </A>
                <SearchInput value=name on_change=on_search placeholder="Tìm theo tên nhà cung cấp..." />
            </div>
        }
    };

    view! {
        <ListFrame
            list=ctrl.bindings()
            title="Nhà cung cấp"
            columns=&["STT", "Nhà cung cấp", "Số điện thoại", "Địa chỉ", "Thao tác"]
            toolbar=toolbar
        >
            {move || {
                let (first, rows) = state.with(|s| {
                    (s.first_row_number(), s.items().to_vec())
                });
                rows.into_iter()
                    .enumerate()
                    .map(|(i, supplier)| {
                        let id = supplier.entity_id();
                        let edit_href = format!("/suppliers/{}", supplier.id);
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{first + i as u32}</td>
                                <td class="table__cell">{supplier.name}</td>
                                <td class="table__cell">{supplier.phone_number}</td>
                                <td class="table__cell">{supplier.address}</td>
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
