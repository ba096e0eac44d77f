use crate::domain::a005_inventory::api::{InventoryResource, SEARCH_VERSION_NAME};
use crate::shared::components::list_frame::ListFrame;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::list::{use_debounced_search, use_list, FilterSet, Mutation};
use contracts::shared::paging::Entity;
use leptos::prelude::*;

#[component]
pub fn InventoryList() -> impl IntoView {
    let ctrl = use_list::<InventoryResource>();
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
            title="Tồn kho"
            columns=&["STT", "Phiên bản", "Số lượng nhập", "Tồn kho", "Thao tác"]
            toolbar=toolbar
        >
            {move || {
                let (first, rows) = state.with(|s| {
                    (s.first_row_number(), s.items().to_vec())
                });
                rows.into_iter()
                    .enumerate()
                    .map(|(i, inventory)| {
                        let id = inventory.entity_id();
                        let version = inventory.version_name().to_string();
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{first + i as u32}</td>
                                <td class="table__cell">{version}</td>
                                <td class="table__cell table__cell--number">{inventory.inventory_quantity}</td>
                                <td class="table__cell table__cell--number">{inventory.quantity}</td>
                                <td class="table__cell">
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
