use crate::shared::components::list_frame::ListFrame;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::list::{use_debounced_search, use_list, FilterSet, Mutation};
use crate::system::users::api::{UserResource, SEARCH_FULL_NAME};
use contracts::shared::paging::Entity;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn UserList() -> impl IntoView {
    let ctrl = use_list::<UserResource>();
    let search = use_debounced_search(ctrl);
    let state = ctrl.state;

    let full_name = RwSignal::new(
        state.with_untracked(|s| s.filters().get(SEARCH_FULL_NAME).to_string()),
    );
    let on_search = Callback::new(move |value: String| {
        search.schedule(FilterSet::new().with(SEARCH_FULL_NAME, value))
    });
    let clear = move |_| {
        search.cancel();
        full_name.set(String::new());
        ctrl.clear_filters();
    };

    let toolbar = move || {
        view! {
            <div class="filter-panel-content">
                <A href="/users/create" attr:class="button button--primary">
                    {icon("plus")}
                    " Thêm người dùng"
                </A>
                <SearchInput value=full_name on_change=on_search placeholder="Tìm kiếm..." />
                <button class="button button--secondary" on:click=clear>
                    {icon("filter")}
                    " Xóa bộ lọc"
                </button>
            </div>
        }
    };

    view! {
        <ListFrame
            list=ctrl.bindings()
            title="Người dùng"
            columns=&["STT", "Tên người dùng", "Số điện thoại", "Trạng thái", "Thao tác"]
            toolbar=toolbar
        >
            {move || {
                let (first, rows) = state.with(|s| {
                    (s.first_row_number(), s.items().to_vec())
                });
                rows.into_iter()
                    .enumerate()
                    .map(|(i, user)| {
                        let id = user.entity_id();
                        let delete_id = id.clone();
                        let (toggle, toggle_icon, toggle_title) = if user.is_locked() {
                            (Mutation::Unlock, "unlock", "Mở khóa")
                        } else {
                            (Mutation::Lock, "lock", "Khóa")
                        };
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{first + i as u32}</td>
                                <td class="table__cell">{user.full_name}</td>
                                <td class="table__cell">{user.phone_number}</td>
                                <td class="table__cell">{user.status}</td>
                                <td class="table__cell">
                                    <button
                                        class="button button--icon"
                                        title=toggle_title
                                        on:click=move |_| ctrl.request_confirm(id.clone(), toggle.clone())
                                    >
                                        {icon(toggle_icon)}
                                    </button>
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
