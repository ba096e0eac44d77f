use super::api::{create_href, edit_href, NamedResource};
use crate::shared::components::list_frame::ListFrame;
use crate::shared::icons::icon;
use crate::shared::list::{use_list, Mutation};
use contracts::shared::paging::Entity;
use leptos::prelude::*;
use leptos_router::components::A;

/// Numbered list of names with edit and delete actions.
pub fn name_list<R: NamedResource>() -> impl IntoView {
    let ctrl = use_list::<R>();
    let state = ctrl.state;

    let toolbar = move || {
        view! {
            <div class="filter-panel-content">
                <A href={create_href::<R>()} attr:class="button button--primary">
                    {icon("plus")}
                    {format!(" {}", R::ADD_LABEL)}
                </A>
            </div>
        }
    };

    view! {
        <ListFrame
            list=ctrl.bindings()
            title=R::LIST_TITLE
            columns=&["STT", "Tên", "Thao tác"]
            toolbar=toolbar
        >
            {move || {
                let (first, rows) = state.with(|s| (s.first_row_number(), s.items().to_vec()));
                rows.into_iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let id = item.entity_id();
                        let href = edit_href::<R>(&id);
                        let name = R::row_name(&item).to_string();
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{first + i as u32}</td>
                                <td class="table__cell">{name}</td>
                                <td class="table__cell">
                                    <A href=href attr:class="button button--icon" attr:title="Sửa">
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
