use crate::domain::a001_category::api as categories;
use crate::domain::a002_product::api::{ProductResource, SEARCH_CATEGORY, SEARCH_NAME};
use crate::shared::api_utils::upload_url;
use crate::shared::components::list_frame::ListFrame;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::list::{use_debounced_search, use_list, FilterSet, Mutation};
use contracts::domain::a001_category::Category;
use contracts::shared::paging::Entity;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ProductList() -> impl IntoView {
    let ctrl = use_list::<ProductResource>();
    let search = use_debounced_search(ctrl);
    let state = ctrl.state;

    let initial = state.with_untracked(|s| s.filters().clone());
    let name = RwSignal::new(initial.get(SEARCH_NAME).to_string());
    let category_id = RwSignal::new(initial.get(SEARCH_CATEGORY).to_string());
    let categories_list = RwSignal::new(Vec::<Category>::new());

    leptos::task::spawn_local(async move {
        match categories::fetch_all().await {
            Ok(list) => categories_list.set(list),
            Err(e) => log::warn!("cannot load categories: {}", e),
        }
    });

    let draft = move || {
        FilterSet::new()
            .with(SEARCH_NAME, name.get_untracked())
            .with(SEARCH_CATEGORY, category_id.get_untracked())
    };

    let on_name = Callback::new(move |_: String| search.schedule(draft()));

    let on_category = move |ev: leptos::ev::Event| {
        category_id.set(event_target_value(&ev));
        search.cancel();
        ctrl.apply_filters(draft());
    };

    let clear = move |_| {
        search.cancel();
        name.set(String::new());
        category_id.set(String::new());
        ctrl.clear_filters();
    };

    let toolbar = move || {
        view! {
            <div class="filter-panel-content">
                <A href="/products/create" attr:class="button button--primary">
                    {icon("plus")}
                    " Thêm sản phẩm"
                </A>
                <SearchInput value=name on_change=on_name placeholder="Tìm theo tên sản phẩm..." />
                <select class="form-select" prop:value=move || category_id.get() on:change=on_category>
                    <option value="">"Tất cả danh mục"</option>
                    <For
                        each=move || categories_list.get()
                        key=|c| c.id
                        children=move |c| view! { <option value=c.id.to_string()>{c.name}</option> }
                    />
                </select>
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
            title="Sản phẩm"
            columns=&["STT", "Hình ảnh", "Tên sản phẩm", "Mã SKU", "Danh mục", "Thao tác"]
            toolbar=toolbar
        >
            {move || {
                let (first, rows) = state.with(|s| {
                    (s.first_row_number(), s.items().to_vec())
                });
                rows.into_iter()
                    .enumerate()
                    .map(|(i, product)| {
                        let id = product.entity_id();
                        let edit_href = format!("/products/{}", product.id);
                        let variants_href = format!("/products/{}/variants", product.id);
                        let image = product.cover_image().map(upload_url);
                        let category = product.category_name().to_string();
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{first + i as u32}</td>
                                <td class="table__cell">
                                    {image.map(|src| view! { <img class="table__thumb" src=src alt="" /> })}
                                </td>
                                <td class="table__cell">{product.name}</td>
                                <td class="table__cell">{product.sku.unwrap_or_default()}</td>
                                <td class="table__cell">{category}</td>
                                <td class="table__cell">
                                    <A href=variants_href attr:class="button button--icon" attr:title="Phiên bản">
                                        {icon("details")}
                                    </A>
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
