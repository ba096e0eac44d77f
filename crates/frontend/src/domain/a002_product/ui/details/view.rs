use super::view_model::ProductDetailsViewModel;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params_map;

#[component]
pub fn ProductDetails() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()));
    let vm = ProductDetailsViewModel::new(id);
    vm.load();

    let name_error = vm.field_error("name");
    let sku_error = vm.field_error("sku");
    let category_error = vm.field_error("category_id");

    view! {
        <div class="details-container product-details">
            <div class="details-header">
                <h3>{if vm.is_edit_mode() { "Sửa sản phẩm" } else { "Thêm sản phẩm" }}</h3>
            </div>

            {move || vm.saved.get().then(|| view! { <Redirect path="/products" /> })}
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.save_command();
                }
            >
                <div class="form-group">
                    <label for="name">"Tên sản phẩm"</label>
                    <input
                        type="text"
                        id="name"
                        class:is-invalid=move || name_error().is_some()
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                    <div class="invalid-feedback">{name_error}</div>
                </div>

                <div class="form-group">
                    <label for="sku">"Mã SKU"</label>
                    <input
                        type="text"
                        id="sku"
                        class:is-invalid=move || sku_error().is_some()
                        prop:value=move || vm.form.with(|f| f.sku.clone())
                        on:input=move |ev| vm.form.update(|f| f.sku = event_target_value(&ev))
                    />
                    <div class="invalid-feedback">{sku_error}</div>
                </div>

                <div class="form-group">
                    <label for="category_id">"Danh mục"</label>
                    <select
                        id="category_id"
                        class:is-invalid=move || category_error().is_some()
                        prop:value=move || vm.form.with(|f| f.category_id.clone())
                        on:change=move |ev| vm.form.update(|f| f.category_id = event_target_value(&ev))
                    >
                        <option value="">"Chọn danh mục"</option>
                        <For
                            each=move || vm.categories.get()
                            key=|c| c.id
                            children=move |c| view! { <option value=c.id.to_string()>{c.name}</option> }
                        />
                    </select>
                    <div class="invalid-feedback">{category_error}</div>
                </div>

                <div class="form-group">
                    <label for="description">"Mô tả"</label>
                    <textarea
                        id="description"
                        prop:value=move || vm.form.with(|f| f.description.clone())
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>

                <div class="details-actions">
                    <button type="submit" class="button button--primary" disabled=move || vm.saving.get()>
                        {move || if vm.saving.get() { "Đang lưu..." } else { "Lưu" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
