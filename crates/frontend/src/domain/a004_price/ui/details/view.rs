use super::view_model::PriceDetailsViewModel;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params_map;

#[component]
pub fn PriceDetails() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()));
    let vm = PriceDetailsViewModel::new(id);
    vm.load();

    let selling_error = vm.field_error("price_selling");
    let promotion_error = vm.field_error("promotion_price");

    view! {
        <div class="details-container price-details">
            <div class="details-header">
                <h3>"Cập nhật giá"</h3>
                <div class="text-muted">{move || vm.version_name.get()}</div>
            </div>

            {move || vm.saved.get().then(|| view! { <Redirect path="/prices" /> })}
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.save_command();
                }
            >
                <div class="form-group">
                    <label for="price_selling">"Giá bán"</label>
                    <input
                        type="number"
                        id="price_selling"
                        class:is-invalid=move || selling_error().is_some()
                        prop:value=move || vm.form.with(|f| f.price_selling.clone())
                        on:input=move |ev| vm.form.update(|f| f.price_selling = event_target_value(&ev))
                    />
                    <div class="invalid-feedback">{selling_error}</div>
                </div>

                <div class="form-group">
                    <label for="promotion_price">"Giá khuyến mãi"</label>
                    <input
                        type="number"
                        id="promotion_price"
                        class:is-invalid=move || promotion_error().is_some()
                        prop:value=move || vm.form.with(|f| f.promotion_price.clone())
                        on:input=move |ev| vm.form.update(|f| f.promotion_price = event_target_value(&ev))
                    />
                    <div class="invalid-feedback">{promotion_error}</div>
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
