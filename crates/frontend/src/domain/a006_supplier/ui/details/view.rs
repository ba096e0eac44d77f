use super::view_model::SupplierDetailsViewModel;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params_map;

#[component]
pub fn SupplierDetails() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()));
    let vm = SupplierDetailsViewModel::new(id);
    vm.load();

    let name_error = vm.field_error("name");
    let phone_error = vm.field_error("phoneNumber");
    let address_error = vm.field_error("address");

    view! {
        <div class="details-container supplier-details">
            <div class="details-header">
                <h3>{if vm.is_edit_mode() { "Sửa nhà cung cấp" } else { "Thêm nhà cung cấp" }}</h3>
            </div>

            {move || vm.saved.get().then(|| view! { <Redirect path="/suppliers" /> })}
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.save_command();
                }
            >
                <div class="form-group">
                    <label for="name">"Tên nhà cung cấp"</label>
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
                    <label for="phoneNumber">"Số điện thoại"</label>
                    <input
                        type="tel"
                        id="phoneNumber"
                        class:is-invalid=move || phone_error().is_some()
                        prop:value=move || vm.form.with(|f| f.phone_number.clone())
                        on:input=move |ev| vm.form.update(|f| f.phone_number = event_target_value(&ev))
                    />
                    <div class="invalid-feedback">{phone_error}</div>
                </div>

                <div class="form-group">
                    <label for="address">"Địa chỉ"</label>
                    <input
                        type="text"
                        id="address"
                        class:is-invalid=move || address_error().is_some()
                        prop:value=move || vm.form.with(|f| f.address.clone())
                        on:input=move |ev| vm.form.update(|f| f.address = event_target_value(&ev))
                    />
                    <div class="invalid-feedback">{address_error}</div>
                </div>

                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=move || vm.form.with(|f| f.email.clone().unwrap_or_default())
                        on:input=move |ev| vm.form.update(|f| f.email = Some(event_target_value(&ev)))
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
