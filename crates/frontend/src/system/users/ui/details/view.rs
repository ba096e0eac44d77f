use super::view_model::UserRegisterViewModel;
use leptos::prelude::*;
use leptos_router::components::Redirect;

#[component]
pub fn UserRegister() -> impl IntoView {
    let vm = UserRegisterViewModel::new();

    let fullname_error = vm.field_error("fullname");
    let phone_error = vm.field_error("phone_number");
    let password_error = vm.field_error("password");
    let retype_error = vm.field_error("retype_password");

    view! {
        <div class="details-container user-details">
            <div class="details-header">
                <h3>"Thêm người dùng"</h3>
            </div>

            {move || vm.saved.get().then(|| view! { <Redirect path="/users" /> })}
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.save_command();
                }
            >
                <div class="form-group">
                    <label for="fullname">"Họ tên"</label>
                    <input
                        type="text"
                        id="fullname"
                        class:is-invalid=move || fullname_error().is_some()
                        prop:value=move || vm.form.with(|f| f.fullname.clone())
                        on:input=move |ev| vm.form.update(|f| f.fullname = event_target_value(&ev))
                    />
                    <div class="invalid-feedback">{fullname_error}</div>
                </div>

                <div class="form-group">
                    <label for="phone_number">"Số điện thoại"</label>
                    <input
                        type="tel"
                        id="phone_number"
                        class:is-invalid=move || phone_error().is_some()
                        prop:value=move || vm.form.with(|f| f.phone_number.clone())
                        on:input=move |ev| vm.form.update(|f| f.phone_number = event_target_value(&ev))
                    />
                    <div class="invalid-feedback">{phone_error}</div>
                </div>

                <div class="form-group">
                    <label for="password">"Mật khẩu"</label>
                    <input
                        type="password"
                        id="password"
                        class:is-invalid=move || password_error().is_some()
                        prop:value=move || vm.form.with(|f| f.password.clone())
                        on:input=move |ev| vm.form.update(|f| f.password = event_target_value(&ev))
                    />
                    <div class="invalid-feedback">{password_error}</div>
                </div>

                <div class="form-group">
                    <label for="retype_password">"Nhập lại mật khẩu"</label>
                    <input
                        type="password"
                        id="retype_password"
                        class:is-invalid=move || retype_error().is_some()
                        prop:value=move || vm.form.with(|f| f.retype_password.clone())
                        on:input=move |ev| vm.form.update(|f| f.retype_password = event_target_value(&ev))
                    />
                    <div class="invalid-feedback">{retype_error}</div>
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
