use super::api::NamedResource;
use super::view_model::NameFormViewModel;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params_map;

/// Create page, or edit page when the route carries an `:id`.
pub fn name_form<R: NamedResource>() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()));
    let vm = NameFormViewModel::<R>::new(id);
    vm.load();
    let name_error = vm.name_error();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{if vm.is_edit_mode() { R::EDIT_TITLE } else { R::CREATE_TITLE }}</h3>
            </div>

            {move || vm.saved.get().then(|| view! { <Redirect path=R::LIST_HREF /> })}
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.save_command();
                }
            >
                <div class="form-group">
                    <label for="name">{R::NAME_LABEL}</label>
                    <input
                        type="text"
                        id="name"
                        class:is-invalid=move || name_error().is_some()
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                    <div class="invalid-feedback">{name_error}</div>
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
