use crate::domain::a010_size::api::SizeResource;
use crate::shared::name_form::name_form;
use leptos::prelude::*;

#[component]
pub fn SizeDetails() -> impl IntoView {
    name_form::<SizeResource>()
}
