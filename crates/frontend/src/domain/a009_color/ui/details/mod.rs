use crate::domain::a009_color::api::ColorResource;
use crate::shared::name_form::name_form;
use leptos::prelude::*;

#[component]
pub fn ColorDetails() -> impl IntoView {
    name_form::<ColorResource>()
}
