use crate::domain::a009_color::api::ColorResource;
use crate::shared::name_form::name_list;
use leptos::prelude::*;

#[component]
pub fn ColorList() -> impl IntoView {
    name_list::<ColorResource>()
}
