use crate::domain::a010_size::api::SizeResource;
use crate::shared::name_form::name_list;
use leptos::prelude::*;

#[component]
pub fn SizeList() -> impl IntoView {
    name_list::<SizeResource>()
}
