use crate::domain::a001_category::api::CategoryResource;
use crate::shared::name_form::name_list;
use leptos::prelude::*;

#[component]
pub fn CategoryList() -> impl IntoView {
    name_list::<CategoryResource>()
}
