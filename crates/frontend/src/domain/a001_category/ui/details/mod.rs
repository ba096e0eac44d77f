use crate::domain::a001_category::api::CategoryResource;
use crate::shared::name_form::name_form;
use leptos::prelude::*;

#[component]
pub fn CategoryDetails() -> impl IntoView {
    name_form::<CategoryResource>()
}
