//! List and create/edit pages shared by resources that only have a name.

pub mod api;
mod list;
mod view;
mod view_model;

pub use api::NamedResource;
pub use list::name_list;
pub use view::name_form;
pub use view_model::NameFormViewModel;
