//! Product create/edit form
//!
//! - view_model.rs: form state, validation and save command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
