mod view;
mod view_model;

pub use view::ProductVariantList;
pub use view_model::ProductVariantsViewModel;
