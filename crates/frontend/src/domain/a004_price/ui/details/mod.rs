mod view;
mod view_model;

pub use view::PriceDetails;
pub use view_model::PriceDetailsViewModel;
