mod view;
mod view_model;

pub use view::PurchaseOrderDetailList;
pub use view_model::PurchaseOrderDetailsViewModel;
