pub mod api;
pub mod named;
pub mod paging;
pub mod validation;
