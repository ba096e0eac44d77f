//! User registration form

mod view;
mod view_model;

pub use view::UserRegister;
pub use view_model::UserRegisterViewModel;
