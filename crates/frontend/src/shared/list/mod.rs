//! Paginated list core shared by every entity list page.

pub mod alert;
pub mod controller;
pub mod debounce;
pub mod driver;
pub mod filters;
pub mod mutation;
pub mod page_items;
pub mod query_mirror;
pub mod resource;
pub mod state;

pub use controller::{use_debounced_search, use_list, ListBindings, ListController, SearchHandle};
pub use filters::FilterSet;
pub use mutation::Mutation;
pub use resource::{ListResource, Route, SearchRoute};
pub use state::ListState;
