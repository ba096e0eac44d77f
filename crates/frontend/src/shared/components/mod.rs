pub mod alert_banner;
pub mod confirm_modal;
pub mod list_frame;
pub mod pagination_controls;
pub mod search_input;
