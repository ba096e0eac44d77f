pub mod api_utils;
pub mod components;
pub mod config;
pub mod format;
pub mod http;
pub mod icons;
pub mod list;
pub mod name_form;
