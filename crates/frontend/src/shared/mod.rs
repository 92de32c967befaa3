pub mod api_utils;
pub mod components;
pub mod download;
pub mod form_utils;
pub mod http;
pub mod icons;
pub mod notify;
pub mod wizard;
