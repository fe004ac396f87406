pub mod begin;
pub mod home;
pub mod icon_button;
pub mod not_found;
pub mod style;
pub mod views;
