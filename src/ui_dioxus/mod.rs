// Dioxus UI module - consumes the controllers' state and renders it
pub mod app;
pub mod components;
pub mod views;

pub use app::App;
