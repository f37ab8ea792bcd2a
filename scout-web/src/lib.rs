pub mod app;
pub mod app_service;
pub mod camera;
pub mod decoder;
pub mod scanner;

pub use app::App;

use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
