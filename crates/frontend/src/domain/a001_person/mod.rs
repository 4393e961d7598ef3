pub mod api;
pub mod loader;
pub mod options;
pub mod ui;
