pub mod loader;
pub mod menu;
