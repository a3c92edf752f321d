pub mod actions;
pub mod common;
pub mod gui;
pub mod launcher;
pub mod logging;
pub mod paths;
pub mod settings;
pub mod snippets;
pub mod window_config;
