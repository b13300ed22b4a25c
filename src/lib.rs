pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod control;
pub mod demo;
pub mod keybindings;
pub mod logging;
pub mod ui;
pub mod utils;
