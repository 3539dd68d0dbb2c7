// Submodules for main UI functionality
pub mod keyboard_input;
pub mod main_ui;
pub mod message_processing;
pub mod statusbar;
pub mod theme;
pub mod toolbar;
