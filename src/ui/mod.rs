//! FLTK user interface: window construction, menu and dialogs.

pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
