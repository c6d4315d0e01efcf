//! Code Pilot: a minimal notepad whose line-number gutter follows the
//! editor's content and scroll position.

pub mod app;
pub mod ui;
