//! Controllers layer - orchestration and coordination.
//!
//! - `session`: per-window model tying Buffer View, gutter and file actions
//! - `window`: the FLTK window that drives a session

pub mod session;
pub mod window;
