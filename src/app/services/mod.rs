//! Services layer - toolkit-free operations.
//!
//! - Line counting and gutter rows
//! - Scroll mirroring between Buffer View and gutter
//! - File reading and writing
//! - Path and text helpers

pub mod file_io;
pub mod gutter;
pub mod scroll;
pub mod text_ops;
