//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document, its file association and WindowId
//! - Fixed editor configuration
//! - Message types for the event system
//! - Surface traits implemented by the toolkit adaptors

pub mod config;
pub mod document;
pub mod messages;
pub mod surface;

pub use config::EditorConfig;
pub use document::{Document, WindowId};
pub use messages::Message;
pub use surface::{BufferView, EditCapability, GutterSurface, ScrollSurface};
