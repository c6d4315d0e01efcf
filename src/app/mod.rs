//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, Message, EditorConfig, surface traits)
//! - `controllers/` - Orchestration (EditorSession, EditorWindow)
//! - `services/` - Toolkit-free operations (gutter rows, scroll mirroring, file I/O)
//! - `infrastructure/` - External integrations (FLTK surfaces, browser, error)
//! - `state.rs` - Owner of every window, message dispatch

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::session::{EditAction, EditorSession, SaveOutcome};
pub use domain::{Document, EditorConfig, Message, WindowId};
pub use infrastructure::error::{AppError, Result};
pub use state::{AppState, Flow};
