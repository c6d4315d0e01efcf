//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - FLTK buffer text access
//! - FLTK widgets behind the surface traits
//! - Browser launching
//! - Error types

pub mod buffer;
pub mod error;
pub mod platform;
pub mod surfaces;
