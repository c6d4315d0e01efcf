use std::path::{Path, PathBuf};

use crate::app::services::text_ops::extract_filename;

pub const APP_NAME: &str = "Code Pilot";
pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

/// Per-window document state that lives outside the text widget.
///
/// The characters themselves are owned by the Buffer View; a `Document` only
/// remembers where they were last loaded from or written to.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Document {
    file_path: Option<PathBuf>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn associate(&mut self, path: impl Into<PathBuf>) {
        self.file_path = Some(path.into());
    }

    pub fn clear_association(&mut self) {
        self.file_path = None;
    }

    pub fn display_name(&self) -> String {
        match self.file_path {
            Some(ref path) => extract_filename(&path.to_string_lossy()),
            None => UNTITLED.to_string(),
        }
    }

    /// Window title for this document, e.g. `notes.txt - Code Pilot`.
    pub fn window_title(&self) -> String {
        format!("{} - {}", self.display_name(), APP_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_untitled() {
        let doc = Document::new();
        assert!(doc.file_path().is_none());
        assert_eq!(doc.display_name(), "Untitled");
        assert_eq!(doc.window_title(), "Untitled - Code Pilot");
    }

    #[test]
    fn test_association_drives_title() {
        let mut doc = Document::new();
        doc.associate("/home/user/notes.txt");
        assert_eq!(doc.file_path(), Some(Path::new("/home/user/notes.txt")));
        assert_eq!(doc.window_title(), "notes.txt - Code Pilot");

        doc.clear_association();
        assert_eq!(doc.window_title(), "Untitled - Code Pilot");
    }
}
