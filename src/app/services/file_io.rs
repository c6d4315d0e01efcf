use std::fs;
use std::io;
use std::path::Path;

use tracing::{info, warn};

use crate::app::infrastructure::error::{AppError, Result};

/// Read the whole file at `path` as text.
///
/// Text widgets end their strings at NUL, so a file containing one could
/// not be shown or saved back whole and is refused.
pub fn read_document(path: &Path) -> Result<String> {
    let read = fs::read_to_string(path).and_then(|content| {
        if content.contains('\0') {
            Err(io::Error::new(io::ErrorKind::InvalidData, "file contains NUL bytes"))
        } else {
            Ok(content)
        }
    });
    match read {
        Ok(content) => {
            info!(path = %path.display(), bytes = content.len(), "opened file");
            Ok(content)
        }
        Err(source) => {
            warn!(path = %path.display(), error = %source, "failed to open file");
            Err(AppError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Write `text` to `path` exactly as given, replacing any existing file.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    match fs::write(path, text) {
        Ok(()) => {
            info!(path = %path.display(), bytes = text.len(), "saved file");
            Ok(())
        }
        Err(source) => {
            warn!(path = %path.display(), error = %source, "failed to save file");
            Err(AppError::Write {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
