use std::path::{Path, PathBuf};

use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

/// Extension given to Save As destinations typed without one.
pub const DEFAULT_EXTENSION: &str = "txt";

/// FLTK filter list: "Description\tPattern" per line. "All Files" comes last
/// so text files are the initial choice.
pub fn text_files_filter() -> String {
    ["Text Files\t*.txt", "All Files\t*"].join("\n")
}

/// Append `DEFAULT_EXTENSION` to `path` if it has no extension.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}

fn chosen(nfc: &NativeFileChooser) -> Option<PathBuf> {
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}

fn start_in(nfc: &mut NativeFileChooser, directory: Option<&Path>) {
    if let Some(dir) = directory {
        // A missing directory just leaves the chooser at its default.
        let _ = nfc.set_directory(&dir);
    }
}

pub fn native_open_dialog(directory: Option<&Path>) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_title("Open");
    nfc.set_filter(&text_files_filter());
    start_in(&mut nfc, directory);
    nfc.show(); // blocks until close
    chosen(&nfc)
}

pub fn native_save_dialog(directory: Option<&Path>) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_title("Save As");
    nfc.set_filter(&text_files_filter());
    nfc.set_option(FileDialogOptions::SaveAsConfirm);
    start_in(&mut nfc, directory);
    nfc.show(); // blocks until close
    chosen(&nfc).map(with_default_extension)
}
