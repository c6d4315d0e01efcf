//! Capabilities the editor needs from its text surfaces.
//!
//! The FLTK adaptors in `app::infrastructure::surfaces` implement these for
//! real widgets; tests implement them over plain strings.

/// Native clipboard and history operations of an editable text widget.
pub trait EditCapability {
    fn cut(&mut self);
    fn copy(&mut self);
    fn paste(&mut self);
    fn undo(&mut self);
    fn redo(&mut self);
}

/// The editable surface that owns the Document's characters.
pub trait BufferView: EditCapability {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    /// Called after each recount with the text that was counted, so the
    /// view can index it instead of reading itself again.
    fn text_counted(&mut self, _text: &str) {}
}

/// The read-only surface that shows line numbers.
pub trait GutterSurface {
    /// Replace everything shown with `rows`, one number per line.
    fn show_rows(&mut self, rows: &str);
    /// Resize the surface to `width` pixels.
    fn set_width(&mut self, width: i32);
}

/// A vertically scrollable surface addressed by fractional offset.
///
/// A fraction of `0.0` shows the first line at the top; `f` means the share of
/// the content above the top edge is `f`.
pub trait ScrollSurface {
    fn scroll_fraction(&mut self) -> f64;
    fn scroll_to_fraction(&mut self, fraction: f64);
}
