use fltk::enums::{Color, Font};

/// Fixed look and geometry of an editor window.
///
/// Nothing here is read from or written to disk; every window is built from
/// `EditorConfig::default()`.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub window_width: i32,
    pub window_height: i32,
    pub menu_height: i32,
    pub font: Font,
    pub font_size: i32,
    pub gutter_bgcolor: Color,
    pub gutter_fgcolor: Color,
    /// Seconds between scroll checks. Scrollbar drags never reach the
    /// widgets' own event handlers, so they are only seen by polling.
    pub scroll_poll_interval: f64,
    pub help_url: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_width: 1025,
            window_height: 725,
            menu_height: 30,
            font: Font::Courier,
            font_size: 14,
            gutter_bgcolor: Color::from_rgb(240, 240, 240),
            gutter_fgcolor: Color::from_rgb(100, 100, 100),
            scroll_poll_interval: 0.05,
            help_url: "https://example.com/help".to_string(),
        }
    }
}
