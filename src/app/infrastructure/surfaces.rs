//! FLTK widgets behind the surface traits.
//!
//! FLTK does not expose a text display's top line, so it is recovered by
//! asking which line starts are on screen with `position_to_xy`, starting
//! from where the top was last seen. Line starts are indexed when the text
//! changes; a scroll check never reads the buffer.

use fltk::{
    app, draw,
    enums::Font,
    frame::Frame,
    group::Flex,
    prelude::*,
    text::{TextBuffer, TextDisplay, TextEditor},
};

use super::buffer::{ModifyHook, buffer_text_no_leak};
use crate::app::domain::{BufferView, EditCapability, GutterSurface, ScrollSurface};
use crate::app::services::gutter::{DISPLAY_MARGINS, bottom_inset, display_width};
use crate::app::services::scroll::{fraction_for_top_line, locate_top_line, top_line_for_fraction};
use crate::app::services::text_ops::line_starts;

/// Extra pixels per row on top of the font size; keeps the row estimate at
/// or below what the widget really shows.
const ROW_LEADING: i32 = 4;

fn visible_rows<D: DisplayExt>(display: &D) -> usize {
    (display.h() / (display.text_size() + ROW_LEADING)).max(1) as usize
}

/// Fractional top-line offset of `display`, whose lines start at `starts`.
fn display_fraction<D: DisplayExt>(display: &D, starts: &[usize], hint: &mut usize) -> f64 {
    let top = locate_top_line(starts.len(), visible_rows(display), *hint, |line| {
        display.position_to_xy(starts[line] as i32) != (0, 0)
    });
    *hint = top;
    fraction_for_top_line(top, starts.len())
}

fn scroll_display<D: DisplayExt>(
    display: &mut D,
    total: usize,
    fraction: f64,
    hint: &mut usize,
) {
    let top = top_line_for_fraction(fraction, total);
    // FLTK numbers lines from 1.
    display.scroll(top as i32 + 1, 0);
    *hint = top;
}

/// Pixel width of the widest line of `text` in `font` at `size`.
fn widest_line(text: &str, font: Font, size: i32) -> f64 {
    draw::set_font(font, size);
    text.split('\n')
        .map(|line| {
            if line.contains('\t') {
                draw::width(&line.replace('\t', "        "))
            } else {
                draw::width(line)
            }
        })
        .fold(0.0, f64::max)
}

/// The editable Buffer View.
pub struct EditorView {
    editor: TextEditor,
    buffer: TextBuffer,
    starts: Vec<usize>,
    widest: f64,
    top_hint: usize,
    _modify_hook: ModifyHook,
}

impl EditorView {
    pub fn new(editor: TextEditor, buffer: TextBuffer, modify_hook: ModifyHook) -> Self {
        Self {
            editor,
            buffer,
            starts: vec![0],
            widest: 0.0,
            top_hint: 0,
            _modify_hook: modify_hook,
        }
    }

    /// Space the editor's horizontal scrollbar takes from its text rows
    /// right now; zero while every line fits.
    pub fn horizontal_scrollbar_height(&self) -> i32 {
        let scrollbar = app::scrollbar_size();
        let mut area = self.editor.w() - DISPLAY_MARGINS;
        if self.starts.len() > visible_rows(&self.editor) {
            area -= scrollbar;
        }
        bottom_inset(self.widest, area, scrollbar)
    }
}

impl EditCapability for EditorView {
    fn cut(&mut self) {
        self.editor.cut();
    }

    fn copy(&mut self) {
        self.editor.copy();
    }

    fn paste(&mut self) {
        self.editor.paste();
    }

    fn undo(&mut self) {
        self.editor.undo();
    }

    fn redo(&mut self) {
        self.editor.redo();
    }
}

impl BufferView for EditorView {
    fn text(&self) -> String {
        buffer_text_no_leak(&self.buffer)
    }

    fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.editor.set_insert_position(0);
        self.editor.show_insert_position();
        self.top_hint = 0;
    }

    fn text_counted(&mut self, text: &str) {
        self.starts = line_starts(text);
        self.widest = widest_line(text, self.editor.text_font(), self.editor.text_size());
    }
}

impl ScrollSurface for EditorView {
    fn scroll_fraction(&mut self) -> f64 {
        display_fraction(&self.editor, &self.starts, &mut self.top_hint)
    }

    fn scroll_to_fraction(&mut self, fraction: f64) {
        let total = self.starts.len();
        scroll_display(&mut self.editor, total, fraction, &mut self.top_hint);
    }
}

/// The read-only line-number gutter: a display above a spacer, in a column
/// whose width is fixed inside the window's row.
pub struct GutterView {
    display: TextDisplay,
    buffer: TextBuffer,
    row: Flex,
    column: Flex,
    spacer: Frame,
    starts: Vec<usize>,
    inset: i32,
    top_hint: usize,
}

impl GutterView {
    pub fn new(
        display: TextDisplay,
        buffer: TextBuffer,
        row: Flex,
        column: Flex,
        spacer: Frame,
    ) -> Self {
        Self {
            display,
            buffer,
            row,
            column,
            spacer,
            starts: vec![0],
            inset: 0,
            top_hint: 0,
        }
    }

    /// Hold back `height` pixels under the display, matching the editor's
    /// horizontal scrollbar.
    pub fn set_bottom_inset(&mut self, height: i32) {
        if height == self.inset {
            return;
        }
        self.inset = height;
        self.column.fixed(&self.spacer, height);
        self.column.redraw();
    }
}

impl GutterSurface for GutterView {
    fn show_rows(&mut self, rows: &str) {
        self.buffer.set_text(rows);
        self.starts = line_starts(rows);
        self.top_hint = 0;
    }

    fn set_width(&mut self, width: i32) {
        let outer = display_width(width, app::scrollbar_size());
        self.row.fixed(&self.column, outer);
        self.row.redraw();
    }
}

impl ScrollSurface for GutterView {
    fn scroll_fraction(&mut self) -> f64 {
        display_fraction(&self.display, &self.starts, &mut self.top_hint)
    }

    fn scroll_to_fraction(&mut self, fraction: f64) {
        let total = self.starts.len();
        scroll_display(&mut self.display, total, fraction, &mut self.top_hint);
    }
}
