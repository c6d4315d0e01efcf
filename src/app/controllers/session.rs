use std::path::Path;

use tracing::{debug, info};

use crate::app::domain::{BufferView, Document, GutterSurface, ScrollSurface, WindowId};
use crate::app::infrastructure::error::Result;
use crate::app::services::file_io::{read_document, write_document};
use crate::app::services::gutter::{gutter_width, line_count, line_number_rows};
use crate::app::services::scroll::{ScrollLink, ScrollSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Cut,
    Copy,
    Paste,
    Undo,
    Redo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// No file association yet; the caller must ask for a destination.
    NeedsPath,
}

/// Everything one editor window owns: its Buffer View, its gutter, the
/// document's file association and the scroll link between the surfaces.
///
/// Sessions never share state, so "New Window" is just another session.
pub struct EditorSession<V, G> {
    id: WindowId,
    view: V,
    gutter: G,
    document: Document,
    scroll: ScrollLink,
    rows_shown: usize,
    gutter_width: i32,
}

impl<V, G> EditorSession<V, G>
where
    V: BufferView + ScrollSurface,
    G: GutterSurface + ScrollSurface,
{
    pub fn new(id: WindowId, view: V, gutter: G) -> Self {
        let mut session = Self {
            id,
            view,
            gutter,
            document: Document::new(),
            scroll: ScrollLink::new(),
            rows_shown: 0,
            gutter_width: 0,
        };
        session.recompute_gutter();
        session
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn title(&self) -> String {
        self.document.window_title()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn gutter(&self) -> &G {
        &self.gutter
    }

    pub fn gutter_mut(&mut self) -> &mut G {
        &mut self.gutter
    }

    /// Number of rows the gutter showed after the last recount.
    pub fn rows_shown(&self) -> usize {
        self.rows_shown
    }

    /// Recount the Document's lines and rewrite the gutter.
    ///
    /// Rewriting the gutter resets its scroll, so the Buffer View's offset is
    /// pushed back onto it afterwards.
    pub fn recompute_gutter(&mut self) -> usize {
        let text = self.view.text();
        let count = line_count(&text);
        self.view.text_counted(&text);
        self.gutter.show_rows(&line_number_rows(count));

        let width = gutter_width(count);
        if width != self.gutter_width {
            self.gutter.set_width(width);
            self.gutter_width = width;
        }
        if count != self.rows_shown {
            debug!(window = self.id.0, lines = count, "gutter recounted");
        }
        self.rows_shown = count;

        let position = self.view.scroll_fraction();
        self.scroll.mirror(ScrollSource::Buffer, position, &mut self.gutter);
        count
    }

    /// Mirror whichever surface scrolled onto the other.
    pub fn sync_scroll(&mut self) -> Option<ScrollSource> {
        self.scroll.sync(&mut self.view, &mut self.gutter)
    }

    pub fn edit(&mut self, action: EditAction) {
        match action {
            EditAction::Cut => self.view.cut(),
            EditAction::Copy => self.view.copy(),
            EditAction::Paste => self.view.paste(),
            EditAction::Undo => self.view.undo(),
            EditAction::Redo => self.view.redo(),
        }
    }

    // --- File operations ---

    pub fn new_document(&mut self) {
        self.view.set_text("");
        self.document.clear_association();
        self.recompute_gutter();
        info!(window = self.id.0, "new document");
    }

    /// Replace the Document with the file at `path`. On failure nothing
    /// changes.
    pub fn open_path(&mut self, path: &Path) -> Result<()> {
        let content = read_document(path)?;
        self.view.set_text(&content);
        self.document.associate(path);
        self.recompute_gutter();
        Ok(())
    }

    /// Write to the associated path, if there is one.
    pub fn save(&mut self) -> Result<SaveOutcome> {
        match self.document.file_path() {
            Some(path) => {
                write_document(path, &self.view.text())?;
                Ok(SaveOutcome::Saved)
            }
            None => Ok(SaveOutcome::NeedsPath),
        }
    }

    /// Write to `path` and associate the Document with it.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        write_document(path, &self.view.text())?;
        self.document.associate(path);
        Ok(())
    }
}
