use std::path::Path;

use fltk::{
    app::{self, Sender, TimeoutHandle},
    prelude::*,
    window::Window,
};
use tracing::{debug, info};

use super::session::{EditAction, EditorSession, SaveOutcome};
use crate::app::domain::{EditorConfig, Message, WindowId};
use crate::app::infrastructure::error::AppError;
use crate::app::infrastructure::surfaces::{EditorView, GutterView};
use crate::ui::dialogs::show_error;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::main_window::build_main_window;

/// One top-level editor window and the session behind it.
pub struct EditorWindow {
    window: Window,
    session: EditorSession<EditorView, GutterView>,
    scroll_poll: TimeoutHandle,
}

impl EditorWindow {
    pub fn new(id: WindowId, sender: &Sender<Message>, config: &EditorConfig) -> Self {
        let widgets = build_main_window(id, sender, config);
        let view = EditorView::new(widgets.text_editor, widgets.text_buffer, widgets.modify_hook);
        let gutter = GutterView::new(
            widgets.gutter,
            widgets.gutter_buffer,
            widgets.row,
            widgets.gutter_column,
            widgets.gutter_spacer,
        );
        let session = EditorSession::new(id, view, gutter);

        let mut editor_window = Self {
            window: widgets.wind,
            session,
            scroll_poll: widgets.scroll_poll,
        };
        editor_window.update_window_title();
        editor_window.align_gutter_height();
        editor_window
    }

    pub fn id(&self) -> WindowId {
        self.session.id()
    }

    pub fn update_window_title(&mut self) {
        self.window.set_label(&self.session.title());
    }

    fn align_gutter_height(&mut self) {
        let inset = self.session.view().horizontal_scrollbar_height();
        self.session.gutter_mut().set_bottom_inset(inset);
    }

    /// Handle a message addressed to this window.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::FileNew(_) => self.file_new(),
            Message::FileOpen(_) => self.file_open(),
            Message::FileSave(_) => self.file_save(),
            Message::FileSaveAs(_) => self.file_save_as(),
            Message::EditCut(_) => self.session.edit(EditAction::Cut),
            Message::EditCopy(_) => self.session.edit(EditAction::Copy),
            Message::EditPaste(_) => self.session.edit(EditAction::Paste),
            Message::EditUndo(_) => self.session.edit(EditAction::Undo),
            Message::EditRedo(_) => self.session.edit(EditAction::Redo),
            Message::BufferModified(_) => {
                self.session.recompute_gutter();
                self.align_gutter_height();
            }
            Message::ScrollChanged(_) => {
                // Also sent by the poll timer, which is how resizes show up.
                self.align_gutter_height();
                if let Some(source) = self.session.sync_scroll() {
                    debug!(window = self.id().0, ?source, "scroll mirrored");
                }
            }
            other => debug!(?other, "not a window message"),
        }
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        self.session.new_document();
        self.update_window_title();
    }

    pub fn file_open(&mut self) {
        let dir = self.current_directory();
        if let Some(path) = native_open_dialog(dir.as_deref()) {
            self.open_file(&path);
        }
    }

    pub fn open_file(&mut self, path: &Path) {
        match self.session.open_path(path) {
            Ok(()) => self.update_window_title(),
            Err(e) => report(&e),
        }
    }

    pub fn file_save(&mut self) {
        match self.session.save() {
            Ok(SaveOutcome::Saved) => self.update_window_title(),
            Ok(SaveOutcome::NeedsPath) => self.file_save_as(),
            Err(e) => report(&e),
        }
    }

    pub fn file_save_as(&mut self) {
        let dir = self.current_directory();
        if let Some(path) = native_save_dialog(dir.as_deref()) {
            match self.session.save_to(&path) {
                Ok(()) => self.update_window_title(),
                Err(e) => report(&e),
            }
        }
    }

    fn current_directory(&self) -> Option<std::path::PathBuf> {
        self.session
            .document()
            .file_path()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
    }

    /// Stop the scroll poll and drop the session, which releases the buffer
    /// callback, before the widgets are destroyed.
    pub fn close(self) {
        info!(window = self.id().0, "closing window");
        let Self {
            mut window,
            session,
            scroll_poll,
        } = self;
        app::remove_timeout3(scroll_poll);
        drop(session);
        window.hide();
        Window::delete(window);
    }
}

fn report(e: &AppError) {
    show_error(&e.to_string());
}
