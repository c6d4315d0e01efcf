use super::document::WindowId;

/// All messages that can be sent through the FLTK channel.
/// Each menu callback, widget handler and buffer modify callback sends one of
/// these tagged with its window; the dispatch loop in main routes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew(WindowId),
    FileNewWindow,
    FileOpen(WindowId),
    FileSave(WindowId),
    FileSaveAs(WindowId),
    FileExit,
    WindowClose(WindowId),

    // Edit
    EditCut(WindowId),
    EditCopy(WindowId),
    EditPaste(WindowId),
    EditUndo(WindowId),
    EditRedo(WindowId),

    // Help
    ShowAbout,
    OpenHelp,

    // Gutter
    BufferModified(WindowId),
    ScrollChanged(WindowId),
}

impl Message {
    /// The window a message is addressed to, if any.
    pub fn window(&self) -> Option<WindowId> {
        match *self {
            Message::FileNew(id)
            | Message::FileOpen(id)
            | Message::FileSave(id)
            | Message::FileSaveAs(id)
            | Message::WindowClose(id)
            | Message::EditCut(id)
            | Message::EditCopy(id)
            | Message::EditPaste(id)
            | Message::EditUndo(id)
            | Message::EditRedo(id)
            | Message::BufferModified(id)
            | Message::ScrollChanged(id) => Some(id),
            Message::FileNewWindow | Message::FileExit | Message::ShowAbout | Message::OpenHelp => {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_scoped_messages() {
        let id = WindowId(7);
        assert_eq!(Message::FileSave(id).window(), Some(id));
        assert_eq!(Message::ScrollChanged(id).window(), Some(id));
        assert_eq!(Message::EditRedo(id).window(), Some(id));
    }

    #[test]
    fn test_application_messages_have_no_window() {
        assert_eq!(Message::FileNewWindow.window(), None);
        assert_eq!(Message::FileExit.window(), None);
        assert_eq!(Message::OpenHelp.window(), None);
    }
}
