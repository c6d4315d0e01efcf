use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::{Message, WindowId};

/// Fill `menu` for window `id`. Every item only sends a message; the
/// dispatch loop in main does the work.
pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, id: WindowId) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew(id)) });
    menu.add("File/New Window", Shortcut::Ctrl | Shortcut::Shift | 'n', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileNewWindow) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen(id)) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave(id)) });
    menu.add("File/Save As...", Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs(id)) });
    menu.add("File/Exit", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileExit) });

    // Edit
    menu.add("Edit/Cut", Shortcut::Ctrl | 'x', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCut(id)) });
    menu.add("Edit/Copy", Shortcut::Ctrl | 'c', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCopy(id)) });
    menu.add("Edit/Paste", Shortcut::Ctrl | 'v', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::EditPaste(id)) });
    menu.add("Edit/Undo", Shortcut::Ctrl | 'z', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditUndo(id)) });
    menu.add("Edit/Redo", Shortcut::Ctrl | 'y', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditRedo(id)) });

    // Help
    menu.add("Help/About", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
    menu.add("Help/Help", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenHelp) });
}
