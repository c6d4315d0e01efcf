use fltk::app::Sender;
use tracing::{debug, info};

use super::controllers::window::EditorWindow;
use super::domain::{EditorConfig, Message, WindowId};
use super::infrastructure::platform::open_in_browser;
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::dialogs::show_error;

/// Whether the dispatch loop should keep running after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Owns every open window and routes messages to them.
///
/// Windows never see each other; the only thing held here is the list of
/// them and the id counter.
pub struct AppState {
    windows: Vec<EditorWindow>,
    next_id: u64,
    sender: Sender<Message>,
    config: EditorConfig,
}

impl AppState {
    pub fn new(sender: Sender<Message>, config: EditorConfig) -> Self {
        Self {
            windows: Vec::new(),
            next_id: 1,
            sender,
            config,
        }
    }

    pub fn open_window(&mut self) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        self.windows.push(EditorWindow::new(id, &self.sender, &self.config));
        info!(window = id.0, open = self.windows.len(), "opened window");
        id
    }

    fn close_window(&mut self, id: WindowId) {
        if let Some(index) = self.windows.iter().position(|w| w.id() == id) {
            self.windows.remove(index).close();
        }
    }

    pub fn handle(&mut self, msg: Message) -> Flow {
        match msg {
            Message::FileNewWindow => {
                self.open_window();
            }
            Message::FileExit => {
                info!("exit requested");
                return Flow::Exit;
            }
            Message::WindowClose(id) => {
                self.close_window(id);
                if self.windows.is_empty() {
                    info!("last window closed");
                    return Flow::Exit;
                }
            }
            Message::ShowAbout => show_about_dialog(),
            Message::OpenHelp => {
                if let Err(e) = open_in_browser(&self.config.help_url) {
                    show_error(&e.to_string());
                }
            }
            other => {
                let Some(id) = other.window() else {
                    return Flow::Continue;
                };
                match self.windows.iter_mut().find(|w| w.id() == id) {
                    Some(window) => window.handle(other),
                    // Buffer callbacks can still fire while a window closes.
                    None => debug!(?other, "message for closed window"),
                }
            }
        }
        Flow::Continue
    }
}
