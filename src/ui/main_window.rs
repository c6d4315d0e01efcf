use fltk::{
    app::{self, Sender, TimeoutHandle},
    enums::{Event, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextDisplay, TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::{EditorConfig, Message, WindowId};
use crate::app::domain::document::{APP_NAME, UNTITLED};
use crate::app::infrastructure::buffer::ModifyHook;
use crate::app::services::gutter::{MIN_GUTTER_WIDTH, display_width};
use super::menu::build_menu;

pub struct MainWidgets {
    pub wind: Window,
    pub row: Flex,
    pub gutter_column: Flex,
    pub gutter_spacer: Frame,
    pub gutter: TextDisplay,
    pub gutter_buffer: TextBuffer,
    pub text_editor: TextEditor,
    pub text_buffer: TextBuffer,
    pub modify_hook: ModifyHook,
    pub scroll_poll: TimeoutHandle,
}

/// Build and show one editor window: menu bar on top, gutter and editor
/// side by side below it.
pub fn build_main_window(
    id: WindowId,
    sender: &Sender<Message>,
    config: &EditorConfig,
) -> MainWidgets {
    let mut wind = Window::default()
        .with_size(config.window_width, config.window_height)
        .with_label(&format!("{} - {}", UNTITLED, APP_NAME))
        .center_screen();
    wind.set_xclass("CodePilot");

    let mut column = Flex::default_fill();
    column.set_type(FlexType::Column);

    let mut menu = MenuBar::default();
    column.fixed(&menu, config.menu_height);
    build_menu(&mut menu, sender, id);

    let mut row = Flex::default();
    row.set_type(FlexType::Row);

    // The spacer under the gutter stands in for the editor's horizontal
    // scrollbar so both show the same number of rows.
    let mut gutter_column = Flex::default();
    gutter_column.set_type(FlexType::Column);

    let gutter_buffer = TextBuffer::default();
    let mut gutter = TextDisplay::default();
    gutter.set_buffer(gutter_buffer.clone());
    gutter.set_frame(FrameType::FlatBox);
    gutter.set_color(config.gutter_bgcolor);
    gutter.set_text_color(config.gutter_fgcolor);
    gutter.set_text_font(config.font);
    gutter.set_text_size(config.font_size);
    gutter.visible_focus(false);

    let mut gutter_spacer = Frame::default();
    gutter_spacer.set_frame(FrameType::FlatBox);
    gutter_spacer.set_color(config.gutter_bgcolor);
    gutter_column.fixed(&gutter_spacer, 0);
    gutter_column.end();
    row.fixed(&gutter_column, display_width(MIN_GUTTER_WIDTH, app::scrollbar_size()));

    let text_buffer = TextBuffer::default();
    let mut text_editor = TextEditor::default();
    text_editor.set_buffer(text_buffer.clone());
    text_editor.set_text_font(config.font);
    text_editor.set_text_size(config.font_size);
    // Rows must stay one-to-one with gutter labels.
    text_editor.wrap_mode(WrapMode::None, 0);

    row.end();
    column.end();
    wind.resizable(&column);
    wind.end();

    wire_events(id, sender, &mut wind, &mut gutter, &mut text_editor);
    let modify_hook = ModifyHook::register(&text_buffer, {
        // Paste, undo and programmatic edits arrive here rather than as keys.
        let s = *sender;
        move |inserted, deleted| {
            if inserted > 0 || deleted > 0 {
                s.send(Message::BufferModified(id));
            }
        }
    });
    let scroll_poll = start_scroll_poll(id, sender, config.scroll_poll_interval);

    wind.show();
    let _ = text_editor.take_focus();

    MainWidgets {
        wind,
        row,
        gutter_column,
        gutter_spacer,
        gutter,
        gutter_buffer,
        text_editor,
        text_buffer,
        modify_hook,
        scroll_poll,
    }
}

/// Queue a scroll check every `interval` seconds until the returned handle
/// is removed. Scrollbar drags are delivered to the scrollbar itself, so the
/// handlers below never see them.
fn start_scroll_poll(id: WindowId, sender: &Sender<Message>, interval: f64) -> TimeoutHandle {
    let s = *sender;
    app::add_timeout3(interval, move |handle| {
        s.send(Message::ScrollChanged(id));
        app::repeat_timeout3(interval, handle);
    })
}

fn wire_events(
    id: WindowId,
    sender: &Sender<Message>,
    wind: &mut Window,
    gutter: &mut TextDisplay,
    text_editor: &mut TextEditor,
) {
    // Handlers run before the widget's own handling; the messages are read
    // after the event completes, so they see the edited and scrolled state.
    let s = *sender;
    text_editor.handle(move |_, event| {
        match event {
            Event::KeyDown | Event::KeyUp => {
                s.send(Message::BufferModified(id));
                s.send(Message::ScrollChanged(id));
            }
            Event::MouseWheel | Event::Push | Event::Drag | Event::Released => {
                s.send(Message::ScrollChanged(id));
            }
            _ => {}
        }
        false
    });

    let s = *sender;
    gutter.handle(move |_, event| {
        if matches!(event, Event::MouseWheel | Event::Push | Event::Drag | Event::Released) {
            s.send(Message::ScrollChanged(id));
        }
        false
    });

    // Only the title bar close button closes a window; Escape is ignored.
    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::WindowClose(id));
        }
    });
}
