use fltk::{
    button::Button,
    enums::{Align, Color, Font},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::domain::document::APP_NAME;

/// Static text below the title and version.
pub fn about_text() -> String {
    format!(
        "A minimal notepad with a line-number gutter\n\n\
         Version {}\n\
         Built with Rust and FLTK",
        env!("CARGO_PKG_VERSION")
    )
}

/// Show About dialog
pub fn show_about_dialog() {
    let mut dialog = Window::default()
        .with_size(360, 220)
        .with_label(&format!("About {}", APP_NAME))
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 340, 200, None);
    flex.set_type(FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default();
    title.set_label(APP_NAME);
    title.set_label_size(22);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 40);

    let mut info_frame = Frame::default();
    info_frame.set_label(&about_text());
    info_frame.set_label_size(12);
    info_frame.set_label_color(Color::from_rgb(100, 100, 100));
    info_frame.set_align(Align::Center | Align::Inside);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 35);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    run_dialog(&dialog);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_text_mentions_version() {
        let text = about_text();
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
        assert!(text.contains("FLTK"));
    }
}
